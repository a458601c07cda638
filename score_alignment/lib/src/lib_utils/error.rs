// errors raised while validating and scoring an alignment

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("{parameter} must be between 0 and 1, got {value}")]
    FractionOutOfRange { parameter: &'static str, value: f64 },

    #[error("front trim ({front}) must not overlap with back trim ({back})")]
    TrimOverlap { front: f64, back: f64 },

    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("all sequences in '{column}' column do not have the same length")]
    UnevenAlignment { column: String },

    #[error("no sequences have keep set to true, nothing to score")]
    NoKeptSequences,

    #[error("all sequences look empty in alignment columns {front}..{back} once gap-only columns are removed")]
    EmptyAlignment { front: usize, back: usize },

    #[error("could not parse {source_name} at line {line}: {message}")]
    Parse { source_name: String, line: usize, message: String },

    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScoreError {
    pub fn parse<S: Into<String>, M: Into<String>>(source_name: S, line: usize, message: M) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the failure class raised when nothing is left to score.
    pub fn is_empty_alignment(&self) -> bool {
        matches!(self, Self::EmptyAlignment { .. } | Self::NoKeptSequences)
    }
}
