/*
    Score the quality of a multiple sequence alignment, one row at a time
        validate cutoff and trim fractions
        encode the kept, trimmed alignments into an integer matrix
        classify columns as sparse or dense
        compute fx_in_sparse, fx_missing_dense and sparse_run_length
        return a copy of the table with the three scores attached
*/

use std::ops::RangeInclusive;
use log::info;
pub mod lib_utils;

pub use lib_utils::error::{Result, ScoreError};
pub use lib_utils::fasta::{check_uniform_length, parse_aligned_fasta, read_aligned_fasta, FastaRecord};
pub use lib_utils::matrix::{AlignmentMatrix, TrimWindow};
pub use lib_utils::metrics::ScoreRecord;
pub use lib_utils::table::{AlignmentTable, ScoredTable};

use lib_utils::columns::classify_columns;
use lib_utils::metrics::compute_scores;

const FRACTION: RangeInclusive<f64> = 0f64..=1f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreParams {
    /// A column is sparse when at least this fraction of its cells are gaps.
    pub sparse_column_cutoff: f64,
    /// Fractions of the alignment length bounding the scored window,
    /// read like a slice: (0.0, 1.0) keeps everything.
    pub align_trim: (f64, f64),
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            sparse_column_cutoff: 0.80,
            align_trim: (0.1, 0.9),
        }
    }
}

impl ScoreParams {
    pub fn validate(&self) -> Result<()> {
        check_fraction("sparse_column_cutoff", self.sparse_column_cutoff)?;
        let (front, back) = self.align_trim;
        check_fraction("align_trim[0]", front)?;
        check_fraction("align_trim[1]", back)?;
        if front >= back {
            return Err(ScoreError::TrimOverlap { front, back });
        }
        Ok(())
    }
}

// NaN fails the range check too
fn check_fraction(parameter: &'static str, value: f64) -> Result<()> {
    if FRACTION.contains(&value) {
        Ok(())
    } else {
        Err(ScoreError::FractionOutOfRange { parameter, value })
    }
}

/// Score every kept sequence of `table`. The table itself is left untouched;
/// rows with keep == false come back without scores.
pub fn score_alignment(table: &AlignmentTable, params: &ScoreParams) -> Result<ScoredTable> {
    params.validate()?;
    let (front, back) = params.align_trim;
    let matrix = AlignmentMatrix::from_table(table, front, back)?;
    let sparse_columns = classify_columns(&matrix, params.sparse_column_cutoff);
    info!(
        "{} sequences by {} columns, {} sparse",
        matrix.nrows(),
        matrix.ncols(),
        sparse_columns.iter().filter(|&&s| s).count()
    );
    let records = compute_scores(&matrix, &sparse_columns);
    Ok(ScoredTable::assemble(table, matrix.row_indices(), records))
}
