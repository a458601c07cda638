use clap::{Parser, ValueEnum};
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to alignment file, either aligned fasta or a tab separated table
    #[arg(short='i', long="infile", required = true, action=clap::ArgAction::Append)]
    pub input_alignment: Vec<PathBuf>,
    /// Input format. 'table' needs a header with 'keep' and 'alignment' columns
    #[arg(short='f', long="format", value_enum, default_value_t=Format::Fasta)]
    pub format: Format,
    /// Column is sparse if at least this fraction of sequences have a gap. Default: 0.8
    #[arg(short='c', long="sparse-column-cutoff", value_parser=validate_fraction, default_value_t=0.8)]
    pub sparse_column_cutoff: f64,
    /// Fraction of the alignment left unscored at the front. Default: 0.1
    #[arg(long="front-trim", value_parser=validate_fraction, default_value_t=0.1)]
    pub front_trim: f64,
    /// Fraction of the alignment where scoring stops. Default: 0.9
    #[arg(long="back-trim", value_parser=validate_fraction, default_value_t=0.9)]
    pub back_trim: f64,
    /// Sequence names to leave unscored (fasta input only)
    #[arg(short='x', long="exclude", action=clap::ArgAction::Append)]
    pub exclude: Vec<String>,
    /// Suffix to be appended to the filename when storing the scores. Default: "_scores.tsv"
    #[arg(short='s', long="output-suffix", default_value_t=String::from("_scores.tsv"))]
    pub output_suffix: String,
    /// Number of input files scored at the same time
    #[arg(short='n', long="threads", default_value_t=4)]
    pub nproc: usize,
}

const FRACTION: RangeInclusive<f64> = 0f64..=1f64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Format {
    Fasta,
    Table,
}

fn validate_fraction(input_str: &str) -> Result<f64, String> {
    let fraction: f64 = input_str
        .parse()
        .map_err(|_| format!("'{}' is not a number", input_str))?;
    if FRACTION.contains(&fraction) {
        Ok(fraction)
    } else {
        Err(
            format!("Value not in the range {} - {}", FRACTION.start(), FRACTION.end())
        )
    }
}
