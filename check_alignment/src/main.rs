/*
    Check aligned fasta files before scoring
        every record has a header and a sequence
        every sequence has the same length
        report characters outside the amino acid alphabet, they are scored as gaps
        report gap-only columns, they are dropped before scoring
*/

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::Parser;
use log::{error, info, warn};
use alignment_quality::lib_utils::alphabet;
use alignment_quality::{check_uniform_length, read_aligned_fasta, AlignmentMatrix, AlignmentTable, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to alignment file stored in fasta format
    #[arg(short='i', long="infile", required = true, action=clap::ArgAction::Append)]
    input_alignment: Vec<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
struct AlignmentSummary {
    sequences: usize,
    length: usize,
    unknown_characters: usize,
    informative_columns: usize,
}

fn check_alignment(file: &Path) -> Result<AlignmentSummary> {
    let records = read_aligned_fasta(file)?;
    let length = check_uniform_length(&records)?;
    let unknown_characters = records
        .iter()
        .flat_map(|r| r.sequence.chars())
        .filter(|&letter| !alphabet::is_alphabet_char(letter))
        .count();
    let sequences = records.len();
    let table = AlignmentTable::from_fasta(records, &HashSet::new());
    let matrix = AlignmentMatrix::from_table(&table, 0.0, 1.0)?;
    Ok(AlignmentSummary {
        sequences,
        length,
        unknown_characters,
        informative_columns: matrix.ncols(),
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let mut failed = false;
    for file in &cli.input_alignment {
        match check_alignment(file) {
            Ok(summary) => {
                info!("{:?}: {} sequences of length {}", file, summary.sequences, summary.length);
                if summary.unknown_characters > 0 {
                    warn!("{:?}: {} characters outside {} will be read as gaps",
                        file, summary.unknown_characters, alphabet::AMINO_ACIDS);
                }
                if summary.informative_columns < summary.length {
                    warn!("{:?}: {} gap-only columns will be dropped",
                        file, summary.length - summary.informative_columns);
                }
                println!("{}\tOK\t{}\t{}", file.display(), summary.sequences, summary.length);
            }
            Err(e) => {
                error!("Alignment failed {:?}: {}", file, e);
                println!("{}\tFAILED\t{}", file.display(), e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
