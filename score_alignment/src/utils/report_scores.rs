/*
    Score one alignment file
        read fasta or table
        score every kept sequence
        write the table with scores next to the input, <input><suffix>
*/

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use log::{debug, info};
use alignment_quality::{read_aligned_fasta, score_alignment, AlignmentTable, Result, ScoreParams};
use super::get_args::{Cli, Format};

/// Settings shared by every input file.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format: Format,
    pub params: ScoreParams,
    pub exclude: HashSet<String>,
    pub output_suffix: String,
}

impl ReportConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            params: ScoreParams {
                sparse_column_cutoff: cli.sparse_column_cutoff,
                align_trim: (cli.front_trim, cli.back_trim),
            },
            exclude: cli.exclude.iter().cloned().collect(),
            output_suffix: cli.output_suffix.clone(),
        }
    }
}

pub fn output_path(file: &Path, suffix: &str) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

pub fn report_scores(file: &Path, config: &ReportConfig) -> Result<PathBuf> {
    let table = match config.format {
        Format::Fasta => {
            let records = read_aligned_fasta(file)?;
            AlignmentTable::from_fasta(records, &config.exclude)
        }
        Format::Table => AlignmentTable::read_tsv_path(file)?,
    };
    debug!("{:?}: {} rows loaded", file, table.len());
    let scored = score_alignment(&table, &config.params)?;
    let out = output_path(file, &config.output_suffix);
    scored.write_tsv_path(&out)?;
    info!("Scored {:?} -> {:?}", file, out);
    Ok(out)
}
