/*
    Read aligned sequences stored in fasta format
        header lines start with ">"
        sequence may span several lines, lines are concatenated
        empty lines are skipped
    Fail if
        sequence found before the first header
        header has no sequence
*/

use std::io::BufRead;
use std::path::Path;
use log::{debug, info};
use super::error::{Result, ScoreError};
use super::struct_helper::FileBufferHelper;
use super::table::ALIGNMENT_COLUMN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub name: String,
    pub sequence: String,
}

pub fn read_aligned_fasta(path: &Path) -> Result<Vec<FastaRecord>> {
    let mut file = FileBufferHelper::open(path)?;
    let records = parse_records(&mut file)?;
    info!("Read {} sequences from {:?}", records.len(), path);
    Ok(records)
}

pub fn parse_aligned_fasta<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<FastaRecord>> {
    let mut file = FileBufferHelper::new(reader, source_name.to_string());
    parse_records(&mut file)
}

fn parse_records<R: BufRead>(file: &mut FileBufferHelper<R>) -> Result<Vec<FastaRecord>> {
    let mut records: Vec<FastaRecord> = Vec::new();
    // record being filled and the line of its header
    let mut current: Option<(FastaRecord, usize)> = None;
    while file.next_line()? {
        let line = file.line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            let name = header.split_whitespace().next().unwrap_or("").to_string();
            if let Some((record, header_line)) = current.take() {
                push_record(file, &mut records, record, header_line)?;
            }
            debug!("Reading {}", name);
            current = Some((FastaRecord { name, sequence: String::new() }, file.line_number));
        } else if let Some((record, _)) = current.as_mut() {
            record.sequence.push_str(line);
        } else {
            return Err(file.parse_error("encountered sequence before header"));
        }
    }
    if let Some((record, header_line)) = current.take() {
        push_record(file, &mut records, record, header_line)?;
    }
    Ok(records)
}

fn push_record<R: BufRead>(
    file: &FileBufferHelper<R>,
    records: &mut Vec<FastaRecord>,
    record: FastaRecord,
    header_line: usize,
) -> Result<()> {
    if record.sequence.is_empty() {
        return Err(ScoreError::parse(
            file.source_name.clone(),
            header_line,
            format!("no sequence found for header '{}'", record.name),
        ));
    }
    records.push(record);
    Ok(())
}

/// Length in characters shared by every record, or an error if they disagree.
pub fn check_uniform_length(records: &[FastaRecord]) -> Result<usize> {
    let mut lengths = records.iter().map(|r| r.sequence.chars().count());
    let first = lengths.next().ok_or(ScoreError::NoKeptSequences)?;
    if lengths.all(|len| len == first) {
        Ok(first)
    } else {
        Err(ScoreError::UnevenAlignment { column: ALIGNMENT_COLUMN.to_string() })
    }
}
