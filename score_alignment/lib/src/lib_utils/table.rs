/*
    Table of sequences consumed and produced by the scorer
        every row has a `keep` flag and an `alignment` string
        any other columns are carried through untouched
    Build from
        (name, keep, alignment) records
        aligned fasta records
        tab separated file with a header line
    Scored output
        copy of the table plus three score columns
        rows with keep == false get empty (missing) scores
*/

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use log::{debug, info};
use super::error::{Result, ScoreError};
use super::fasta::FastaRecord;
use super::metrics::ScoreRecord;
use super::struct_helper::FileBufferHelper;

pub const KEEP_COLUMN: &str = "keep";
pub const ALIGNMENT_COLUMN: &str = "alignment";
pub const NAME_COLUMN: &str = "name";
pub const SCORE_COLUMNS: [&str; 3] = ["fx_in_sparse", "fx_missing_dense", "sparse_run_length"];

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub keep: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentTable {
    header: Vec<String>,
    alignment_index: usize,
    rows: Vec<TableRow>,
}

impl AlignmentTable {
    /// Table with `name`, `keep` and `alignment` columns.
    pub fn from_records<I, N, A>(records: I) -> Self
    where
        I: IntoIterator<Item = (N, bool, A)>,
        N: Into<String>,
        A: Into<String>,
    {
        let rows = records
            .into_iter()
            .map(|(name, keep, alignment)| TableRow {
                cells: vec![name.into(), format_keep(keep).to_string(), alignment.into()],
                keep,
            })
            .collect();
        Self {
            header: vec![NAME_COLUMN.to_string(), KEEP_COLUMN.to_string(), ALIGNMENT_COLUMN.to_string()],
            alignment_index: 2,
            rows,
        }
    }

    /// Every record is kept unless its name is listed in `exclude`.
    pub fn from_fasta(records: Vec<FastaRecord>, exclude: &HashSet<String>) -> Self {
        Self::from_records(records.into_iter().map(|r| {
            let keep = !exclude.contains(&r.name);
            (r.name, keep, r.sequence)
        }))
    }

    pub fn read_tsv_path(path: &Path) -> Result<Self> {
        let mut file = FileBufferHelper::open(path)?;
        let table = read_tsv(&mut file)?;
        info!("Read table with {} rows from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn parse_tsv<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut file = FileBufferHelper::new(reader, source_name.to_string());
        read_tsv(&mut file)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn alignment(&self, row: usize) -> &str {
        &self.rows[row].cells[self.alignment_index]
    }

    /// Row indices with keep == true, in table order, paired with the alignment.
    pub fn kept_alignments(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.keep)
            .map(move |(idx, row)| (idx, row.cells[self.alignment_index].as_str()))
    }
}

fn read_tsv<R: BufRead>(file: &mut FileBufferHelper<R>) -> Result<AlignmentTable> {
    if !file.next_line()? {
        return Err(file.parse_error("table is empty, expected a header line"));
    }
    let header: Vec<String> = file.line.split('\t').map(|s| s.trim().to_string()).collect();
    let find_column = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ScoreError::MissingColumn { column: name.to_string() })
    };
    let keep_index = find_column(KEEP_COLUMN)?;
    let alignment_index = find_column(ALIGNMENT_COLUMN)?;
    debug!("Found '{}' at column {} and '{}' at column {}", KEEP_COLUMN, keep_index, ALIGNMENT_COLUMN, alignment_index);

    let mut rows = Vec::new();
    while file.next_line()? {
        if file.line.trim().is_empty() {
            continue;
        }
        let cells: Vec<String> = file.line.split('\t').map(|s| s.to_string()).collect();
        if cells.len() != header.len() {
            return Err(file.parse_error(format!(
                "expected {} fields, found {}",
                header.len(),
                cells.len()
            )));
        }
        let keep = parse_keep(cells[keep_index].trim())
            .ok_or_else(|| file.parse_error(format!("'{}' is not a valid keep value", cells[keep_index])))?;
        rows.push(TableRow { cells, keep });
    }
    Ok(AlignmentTable { header, alignment_index, rows })
}

fn parse_keep(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" | "1" => Some(true),
        "false" | "False" | "FALSE" | "0" => Some(false),
        _ => None,
    }
}

fn format_keep(keep: bool) -> &'static str {
    if keep {
        "True"
    } else {
        "False"
    }
}

/// Copy of a table with one optional score record per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTable {
    pub table: AlignmentTable,
    pub scores: Vec<Option<ScoreRecord>>,
}

impl ScoredTable {
    /// Place `records` at `row_indices`; all other rows stay missing.
    pub fn assemble(table: &AlignmentTable, row_indices: &[usize], records: Vec<ScoreRecord>) -> Self {
        let mut scores = vec![None; table.len()];
        for (&row, record) in row_indices.iter().zip(records) {
            scores[row] = Some(record);
        }
        Self { table: table.clone(), scores }
    }

    pub fn score(&self, row: usize) -> Option<&ScoreRecord> {
        self.scores.get(row).and_then(Option::as_ref)
    }

    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let header = self
            .table
            .header
            .iter()
            .map(String::as_str)
            .chain(SCORE_COLUMNS)
            .collect::<Vec<&str>>()
            .join("\t");
        writeln!(writer, "{}", header)?;
        for (row, score) in self.table.rows.iter().zip(&self.scores) {
            let score_cells = match score {
                Some(s) => format!("{}\t{}\t{}", s.fx_in_sparse, s.fx_missing_dense, s.sparse_run_length),
                None => "\t\t".to_string(),
            };
            writeln!(writer, "{}\t{}", row.cells.join("\t"), score_cells)?;
        }
        Ok(())
    }

    pub fn write_tsv_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| ScoreError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_tsv(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| ScoreError::io(path, e))?;
        info!("Scores written to {:?}", path);
        Ok(())
    }
}
