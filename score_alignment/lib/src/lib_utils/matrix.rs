/*
    Convert the kept rows of a table into an integer matrix
        check alignments are ascii and of identical length
        work out the trim window from the front and back fractions
        encode each character of the window, unknown characters become gaps
        drop columns holding nothing but gaps
*/

use ndarray::{Array2, ArrayView1, Axis};
use log::{debug, info, warn};
use super::alphabet::{self, GAP_CODE};
use super::error::{Result, ScoreError};
use super::table::{AlignmentTable, ALIGNMENT_COLUMN};

/// Half-open range of alignment columns retained for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimWindow {
    pub front: usize,
    pub back: usize,
}

impl TrimWindow {
    /// Fractions are rounded half to even. If both ends land on the same
    /// column the window is widened by one, preferring to move the front.
    pub fn new(length: usize, front_fraction: f64, back_fraction: f64) -> Result<Self> {
        if length == 0 {
            return Err(ScoreError::EmptyAlignment { front: 0, back: 0 });
        }
        let mut front = (length as f64 * front_fraction).round_ties_even() as usize;
        let mut back = (length as f64 * back_fraction).round_ties_even() as usize;
        if front == back {
            if front > 0 {
                front -= 1;
            } else {
                back += 1;
            }
        }
        if front >= back || back > length {
            return Err(ScoreError::TrimOverlap { front: front_fraction, back: back_fraction });
        }
        Ok(Self { front, back })
    }

    pub fn width(&self) -> usize {
        self.back - self.front
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    codes: Array2<u8>,
    row_indices: Vec<usize>,
}

impl AlignmentMatrix {
    pub fn from_table(table: &AlignmentTable, front_fraction: f64, back_fraction: f64) -> Result<Self> {
        let (row_indices, alignments): (Vec<usize>, Vec<Vec<char>>) = table
            .kept_alignments()
            .map(|(idx, aln)| (idx, aln.chars().collect()))
            .unzip();
        if row_indices.is_empty() {
            return Err(ScoreError::NoKeptSequences);
        }
        // lengths count characters, not bytes
        let length = alignments[0].len();
        if alignments.iter().any(|aln| aln.len() != length) {
            return Err(ScoreError::UnevenAlignment { column: ALIGNMENT_COLUMN.to_string() });
        }
        info!("Scoring {} of {} sequences, alignment length {}", row_indices.len(), table.len(), length);

        let window = TrimWindow::new(length, front_fraction, back_fraction)?;
        debug!("Trim window {}..{} of {}", window.front, window.back, length);

        let unknown = alignments
            .iter()
            .flat_map(|aln| &aln[window.front..window.back])
            .filter(|&&letter| !alphabet::is_alphabet_char(letter))
            .count();
        if unknown > 0 {
            warn!("{} characters outside {} were read as gaps", unknown, alphabet::AMINO_ACIDS);
        }

        let codes = Array2::from_shape_fn((alignments.len(), window.width()), |(row, col)| {
            alphabet::encode_char(alignments[row][window.front + col])
        });
        let codes = drop_gap_only_columns(codes);
        if codes.ncols() == 0 {
            return Err(ScoreError::EmptyAlignment { front: window.front, back: window.back });
        }
        debug!("{} columns left after removing gap-only columns", codes.ncols());
        Ok(Self { codes, row_indices })
    }

    /// Wrap an already encoded matrix; row `i` maps back to table row `i`.
    pub fn from_codes(codes: Array2<u8>) -> Self {
        let row_indices = (0..codes.nrows()).collect();
        Self { codes, row_indices }
    }

    pub fn codes(&self) -> &Array2<u8> {
        &self.codes
    }

    pub fn nrows(&self) -> usize {
        self.codes.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.codes.ncols()
    }

    pub fn row(&self, row: usize) -> ArrayView1<'_, u8> {
        self.codes.row(row)
    }

    pub fn column(&self, col: usize) -> ArrayView1<'_, u8> {
        self.codes.column(col)
    }

    /// Source table row for every matrix row.
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Render a row back into letters.
    pub fn row_string(&self, row: usize) -> String {
        self.codes
            .row(row)
            .iter()
            .map(|&code| alphabet::decode(code).unwrap_or('-'))
            .collect()
    }
}

pub fn drop_gap_only_columns(codes: Array2<u8>) -> Array2<u8> {
    let keep: Vec<usize> = codes
        .axis_iter(Axis(1))
        .enumerate()
        .filter(|(_, column)| column.iter().any(|&code| code != GAP_CODE))
        .map(|(idx, _)| idx)
        .collect();
    if keep.len() == codes.ncols() {
        codes
    } else {
        codes.select(Axis(1), &keep)
    }
}
