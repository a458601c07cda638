/*
    Per sequence alignment quality scores, higher is worse
        fx_in_sparse: fraction of all columns where the sequence has a residue in a sparse column
        fx_missing_dense: fraction of dense columns where the sequence has a gap
        sparse_run_length: for every run of sparse columns count the residues the
            sequence places in it, keep the largest count. The residues do not have
            to be contiguous within the run.
*/

use log::{debug, warn};
use super::alphabet::GAP_CODE;
use super::matrix::AlignmentMatrix;
use super::rle::run_length_encode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub fx_in_sparse: f64,
    pub fx_missing_dense: f64,
    pub sparse_run_length: usize,
}

/// One record per matrix row. With no dense columns `fx_missing_dense` is NaN.
///
/// `sparse_columns` must hold one entry per matrix column, as returned by
/// `classify_columns` for the same matrix.
pub fn compute_scores(matrix: &AlignmentMatrix, sparse_columns: &[bool]) -> Vec<ScoreRecord> {
    debug_assert_eq!(matrix.ncols(), sparse_columns.len(), "one classification per column");
    let total_columns = sparse_columns.len() as f64;
    let dense_columns = sparse_columns.iter().filter(|&&sparse| !sparse).count();
    if dense_columns == 0 {
        warn!("No dense columns in alignment, fx_missing_dense is undefined");
    }

    let sparse_runs: Vec<(usize, usize)> = run_length_encode(sparse_columns)
        .into_iter()
        .filter(|run| run.value)
        .map(|run| (run.start, run.end()))
        .collect();
    debug!("{} runs of sparse columns", sparse_runs.len());

    (0..matrix.nrows())
        .map(|row| {
            let codes = matrix.row(row);
            let mut in_sparse = 0usize;
            let mut missing_dense = 0usize;
            for (&code, &sparse) in codes.iter().zip(sparse_columns) {
                match (code == GAP_CODE, sparse) {
                    (false, true) => in_sparse += 1,
                    (true, false) => missing_dense += 1,
                    _ => {}
                }
            }
            let sparse_run_length = sparse_runs
                .iter()
                .map(|&(start, end)| (start..end).filter(|&col| codes[col] != GAP_CODE).count())
                .max()
                .unwrap_or(0);
            ScoreRecord {
                fx_in_sparse: in_sparse as f64 / total_columns,
                fx_missing_dense: missing_dense as f64 / dense_columns as f64,
                sparse_run_length,
            }
        })
        .collect()
}
