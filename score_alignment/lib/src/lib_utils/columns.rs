// Flag each alignment column as sparse (mostly gaps) or dense.

use ndarray::Axis;
use log::debug;
use super::alphabet::GAP_CODE;
use super::matrix::AlignmentMatrix;

/// `true` marks a sparse column: its gap fraction is at least `cutoff`.
/// A cutoff of 0 therefore marks every column sparse.
///
/// Gap-only columns are removed before this is called, so a cutoff of 1
/// normally leaves every column dense.
pub fn classify_columns(matrix: &AlignmentMatrix, cutoff: f64) -> Vec<bool> {
    let rows = matrix.nrows() as f64;
    let sparse: Vec<bool> = matrix
        .codes()
        .axis_iter(Axis(1))
        .map(|column| {
            let gaps = column.iter().filter(|&&code| code == GAP_CODE).count();
            gaps as f64 / rows >= cutoff
        })
        .collect();
    debug!(
        "{} of {} columns are sparse at cutoff {}",
        sparse.iter().filter(|&&s| s).count(),
        sparse.len(),
        cutoff
    );
    sparse
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const G: u8 = GAP_CODE;

    fn matrix() -> AlignmentMatrix {
        // gap fractions per column: 0, 0.25, 0.5, 0.75
        AlignmentMatrix::from_codes(array![
            [0, 1, 2, 3],
            [0, 1, 2, G],
            [0, 1, G, G],
            [0, G, G, G],
        ])
    }

    #[test]
    fn cutoff_is_inclusive() {
        assert_eq!(classify_columns(&matrix(), 0.5), vec![false, false, true, true]);
        assert_eq!(classify_columns(&matrix(), 0.8), vec![false, false, false, false]);
    }

    #[test]
    fn zero_cutoff_marks_every_column_sparse() {
        assert_eq!(classify_columns(&matrix(), 0.0), vec![true, true, true, true]);
        let gapless = AlignmentMatrix::from_codes(array![[0, 1], [2, G]]);
        assert_eq!(classify_columns(&gapless, 0.0), vec![true, true]);
    }

    #[test]
    fn cutoff_of_one_is_all_dense() {
        let sparse = classify_columns(&matrix(), 1.0);
        assert_eq!(sparse.len(), 4);
        assert!(sparse.iter().all(|&s| !s));
    }
}
