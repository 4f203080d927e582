//! Reconstruction of the optimal alignment from the direction table.

use super::matrix::{AlignmentMatrix, Direction};

/// Gap marker used in aligned sequences.
pub const GAP: u8 = b'-';
/// Indicator byte for identical aligned residues.
pub const MATCH_MARK: u8 = b'|';
/// Indicator byte for mismatches and gap columns.
pub const NO_MARK: u8 = b' ';

/// Output of a traceback walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traceback {
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
    pub indicator: Vec<u8>,
    /// Step taken for each alignment column, in alignment order.
    ///
    /// Gap columns are told apart by step rather than by byte, since an
    /// input residue may itself be the gap character.
    pub steps: Vec<Direction>,
    /// Number of Diagonal steps, whether the residues matched or not.
    pub diagonal_count: usize,
}

impl Traceback {
    /// Walks from the bottom-right cell back to the origin.
    ///
    /// Columns are collected end-first and reversed once at the end.
    pub fn walk(matrix: &AlignmentMatrix, seq_a: &[u8], seq_b: &[u8]) -> Self {
        let mut row = matrix.height() - 1;
        let mut col = matrix.width() - 1;

        let capacity = row + col;
        let mut aligned_a = Vec::with_capacity(capacity);
        let mut aligned_b = Vec::with_capacity(capacity);
        let mut indicator = Vec::with_capacity(capacity);
        let mut steps = Vec::with_capacity(capacity);
        let mut diagonal_count = 0;

        while row > 0 || col > 0 {
            let step = matrix.direction(row, col);
            steps.push(step);
            match step {
                Direction::Diagonal => {
                    let (a, b) = (seq_a[col - 1], seq_b[row - 1]);
                    aligned_a.push(a);
                    aligned_b.push(b);
                    indicator.push(if a == b { MATCH_MARK } else { NO_MARK });
                    diagonal_count += 1;
                    row -= 1;
                    col -= 1;
                }
                Direction::Left => {
                    aligned_a.push(seq_a[col - 1]);
                    aligned_b.push(GAP);
                    indicator.push(NO_MARK);
                    col -= 1;
                }
                Direction::Up => {
                    aligned_a.push(GAP);
                    aligned_b.push(seq_b[row - 1]);
                    indicator.push(NO_MARK);
                    row -= 1;
                }
            }
        }

        aligned_a.reverse();
        aligned_b.reverse();
        indicator.reverse();
        steps.reverse();

        Self {
            aligned_a,
            aligned_b,
            indicator,
            steps,
            diagonal_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringPolicy;

    fn run(a: &[u8], b: &[u8]) -> Traceback {
        let matrix = AlignmentMatrix::fill(a, b, &ScoringPolicy::Fixed, -2);
        Traceback::walk(&matrix, a, b)
    }

    #[test]
    fn test_identical() {
        let tb = run(b"ACGT", b"ACGT");
        assert_eq!(tb.aligned_a, b"ACGT");
        assert_eq!(tb.aligned_b, b"ACGT");
        assert_eq!(tb.indicator, b"||||");
        assert_eq!(tb.diagonal_count, 4);
    }

    #[test]
    fn test_gap_in_row_sequence() {
        let tb = run(b"ACGT", b"AGT");
        assert_eq!(tb.aligned_a, b"ACGT");
        assert_eq!(tb.aligned_b, b"A-GT");
        assert_eq!(tb.indicator, b"| ||");
        assert_eq!(tb.diagonal_count, 3);
    }

    #[test]
    fn test_gap_in_column_sequence() {
        let tb = run(b"A", b"AAA");
        assert_eq!(tb.aligned_a, b"--A");
        assert_eq!(tb.aligned_b, b"AAA");
        assert_eq!(tb.indicator, b"  |");
        assert_eq!(tb.diagonal_count, 1);
    }

    #[test]
    fn test_mismatch_counts_as_diagonal() {
        let tb = run(b"AC", b"CA");
        assert_eq!(tb.aligned_a, b"AC");
        assert_eq!(tb.aligned_b, b"CA");
        assert_eq!(tb.indicator, b"  ");
        assert_eq!(tb.diagonal_count, 2);
    }

    #[test]
    fn test_indicator_is_case_sensitive() {
        let tb = run(b"acgt", b"ACGT");
        assert_eq!(tb.indicator, b"    ");
        assert_eq!(tb.diagonal_count, 4);
    }

    #[test]
    fn test_single_residues() {
        let tb = run(b"A", b"A");
        assert_eq!(tb.aligned_a, b"A");
        assert_eq!(tb.aligned_b, b"A");
        assert_eq!(tb.indicator, b"|");
    }

    #[test]
    fn test_steps_follow_columns() {
        let tb = run(b"ACGT", b"AGT");
        assert_eq!(
            tb.steps,
            vec![Direction::Diagonal, Direction::Left, Direction::Diagonal, Direction::Diagonal]
        );
    }

    #[test]
    fn test_dash_residue_is_a_diagonal_step() {
        let tb = run(b"A-", b"A-");
        assert_eq!(tb.aligned_a, b"A-");
        assert_eq!(tb.indicator, b"||");
        assert_eq!(tb.steps, vec![Direction::Diagonal, Direction::Diagonal]);
        assert_eq!(tb.diagonal_count, 2);
    }
}
