//! Independent rescoring of a finished alignment.

use super::matrix::Direction;
use crate::scoring::ScoringPolicy;

/// Sums the score of an alignment column by column.
///
/// `steps` gives the traceback step behind each column: a Diagonal column
/// is scored by `policy`, a Left or Up column contributes `gap_penalty`.
/// All three slices are expected to have equal length; extra trailing
/// entries are ignored.
pub fn rescore(
    steps: &[Direction],
    aligned_a: &[u8],
    aligned_b: &[u8],
    policy: &ScoringPolicy,
    gap_penalty: i32,
) -> i32 {
    steps
        .iter()
        .zip(aligned_a.iter().zip(aligned_b))
        .map(|(step, (&a, &b))| match step {
            Direction::Diagonal => policy.score(a, b),
            Direction::Left | Direction::Up => gap_penalty,
        })
        .sum()
}
