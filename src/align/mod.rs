//! Needleman-Wunsch global alignment.
//!
//! An alignment run goes through four steps:
//! 1. [`AlignmentMatrix::fill`] builds the score and direction tables
//! 2. [`Traceback::walk`] recovers the gapped sequences
//! 3. [`rescore`] recomputes the total from the gapped sequences
//! 4. the pieces are packed into an [`AlignmentResult`]
//!
//! ```
//! use nwalign::align::{align, AlignParams};
//! use nwalign::scoring::ScoringPolicy;
//!
//! let result = align(b"ACGT", b"AGT", &ScoringPolicy::Fixed, &AlignParams::default()).unwrap();
//! assert_eq!(result.aligned_a_str(), "ACGT");
//! assert_eq!(result.aligned_b_str(), "A-GT");
//! assert_eq!(result.total_score, 1);
//! ```

pub mod matrix;
pub mod rescore;
pub mod traceback;

use std::borrow::Cow;

use thiserror::Error;

use crate::scoring::ScoringPolicy;

pub use matrix::{AlignmentMatrix, Direction};
pub use rescore::rescore;
pub use traceback::{Traceback, GAP};

/// Gap penalty used when none is configured.
pub const DEFAULT_GAP_PENALTY: i32 = -2;

/// Which of the two inputs was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Errors that can occur before alignment starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("The {0} sequence is empty")]
    EmptySequence(Side),

    #[error("Alignment scores could exceed the 32-bit range ({columns} columns at up to {magnitude} per column)")]
    ScoreOverflow { columns: usize, magnitude: i64 },
}

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

/// Alignment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignParams {
    /// Score added for each gap column (normally negative)
    pub gap_penalty: i32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            gap_penalty: DEFAULT_GAP_PENALTY,
        }
    }
}

impl AlignParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }
}

/// A finished global alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    /// First sequence with gaps inserted
    pub aligned_a: Vec<u8>,
    /// Second sequence with gaps inserted
    pub aligned_b: Vec<u8>,
    /// '|' where the aligned residues are identical, ' ' elsewhere
    pub indicator: Vec<u8>,
    /// Score recomputed from the aligned sequences
    pub total_score: i32,
    /// Number of columns without a gap (matches and mismatches)
    pub diagonal_count: usize,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    /// Returns true if the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Number of columns marked as identical.
    pub fn identity_count(&self) -> usize {
        self.indicator.iter().filter(|&&c| c == traceback::MATCH_MARK).count()
    }

    pub fn aligned_a_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_a)
    }

    pub fn aligned_b_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_b)
    }

    pub fn indicator_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.indicator)
    }
}

/// Rejects runs whose cell scores could leave the `i32` range.
///
/// No path through the matrix has more than `|seq_a| + |seq_b|` steps, and
/// no step moves the score by more than the largest gap or pair magnitude.
fn check_score_range(seq_a: &[u8], seq_b: &[u8], policy: &ScoringPolicy, params: &AlignParams) -> AlignResult<()> {
    let columns = seq_a.len().saturating_add(seq_b.len());
    let magnitude = policy.max_magnitude().max(i64::from(params.gap_penalty).abs());
    let bound = i64::try_from(columns).ok().and_then(|c| c.checked_mul(magnitude));

    match bound {
        Some(bound) if bound <= i64::from(i32::MAX) => Ok(()),
        _ => Err(AlignError::ScoreOverflow { columns, magnitude }),
    }
}

/// Globally aligns `seq_a` (matrix columns) against `seq_b` (matrix rows).
///
/// Both sequences must be non-empty, and the gap penalty and pair scores
/// must keep every cell within `i32`. Every residue is scored by `policy`,
/// including letters outside the usual alphabets and the `-` byte.
pub fn align(
    seq_a: &[u8],
    seq_b: &[u8],
    policy: &ScoringPolicy,
    params: &AlignParams,
) -> AlignResult<AlignmentResult> {
    if seq_a.is_empty() {
        return Err(AlignError::EmptySequence(Side::First));
    }
    if seq_b.is_empty() {
        return Err(AlignError::EmptySequence(Side::Second));
    }
    check_score_range(seq_a, seq_b, policy, params)?;

    log::debug!(
        "Filling {}x{} alignment matrix (gap penalty {}, {} scoring)",
        seq_b.len() + 1,
        seq_a.len() + 1,
        params.gap_penalty,
        if policy.is_table() { "table" } else { "fixed" }
    );

    let matrix = AlignmentMatrix::fill(seq_a, seq_b, policy, params.gap_penalty);
    let traceback = Traceback::walk(&matrix, seq_a, seq_b);
    let total_score = rescore(
        &traceback.steps,
        &traceback.aligned_a,
        &traceback.aligned_b,
        policy,
        params.gap_penalty,
    );

    debug_assert_eq!(
        total_score,
        matrix.terminal_score(),
        "rescored alignment disagrees with the matrix"
    );

    log::debug!(
        "Alignment length {}, {} diagonal steps, score {}",
        traceback.aligned_a.len(),
        traceback.diagonal_count,
        total_score
    );

    Ok(AlignmentResult {
        aligned_a: traceback.aligned_a,
        aligned_b: traceback.aligned_b,
        indicator: traceback.indicator,
        total_score,
        diagonal_count: traceback.diagonal_count,
    })
}
