//! Residue substitution scoring.
//!
//! Two modes are supported and exactly one is active for a run:
//! - a fixed rule: +1 for identical residues, -1 otherwise
//! - a substitution table keyed by an ordered residue pair
//!
//! Table lookups are case-insensitive. A pair that is not in the table
//! scores 0.

use std::collections::HashMap;

/// Score for identical residues under the fixed rule.
pub const MATCH_SCORE: i32 = 1;
/// Score for differing residues under the fixed rule.
pub const MISMATCH_SCORE: i32 = -1;
/// Score of a pair that has no table entry.
pub const MISSING_PAIR_SCORE: i32 = 0;

/// Substitution scores keyed by an ordered, uppercased residue pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    scores: HashMap<(u8, u8), i32>,
}

impl SubstitutionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score for the ordered pair `(a, b)`, replacing any previous entry.
    pub fn insert(&mut self, a: u8, b: u8, score: i32) {
        self.scores
            .insert((a.to_ascii_uppercase(), b.to_ascii_uppercase()), score);
    }

    /// Looks up the ordered pair `(a, b)`.
    ///
    /// Returns `None` when the pair has no entry. `(a, b)` and `(b, a)` are
    /// distinct keys.
    pub fn get(&self, a: u8, b: u8) -> Option<i32> {
        self.scores
            .get(&(a.to_ascii_uppercase(), b.to_ascii_uppercase()))
            .copied()
    }

    /// Number of pairs in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Largest absolute score in the table (0 when empty).
    pub fn max_magnitude(&self) -> i64 {
        self.scores
            .values()
            .map(|&score| i64::from(score).abs())
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<((u8, u8), i32)> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = ((u8, u8), i32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for ((a, b), score) in iter {
            table.insert(a, b, score);
        }
        table
    }
}

/// How a pair of aligned residues is scored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    /// +1 for identical residues, -1 otherwise (case-sensitive).
    #[default]
    Fixed,
    /// Ordered-pair lookup; absent pairs score 0.
    Table(SubstitutionTable),
}

impl ScoringPolicy {
    /// Scores residue `a` (from the column sequence) against `b` (from the row sequence).
    pub fn score(&self, a: u8, b: u8) -> i32 {
        match self {
            ScoringPolicy::Fixed => {
                if a == b {
                    MATCH_SCORE
                } else {
                    MISMATCH_SCORE
                }
            }
            ScoringPolicy::Table(table) => table.get(a, b).unwrap_or(MISSING_PAIR_SCORE),
        }
    }

    /// Largest absolute score a single residue pair can receive.
    pub fn max_magnitude(&self) -> i64 {
        match self {
            ScoringPolicy::Fixed => i64::from(MATCH_SCORE)
                .abs()
                .max(i64::from(MISMATCH_SCORE).abs()),
            ScoringPolicy::Table(table) => table.max_magnitude(),
        }
    }

    /// Returns true when a substitution table is in use.
    pub fn is_table(&self) -> bool {
        matches!(self, ScoringPolicy::Table(_))
    }
}

impl From<SubstitutionTable> for ScoringPolicy {
    fn from(table: SubstitutionTable) -> Self {
        ScoringPolicy::Table(table)
    }
}
