//! Dynamic-programming tables for global alignment.
//!
//! The score table has `|seq_b| + 1` rows and `|seq_a| + 1` columns. A
//! same-shaped direction table records which predecessor produced each
//! cell's optimum.

use crate::scoring::ScoringPolicy;

/// Predecessor of a cell on the optimal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From `(i-1, j-1)`: both residues consumed.
    Diagonal,
    /// From `(i, j-1)`: gap in the row sequence.
    Left,
    /// From `(i-1, j)`: gap in the column sequence.
    Up,
}

impl Direction {
    /// Picks the best of the three candidates.
    ///
    /// Ties resolve Diagonal, then Left, then Up.
    pub fn choose(diagonal: i32, left: i32, up: i32) -> (i32, Direction) {
        let best = diagonal.max(left).max(up);
        let direction = if best == diagonal {
            Direction::Diagonal
        } else if best == left {
            Direction::Left
        } else {
            Direction::Up
        };
        (best, direction)
    }
}

/// Filled score and direction tables for one alignment run.
#[derive(Debug, Clone)]
pub struct AlignmentMatrix {
    scores: Vec<Vec<i32>>,
    directions: Vec<Vec<Direction>>,
}

impl AlignmentMatrix {
    /// Fills both tables for `seq_a` (columns) against `seq_b` (rows).
    ///
    /// Rows are computed top to bottom and each row left to right, since a
    /// cell reads its left, upper and upper-left neighbours.
    pub fn fill(seq_a: &[u8], seq_b: &[u8], policy: &ScoringPolicy, gap_penalty: i32) -> Self {
        let height = seq_b.len() + 1;
        let width = seq_a.len() + 1;

        let mut scores = vec![vec![0i32; width]; height];
        let mut directions = vec![vec![Direction::Left; width]; height];

        // Row 0 keeps Direction::Left; column 0 walks up.
        for (j, cell) in scores[0].iter_mut().enumerate() {
            *cell = j as i32 * gap_penalty;
        }
        for i in 1..height {
            scores[i][0] = i as i32 * gap_penalty;
            directions[i][0] = Direction::Up;
        }

        for i in 1..height {
            let b = seq_b[i - 1];
            for j in 1..width {
                let diagonal = scores[i - 1][j - 1] + policy.score(seq_a[j - 1], b);
                let left = scores[i][j - 1] + gap_penalty;
                let up = scores[i - 1][j] + gap_penalty;

                let (best, direction) = Direction::choose(diagonal, left, up);
                scores[i][j] = best;
                directions[i][j] = direction;
            }
        }

        Self { scores, directions }
    }

    /// Number of rows (`|seq_b| + 1`).
    pub fn height(&self) -> usize {
        self.scores.len()
    }

    /// Number of columns (`|seq_a| + 1`).
    pub fn width(&self) -> usize {
        self.scores.first().map_or(0, Vec::len)
    }

    pub fn score(&self, row: usize, col: usize) -> i32 {
        self.scores[row][col]
    }

    pub fn direction(&self, row: usize, col: usize) -> Direction {
        self.directions[row][col]
    }

    /// Score of the bottom-right cell, the optimal global alignment score.
    pub fn terminal_score(&self) -> i32 {
        self.scores[self.height() - 1][self.width() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SubstitutionTable;

    #[test]
    fn test_dimensions() {
        let m = AlignmentMatrix::fill(b"ACGT", b"AC", &ScoringPolicy::Fixed, -2);
        assert_eq!(m.height(), 3);
        assert_eq!(m.width(), 5);
    }

    #[test]
    fn test_borders_are_gap_multiples() {
        let m = AlignmentMatrix::fill(b"ACG", b"TT", &ScoringPolicy::Fixed, -2);
        assert_eq!(m.score(0, 0), 0);
        assert_eq!(m.score(0, 1), -2);
        assert_eq!(m.score(0, 3), -6);
        assert_eq!(m.score(1, 0), -2);
        assert_eq!(m.score(2, 0), -4);

        assert_eq!(m.direction(0, 2), Direction::Left);
        assert_eq!(m.direction(2, 0), Direction::Up);
    }

    #[test]
    fn test_recurrence_on_small_matrix() {
        // seq_a = "AC" (columns), seq_b = "A" (row)
        let m = AlignmentMatrix::fill(b"AC", b"A", &ScoringPolicy::Fixed, -2);
        // (1,1): diag 0+1=1, left -2-2=-4, up -2-2=-4
        assert_eq!(m.score(1, 1), 1);
        assert_eq!(m.direction(1, 1), Direction::Diagonal);
        // (1,2): diag -2-1=-3, left 1-2=-1, up -4-2=-6
        assert_eq!(m.score(1, 2), -1);
        assert_eq!(m.direction(1, 2), Direction::Left);
        assert_eq!(m.terminal_score(), -1);
    }

    #[test]
    fn test_up_direction() {
        // seq_a = "A", seq_b = "AC": second row must come from above
        let m = AlignmentMatrix::fill(b"A", b"AC", &ScoringPolicy::Fixed, -2);
        assert_eq!(m.score(2, 1), -1);
        assert_eq!(m.direction(2, 1), Direction::Up);
    }

    #[test]
    fn test_choose_prefers_diagonal_on_three_way_tie() {
        assert_eq!(Direction::choose(3, 3, 3), (3, Direction::Diagonal));
    }

    #[test]
    fn test_choose_prefers_left_over_up() {
        assert_eq!(Direction::choose(-5, 2, 2), (2, Direction::Left));
        assert_eq!(Direction::choose(-5, 1, 2), (2, Direction::Up));
        assert_eq!(Direction::choose(4, 4, 9), (9, Direction::Up));
        assert_eq!(Direction::choose(4, 1, 4), (4, Direction::Diagonal));
    }

    #[test]
    fn test_all_ties_record_diagonal() {
        // With a zero gap penalty and an empty table every candidate is 0.
        let policy = ScoringPolicy::Table(SubstitutionTable::new());
        let m = AlignmentMatrix::fill(b"ACGT", b"TGCA", &policy, 0);
        for i in 1..m.height() {
            for j in 1..m.width() {
                assert_eq!(m.score(i, j), 0);
                assert_eq!(m.direction(i, j), Direction::Diagonal);
            }
        }
    }

    #[test]
    fn test_table_scores_used_in_fill() {
        let table: SubstitutionTable = [((b'A', b'G'), 5)].into_iter().collect();
        let policy = ScoringPolicy::Table(table);

        let forward = AlignmentMatrix::fill(b"A", b"G", &policy, -2);
        assert_eq!(forward.terminal_score(), 5);

        let reversed = AlignmentMatrix::fill(b"G", b"A", &policy, -2);
        assert_eq!(reversed.terminal_score(), 0);
    }
}
