//! Substitution table loader.
//!
//! ## Format
//!
//! One entry per line: a two-residue pair token followed by an integer
//! score, separated by whitespace.
//!
//! ```text
//! AA 4
//! AR -1
//! FY 3
//! ```
//!
//! Blank lines are skipped. A line whose score is missing or not an
//! integer records a score of 0 for its pair. Pair tokens that are not
//! exactly two characters long are skipped with a warning.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::scoring::{SubstitutionTable, MISSING_PAIR_SCORE};

/// Errors that can occur while loading a substitution table.
#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Substitution table has no usable entries")]
    EmptyTable,
}

/// Result type for substitution table operations.
pub type SubstitutionResult<T> = Result<T, SubstitutionError>;

/// Loads a substitution table from a file.
pub fn parse_substitution_file<P: AsRef<Path>>(path: P) -> SubstitutionResult<SubstitutionTable> {
    let file = File::open(&path)?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_substitution_str(&content)
}

/// Parses substitution table content from a string.
pub fn parse_substitution_str(content: &str) -> SubstitutionResult<SubstitutionTable> {
    let mut table = SubstitutionTable::new();

    for (idx, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(pair) = fields.next() else {
            continue;
        };

        let residues = pair.as_bytes();
        if residues.len() != 2 {
            log::warn!(
                "Skipping substitution entry '{}' at line {}: expected a two-residue pair",
                pair,
                idx + 1
            );
            continue;
        }

        let score = match fields.next().map(str::parse::<i32>) {
            Some(Ok(score)) => score,
            _ => {
                log::debug!("No integer score for '{}' at line {}, using 0", pair, idx + 1);
                MISSING_PAIR_SCORE
            }
        };

        table.insert(residues[0], residues[1], score);
    }

    if table.is_empty() {
        return Err(SubstitutionError::EmptyTable);
    }

    log::debug!("Loaded {} substitution pairs", table.len());
    Ok(table)
}
