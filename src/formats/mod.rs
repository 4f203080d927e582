//! Input file loading.
//!
//! Two kinds of input are read:
//! - sequence files in FASTA format ([`fasta`])
//! - substitution tables, one `PAIR SCORE` entry per line ([`substitution`])
//!
//! [`load_pair`] turns a sequence file into the two sequences of an
//! alignment run.

pub mod fasta;
pub mod substitution;

use std::path::Path;

use thiserror::Error;

use crate::model::{Sequence, SequencePair};

/// Characters treated as alignment gaps in input records.
pub const INPUT_GAP_CHARS: &[u8] = b"-.";

/// Errors that can occur while loading the sequences to align.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("FASTA error: {0}")]
    FastaError(#[from] fasta::FastaError),

    #[error("Need two sequences to align, found {0}")]
    NotEnoughSequences(usize),

    #[error("Sequence '{0}' has no residues")]
    EmptySequence(String),
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Removes gap characters from a record loaded from an aligned file.
fn degap(mut sequence: Sequence) -> Sequence {
    let removed = sequence.strip_residues(INPUT_GAP_CHARS);
    if removed > 0 {
        log::warn!(
            "Removed {} gap characters from sequence '{}'",
            removed,
            sequence.id
        );
    }
    sequence
}

/// Picks the two sequences to align from parsed records.
///
/// Only the first two records are used; any further records are ignored
/// with a warning. Either of the two being empty (after gap removal) is an
/// error, even if later records hold residues.
pub fn select_pair(records: Vec<Sequence>) -> InputResult<SequencePair> {
    let found = records.len();
    if found < 2 {
        return Err(InputError::NotEnoughSequences(found));
    }
    if found > 2 {
        log::warn!(
            "Input contains {} sequences; only the first two will be aligned",
            found
        );
    }

    let mut records = records.into_iter().map(degap);
    let (Some(first), Some(second)) = (records.next(), records.next()) else {
        return Err(InputError::NotEnoughSequences(found));
    };

    for seq in [&first, &second] {
        if seq.is_empty() {
            return Err(InputError::EmptySequence(seq.id.clone()));
        }
    }

    Ok(SequencePair::new(first, second))
}

/// Parses a FASTA file and returns its first two sequences.
pub fn load_pair<P: AsRef<Path>>(path: P) -> InputResult<SequencePair> {
    let records = fasta::parse_fasta_file(path)?;
    select_pair(records)
}

/// Parses FASTA content and returns its first two sequences.
pub fn load_pair_str(content: &str) -> InputResult<SequencePair> {
    let records = fasta::parse_fasta_str(content)?;
    select_pair(records)
}
