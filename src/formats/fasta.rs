//! FASTA file parser.
//!
//! This module handles reading and parsing FASTA format files.
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Lines are trimmed before parsing, so files saved with Windows line
//! endings (`\r\n`) parse the same as Unix files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::model::Sequence;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA file")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses a FASTA file and returns its records in file order.
///
/// # Examples
///
/// ```no_run
/// use nwalign::formats::fasta::parse_fasta_file;
///
/// let records = parse_fasta_file("sequences.fasta").unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Sequence>> {
    let file = File::open(&path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = BufReader::new(file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;
    parse_fasta_str(&content)
}

/// Parses FASTA content from a string.
///
/// A header with no sequence lines still yields a record, with no residues.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<Sequence>> {
    let mut sequences = Vec::new();
    // (id, description, header line as written)
    let mut current: Option<(&str, &str, &str)> = None;
    let mut current_seq: Vec<u8> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            // Save previous sequence if exists
            if let Some(previous) = current.take() {
                sequences.push(build_record(previous, std::mem::take(&mut current_seq)));
            }

            // ID is everything before the first space, the rest is the description
            let trimmed = header.trim();
            let (id, description) = match trimmed.split_once(char::is_whitespace) {
                Some((id, rest)) => (id, rest.trim()),
                None => (trimmed, ""),
            };

            if id.is_empty() {
                return Err(FastaError::InvalidFormat(format!(
                    "Empty sequence identifier at line {}",
                    line_number
                )));
            }

            current = Some((id, description, header));
            current_seq.clear();
        } else {
            // Sequence line
            if current.is_none() {
                return Err(FastaError::SequenceWithoutHeader(line_number));
            }

            if line.bytes().all(|b| !b.is_ascii_whitespace()) {
                current_seq.extend_from_slice(line.as_bytes());
            } else {
                current_seq.extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
            }
        }
    }

    // Don't forget the last sequence
    if let Some(last) = current {
        sequences.push(build_record(last, current_seq));
    }

    if sequences.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(sequences)
}

fn build_record((id, description, title): (&str, &str, &str), residues: Vec<u8>) -> Sequence {
    if residues.is_empty() {
        log::warn!("Sequence '{}' has no residues", id);
    }
    Sequence::from_bytes(id, residues)
        .with_description(description)
        .with_title(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fasta() {
        let content = ">seq1\nACGT\n>seq2\nTGCA\n";
        let records = parse_fasta_str(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].as_bytes(), b"ACGT");
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].as_bytes(), b"TGCA");
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let content = ">seq1\nACGT\nTGCA\nAAAA\n";
        let records = parse_fasta_str(content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_bytes(), b"ACGTTGCAAAAA");
    }

    #[test]
    fn test_parse_with_description() {
        let content = ">seq1 This is a description\nACGT\n";
        let records = parse_fasta_str(content).unwrap();

        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description.as_deref(), Some("This is a description"));
        assert_eq!(records[0].header(), "seq1 This is a description");
    }

    #[test]
    fn test_parse_with_empty_lines() {
        let content = ">seq1\nACGT\n\n>seq2\n\nTGCA\n";
        let records = parse_fasta_str(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_bytes(), b"ACGT");
        assert_eq!(records[1].as_bytes(), b"TGCA");
    }

    #[test]
    fn test_windows_line_endings() {
        let content = ">seq1 first\r\nACGT\r\nTT\r\n>seq2\r\nTGCA\r\n";
        let records = parse_fasta_str(content).unwrap();

        assert_eq!(records[0].header(), "seq1 first");
        assert_eq!(records[0].as_bytes(), b"ACGTTT");
        assert_eq!(records[1].as_bytes(), b"TGCA");
    }

    #[test]
    fn test_stray_carriage_returns() {
        let content = ">seq1\nAC\r\r\nGT\r\n";
        let records = parse_fasta_str(content).unwrap();
        assert_eq!(records[0].as_bytes(), b"ACGT");
    }

    #[test]
    fn test_inner_whitespace_removed() {
        let content = ">seq1\nAC GT\tAA\n";
        let records = parse_fasta_str(content).unwrap();
        assert_eq!(records[0].as_bytes(), b"ACGTAA");
    }

    #[test]
    fn test_empty_file() {
        let result = parse_fasta_str("");
        assert!(matches!(result, Err(FastaError::EmptyFile)));
    }

    #[test]
    fn test_header_only_records_are_kept() {
        let records = parse_fasta_str(">seq1\n>seq2\nACGT\n>seq3\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "seq1");
        assert!(records[0].is_empty());
        assert_eq!(records[1].as_bytes(), b"ACGT");
        assert!(records[2].is_empty());
    }

    #[test]
    fn test_header_text_is_kept_verbatim() {
        let records = parse_fasta_str(">seq1\tsome   description\r\nACGT\r\n").unwrap();
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description.as_deref(), Some("some   description"));
        assert_eq!(records[0].header(), "seq1\tsome   description");
    }

    #[test]
    fn test_sequence_without_header() {
        let content = "ACGT\n>seq1\nTGCA\n";
        let result = parse_fasta_str(content);
        assert!(matches!(result, Err(FastaError::SequenceWithoutHeader(1))));
    }

    #[test]
    fn test_empty_identifier() {
        let content = ">\nACGT\n";
        let result = parse_fasta_str(content);
        assert!(matches!(result, Err(FastaError::InvalidFormat(_))));
    }

    #[test]
    fn test_case_preservation() {
        let content = ">seq1\nacgt\n";
        let records = parse_fasta_str(content).unwrap();
        // Preserves case as-is
        assert_eq!(records[0].as_bytes(), b"acgt");
    }
}
