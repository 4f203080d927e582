//! Data model for pairwise alignment.
//!
//! This module contains the input-side data structures:
//! - Sequences loaded from a FASTA-like file
//! - The molecule type selected for a run
//! - The pair of sequences handed to the aligner
//!
//! Alignment output lives in [`crate::align::AlignmentResult`].

use std::borrow::Cow;
use std::fmt;

/// Represents a single sequence with its identifier and residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The sequence identifier (first token of the FASTA header, without '>')
    pub id: String,
    /// Remainder of the header line, if any
    pub description: Option<String>,
    /// Header line exactly as read (without '>'), used as the display name
    pub title: Option<String>,
    /// The residues (nucleotides or amino acids), stored as raw bytes
    data: Vec<u8>,
}

impl Sequence {
    /// Creates a new sequence from string data.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::from_bytes(id, data.into().into_bytes())
    }

    /// Creates a new sequence from raw residue bytes.
    pub fn from_bytes(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            description: None,
            title: None,
            data,
        }
    }

    /// Attaches a header description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Attaches the header line as it appeared in the input file.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Removes every residue found in `unwanted`; returns how many were removed.
    pub fn strip_residues(&mut self, unwanted: &[u8]) -> usize {
        let before = self.data.len();
        self.data.retain(|b| !unwanted.contains(b));
        before - self.data.len()
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the residues as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the residues as text.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// The name shown in reports.
    ///
    /// This is the header line as read when one was recorded, otherwise the
    /// identifier and description joined by a space.
    pub fn header(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match &self.description {
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }
}

/// Kind of residues being aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceType {
    Nucleotide,
    Protein,
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceType::Nucleotide => write!(f, "Nucleotide"),
            SequenceType::Protein => write!(f, "Protein"),
        }
    }
}

/// The two sequences taking part in one alignment run.
///
/// `first` supplies the matrix columns and `second` the rows.
#[derive(Debug, Clone)]
pub struct SequencePair {
    pub first: Sequence,
    pub second: Sequence,
}

impl SequencePair {
    pub fn new(first: Sequence, second: Sequence) -> Self {
        Self { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_creation() {
        let seq = Sequence::new("seq1", "ACGT");
        assert_eq!(seq.id, "seq1");
        assert_eq!(seq.as_bytes(), b"ACGT");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_header_with_description() {
        let seq = Sequence::new("sp|P69905|HBA_HUMAN", "MVLS").with_description("Hemoglobin alpha");
        assert_eq!(seq.header(), "sp|P69905|HBA_HUMAN Hemoglobin alpha");
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let seq = Sequence::new("seq1", "ACGT").with_description("");
        assert!(seq.description.is_none());
        assert_eq!(seq.header(), "seq1");
    }

    #[test]
    fn test_title_is_kept_verbatim() {
        let seq = Sequence::new("seq1", "ACGT")
            .with_description("two  spaces")
            .with_title("seq1\ttwo  spaces");
        assert_eq!(seq.header(), "seq1\ttwo  spaces");
    }

    #[test]
    fn test_strip_residues() {
        let mut seq = Sequence::new("seq1", "A-C.GT-");
        assert_eq!(seq.strip_residues(b"-."), 3);
        assert_eq!(seq.as_bytes(), b"ACGT");
        assert_eq!(seq.strip_residues(b"-."), 0);
    }

    #[test]
    fn test_sequence_type_display() {
        assert_eq!(SequenceType::Nucleotide.to_string(), "Nucleotide");
        assert_eq!(SequenceType::Protein.to_string(), "Protein");
    }
}
