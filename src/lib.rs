//! # nwalign - Global Pairwise Sequence Alignment
//!
//! Aligns two nucleotide or protein sequences with the Needleman-Wunsch
//! algorithm and writes a readable report.
//!
//! ## Architecture
//!
//! - `model`: Sequences and the pair handed to the aligner
//! - `scoring`: Fixed +1/-1 scoring or an ordered-pair substitution table
//! - `align`: Matrix fill, traceback and rescoring
//! - `formats`: FASTA and substitution table loading
//! - `report`: Report rendering with line wrapping
//! - `timing`: Elapsed-time measurement for the command-line tool

pub mod align;
pub mod formats;
pub mod model;
pub mod report;
pub mod scoring;
pub mod timing;
