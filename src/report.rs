//! Human-readable alignment report.
//!
//! ```text
//! Alignment results for:
//! 1. seq1 description
//! 2. seq2
//!
//! GATTACA
//! |  | |
//! GCATGCU
//!
//! Total number alignments: 7
//! Total alignment score:  -1
//! ```
//!
//! Alignment rows longer than the display width are split into blocks of
//! three lines (first sequence, indicator, second sequence), separated by
//! a blank line. The report ends with a blank line after the score.

use std::fs;
use std::io;
use std::path::Path;

use crate::align::AlignmentResult;
use crate::model::SequencePair;

/// Number of alignment columns per block.
pub const DEFAULT_LINE_WIDTH: usize = 50;
/// Width at which long header lines are wrapped.
pub const HEADER_WIDTH: usize = 80;

/// Report layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Alignment columns per block (at least 1)
    pub line_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ReportOptions {
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width.max(1);
        self
    }
}

/// Formats one numbered header entry, wrapping long names under the first line.
fn header_line(number: usize, name: &str) -> String {
    let label = format!("{}. ", number);
    // Names that fit are printed untouched, inner spacing included
    if label.len() + name.len() <= HEADER_WIDTH {
        return format!("{}{}", label, name);
    }
    let indent = " ".repeat(label.len());
    let options = textwrap::Options::new(HEADER_WIDTH)
        .initial_indent(&label)
        .subsequent_indent(&indent);
    textwrap::fill(name, options)
}

/// Renders the complete report as text.
pub fn render_report(pair: &SequencePair, result: &AlignmentResult, options: &ReportOptions) -> String {
    let width = options.line_width.max(1);
    let mut out = String::new();

    out.push_str("Alignment results for:\n");
    out.push_str(&header_line(1, &pair.first.header()));
    out.push('\n');
    out.push_str(&header_line(2, &pair.second.header()));
    out.push_str("\n\n");

    let rows = [&result.aligned_a, &result.indicator, &result.aligned_b];
    for start in (0..result.len()).step_by(width) {
        let end = (start + width).min(result.len());
        for row in rows {
            out.push_str(&String::from_utf8_lossy(&row[start..end]));
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&format!("Total number alignments: {}\n", result.diagonal_count));
    // Non-negative scores get an extra space so digits line up with a sign
    let pad = if result.total_score >= 0 { " " } else { "" };
    out.push_str(&format!("Total alignment score:  {}{}\n\n", pad, result.total_score));

    out
}

/// Writes a rendered report, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> io::Result<()> {
    fs::write(path, report)
}
