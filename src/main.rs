//! nwalign - Global Pairwise Sequence Alignment
//!
//! Aligns the first two sequences of a FASTA file with the
//! Needleman-Wunsch algorithm and writes a text report.
//!
//! ## Usage
//!
//! ```bash
//! nwalign -n dna.fasta -o my_alignment.txt
//! nwalign -p proteins.fasta -s BLOSUM62.txt
//! nwalign -p proteins.fasta --gap-penalty -4 --line-width 60
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default: `info`).

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use nwalign::align::{align, AlignParams, DEFAULT_GAP_PENALTY};
use nwalign::formats::{load_pair, substitution::parse_substitution_file};
use nwalign::model::SequenceType;
use nwalign::report::{render_report, write_report, ReportOptions, DEFAULT_LINE_WIDTH};
use nwalign::scoring::ScoringPolicy;
use nwalign::timing::RunClock;

/// Report file written when -o/--output is not given.
const DEFAULT_OUTPUT: &str = "nwalign_output.txt";

/// Largest accepted absolute value for --gap-penalty.
const MAX_GAP_MAGNITUDE: i64 = 1_000_000;

/// nwalign - Needleman-Wunsch alignment of two nucleotide or protein sequences
///
/// Only the first two sequences of the input file are aligned.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["nucleotide", "protein"])))]
struct Args {
    /// Align nucleotide sequences read from FILE
    #[arg(short = 'n', long = "nucleotide", value_name = "FILE")]
    nucleotide: Option<PathBuf>,

    /// Align protein sequences read from FILE
    #[arg(short = 'p', long = "protein", value_name = "FILE")]
    protein: Option<PathBuf>,

    /// Substitution table for protein alignment (lines of "PAIR SCORE").
    /// Without it, matches score +1 and mismatches -1.
    #[arg(short = 's', long = "scoring", value_name = "FILE")]
    scoring: Option<PathBuf>,

    /// Report file (overwritten if it exists)
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Score added for each gap (between -1000000 and 1000000)
    #[arg(
        long = "gap-penalty",
        default_value_t = DEFAULT_GAP_PENALTY,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-MAX_GAP_MAGNITUDE..=MAX_GAP_MAGNITUDE)
    )]
    gap_penalty: i32,

    /// Alignment columns per report block
    #[arg(long = "line-width", default_value_t = DEFAULT_LINE_WIDTH)]
    line_width: usize,
}

impl Args {
    /// The selected molecule type and its input file.
    fn input(&self) -> Option<(SequenceType, &Path)> {
        match (&self.nucleotide, &self.protein) {
            (Some(path), _) => Some((SequenceType::Nucleotide, path.as_path())),
            (None, Some(path)) => Some((SequenceType::Protein, path.as_path())),
            (None, None) => None,
        }
    }
}

/// Builds the scoring policy for the selected molecule type.
fn scoring_policy(sequence_type: SequenceType, table: Option<&Path>) -> Result<ScoringPolicy> {
    match (sequence_type, table) {
        (SequenceType::Protein, Some(path)) => {
            let table = parse_substitution_file(path).with_context(|| {
                format!("Failed to load substitution table {}", path.display())
            })?;
            log::info!(
                "Using substitution table {} ({} pairs)",
                path.display(),
                table.len()
            );
            Ok(ScoringPolicy::Table(table))
        }
        (SequenceType::Nucleotide, Some(path)) => {
            log::warn!(
                "Ignoring substitution table {} for nucleotide alignment",
                path.display()
            );
            Ok(ScoringPolicy::Fixed)
        }
        (_, None) => Ok(ScoringPolicy::Fixed),
    }
}

/// Loads the input, aligns it and writes the report.
fn run(args: &Args) -> Result<()> {
    let Some((sequence_type, input)) = args.input() else {
        anyhow::bail!("No input file given; use -n FILE or -p FILE");
    };

    log::info!("{} sequences selected", sequence_type);
    log::info!(
        "Commencing {} alignment of {} ...",
        sequence_type.to_string().to_lowercase(),
        input.display()
    );

    let policy = scoring_policy(sequence_type, args.scoring.as_deref())?;
    let pair = load_pair(input).with_context(|| format!("Failed to read {}", input.display()))?;
    log::info!(
        "Aligning '{}' ({} residues) against '{}' ({} residues)",
        pair.first.id,
        pair.first.len(),
        pair.second.id,
        pair.second.len()
    );

    let params = AlignParams::new().with_gap_penalty(args.gap_penalty);
    let result = align(pair.first.as_bytes(), pair.second.as_bytes(), &policy, &params)?;

    let options = ReportOptions::default().with_line_width(args.line_width);
    let report = render_report(&pair, &result, &options);
    write_report(&args.output, &report)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Score {}, {} aligned positions ({} identical)",
        result.total_score,
        result.diagonal_count,
        result.identity_count()
    );
    log::info!("Finished output to file {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if args.line_width == 0 {
        anyhow::bail!("Line width must be at least 1");
    }

    let clock = RunClock::start();
    log::info!("================== PAIRWISE SEQUENCE ALIGNMENT ==================");

    run(&args)?;

    log::info!("Total time = {}", clock.elapsed_hms());
    Ok(())
}
