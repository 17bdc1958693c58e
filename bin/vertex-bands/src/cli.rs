//! Command line interface for the band tool.

use std::fmt::Write as _;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing::info;
use vertex_net_peer_band::{BandArgs, BandScorer};

use crate::logging::{LogArgs, init_logging};

/// Vertex peer score bands - check a band configuration and classify scores
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct BandsCli {
    /// Logging configuration (applies to all subcommands).
    #[command(flatten)]
    pub(crate) logs: LogArgs,

    /// Band configuration.
    #[command(flatten)]
    pub(crate) bands: BandArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: BandsCommand,
}

/// Available commands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub(crate) enum BandsCommand {
    /// Validate the configuration and print each band with its score range.
    Check,
    /// Print the band of each score.
    Classify {
        /// Peer scores.
        #[arg(required = true, allow_negative_numbers = true)]
        scores: Vec<i64>,
    },
    /// Print how many of the given scores fall into each band.
    Tally {
        /// Peer scores.
        #[arg(allow_negative_numbers = true)]
        scores: Vec<i64>,
    },
}

/// Parse arguments, set up logging and run the selected command.
pub(crate) fn run() -> Result<()> {
    let cli = BandsCli::parse();
    init_logging(&cli.logs)?;

    let bands = &cli.bands.bands;
    info!(count = bands.len(), config = %bands, "loaded peer score bands");

    print!("{}", execute(bands, &cli.command)?);
    Ok(())
}

/// Render the output of `command` against `bands`.
pub(crate) fn execute(bands: &BandScorer, command: &BandsCommand) -> Result<String> {
    let mut out = String::new();
    match command {
        BandsCommand::Check => {
            if bands.is_empty() {
                writeln!(out, "no bands configured")?;
            }
            for (band, range) in band_ranges(bands) {
                writeln!(out, "{band}\t{range}")?;
            }
        }
        BandsCommand::Classify { scores } => {
            for score in scores {
                let band = bands.try_bucket(*score).unwrap_or("-");
                writeln!(out, "{score}\t{band}")?;
            }
        }
        BandsCommand::Tally { scores } => {
            let tally = bands.tally(scores.iter().copied());
            for (band, count) in tally.iter() {
                writeln!(out, "{band}\t{count}")?;
            }
        }
    }
    Ok(out)
}

/// Inclusive score range covered by each band, in band order.
pub(crate) fn band_ranges(bands: &BandScorer) -> Vec<(&str, String)> {
    let mut lower: Option<i64> = None;
    // Set once a threshold of i64::MAX leaves no scores for later bands.
    let mut exhausted = false;
    let last = bands.len().saturating_sub(1);

    bands
        .bands()
        .iter()
        .enumerate()
        .map(|(idx, pair)| {
            let upper = (idx < last).then_some(pair.threshold());
            let range = match (lower, upper) {
                _ if exhausted => "empty".to_owned(),
                (Some(lo), Some(hi)) if lo > hi => "empty".to_owned(),
                (lo, hi) => format!(
                    "{}..={}",
                    lo.map_or_else(|| "-inf".to_owned(), |v| v.to_string()),
                    hi.map_or_else(|| "+inf".to_owned(), |v| v.to_string()),
                ),
            };
            match pair.threshold().checked_add(1) {
                Some(next) => lower = Some(lower.map_or(next, |lo| lo.max(next))),
                None => exhausted = true,
            }
            (pair.band(), range)
        })
        .collect()
}
