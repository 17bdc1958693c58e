//! Command line arguments for peer score bands.

use clap::Args;

use crate::scorer::{BandScorer, DEFAULT_BAND_SCORES};

/// Parameters for configuring peer score bands
#[derive(Debug, Clone, Args, PartialEq, Eq)]
#[command(next_help_heading = "Peer Scoring")]
pub struct BandArgs {
    /// Peer score bands as `<threshold>:<band>` entries separated by `;`.
    ///
    /// A score falls into the band with the lowest threshold at or above it;
    /// scores above every threshold fall into the last band.
    #[arg(
        long = "p2p.score.bands",
        value_name = "BANDS",
        env = "VERTEX_P2P_SCORE_BANDS",
        default_value = DEFAULT_BAND_SCORES,
        allow_hyphen_values = true,
    )]
    pub bands: BandScorer,
}

impl Default for BandArgs {
    fn default() -> Self {
        Self {
            bands: BandScorer::default_bands(),
        }
    }
}
