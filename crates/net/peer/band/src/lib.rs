//! Peer score bands.
//!
//! Maps a signed peer score onto a named band (`graylist`, `restricted`,
//! `nopx`, `friend`, ...) from an operator-supplied list of thresholds. The
//! band drives admission, gossip and metrics decisions elsewhere in the node.
//!
//! - [`scorer`] - parsing of `threshold:band;...` configurations and bucketing
//! - [`shared`] - reloadable scorer handle for concurrent readers
//! - [`tally`] - per-band peer counts and their gauges
//!
//! # Usage
//!
//! ```
//! use vertex_net_peer_band::BandScorer;
//!
//! let bands: BandScorer = "-40:graylist;-20:restricted;0:nopx;20:friend;".parse()?;
//! assert_eq!(bands.bucket(-39), "restricted");
//! assert_eq!(bands.bucket(100), "friend");
//! # Ok::<(), vertex_net_peer_band::BandParseError>(())
//! ```

#[cfg(feature = "cli")]
pub mod args;
pub mod error;
pub mod pair;
pub mod scorer;
pub mod shared;
pub mod tally;

#[cfg(feature = "cli")]
pub use args::BandArgs;
pub use error::{BandParseError, EntryDefect};
pub use pair::ScorePair;
pub use scorer::{BandScorer, DEFAULT_BAND_SCORES};
pub use shared::SharedBandScorer;
pub use tally::{BandMetrics, BandTally, PEER_SCORE_BANDS_GAUGE};
