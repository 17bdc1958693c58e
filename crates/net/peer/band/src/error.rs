//! Errors raised while parsing a band configuration.

use std::num::ParseIntError;

use thiserror::Error;

/// Why a non-blank entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryDefect {
    /// No `:` between threshold and band.
    #[error("missing ':' separator")]
    MissingSeparator,
    /// Band name is empty after trimming.
    #[error("empty band name")]
    EmptyBand,
}

/// Error returned when a band configuration cannot be parsed.
///
/// Any error rejects the whole configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandParseError {
    /// The threshold is not a base-10 signed integer.
    #[error("invalid threshold {token:?} in band entry {entry:?}: {source}")]
    MalformedThreshold {
        entry: String,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// The entry is not of the form `threshold:band`.
    #[error("malformed band entry {entry:?}: {reason}")]
    MalformedEntry { entry: String, reason: EntryDefect },
}

impl BandParseError {
    /// The offending entry, trimmed.
    pub fn entry(&self) -> &str {
        match self {
            Self::MalformedThreshold { entry, .. } | Self::MalformedEntry { entry, .. } => entry,
        }
    }
}
