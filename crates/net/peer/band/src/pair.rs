//! A single `threshold:band` entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BandParseError, EntryDefect};

/// Separator between the threshold and the band name of an entry.
pub const PAIR_SEPARATOR: char = ':';

/// A band label and the score threshold that bounds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorePair {
    band: String,
    threshold: i64,
}

impl ScorePair {
    /// Create a pair. The band is stored as given.
    pub fn new(band: impl Into<String>, threshold: i64) -> Self {
        Self {
            band: band.into(),
            threshold,
        }
    }

    /// Band label.
    pub fn band(&self) -> &str {
        &self.band
    }

    /// Score threshold.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }
}

impl fmt::Display for ScorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.threshold, PAIR_SEPARATOR, self.band)
    }
}

impl FromStr for ScorePair {
    type Err = BandParseError;

    /// Parse one entry. Surrounding whitespace is ignored, including around
    /// the separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim();
        let Some((threshold, band)) = entry.split_once(PAIR_SEPARATOR) else {
            return Err(BandParseError::MalformedEntry {
                entry: entry.to_owned(),
                reason: EntryDefect::MissingSeparator,
            });
        };

        let token = threshold.trim();
        let threshold =
            token
                .parse::<i64>()
                .map_err(|source| BandParseError::MalformedThreshold {
                    entry: entry.to_owned(),
                    token: token.to_owned(),
                    source,
                })?;

        let band = band.trim();
        if band.is_empty() {
            return Err(BandParseError::MalformedEntry {
                entry: entry.to_owned(),
                reason: EntryDefect::EmptyBand,
            });
        }

        Ok(Self::new(band, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_entry() {
        let pair: ScorePair = " -40 : graylist ".parse().unwrap();
        assert_eq!(pair.band(), "graylist");
        assert_eq!(pair.threshold(), -40);
    }

    #[test]
    fn test_parse_explicit_plus_sign() {
        let pair: ScorePair = "+20:friend".parse().unwrap();
        assert_eq!(pair.threshold(), 20);
    }

    #[test]
    fn test_band_keeps_later_colons() {
        // Only the first ':' separates.
        let pair: ScorePair = "5:a:b".parse().unwrap();
        assert_eq!(pair.band(), "a:b");
    }

    #[test]
    fn test_reject_bad_threshold() {
        let err = "abc:foo".parse::<ScorePair>().unwrap_err();
        assert_matches!(
            err,
            BandParseError::MalformedThreshold { ref token, .. } if token == "abc"
        );
        assert_eq!(err.entry(), "abc:foo");
    }

    #[test]
    fn test_reject_float_threshold() {
        assert_matches!(
            "1.5:foo".parse::<ScorePair>(),
            Err(BandParseError::MalformedThreshold { .. })
        );
    }

    #[test]
    fn test_reject_missing_separator() {
        assert_matches!(
            "10 friend".parse::<ScorePair>(),
            Err(BandParseError::MalformedEntry {
                reason: EntryDefect::MissingSeparator,
                ..
            })
        );
    }

    #[test]
    fn test_reject_empty_band() {
        assert_matches!(
            "10:   ".parse::<ScorePair>(),
            Err(BandParseError::MalformedEntry {
                reason: EntryDefect::EmptyBand,
                ..
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ScorePair::new("nopx", 0).to_string(), "0:nopx");
        assert_eq!(ScorePair::new("graylist", -40).to_string(), "-40:graylist");
    }

    #[test]
    fn test_serde_struct() {
        let pair = ScorePair::new("friend", 20);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"band":"friend","threshold":20}"#);
        let back: ScorePair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
