//! Threshold bands and score bucketing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BandParseError;
use crate::pair::ScorePair;
use crate::tally::BandTally;

/// Separator between entries of a band configuration.
pub const ENTRY_SEPARATOR: char = ';';

/// Default band configuration.
pub const DEFAULT_BAND_SCORES: &str = "-40:graylist;-20:restricted;0:nopx;20:friend;";

/// Classifies peer scores into named bands.
///
/// Bands are kept sorted ascending by threshold. A score belongs to the band
/// with the lowest threshold at or above it; scores above every threshold
/// belong to the last band. With `-40:graylist;-20:restricted;0:nopx;20:friend;`:
///
/// | score        | band         |
/// |--------------|--------------|
/// | `..=-40`     | `graylist`   |
/// | `-39..=-20`  | `restricted` |
/// | `-19..=0`    | `nopx`       |
/// | `1..`        | `friend`     |
///
/// The scorer is immutable once parsed. To swap configurations while other
/// threads classify, use [`SharedBandScorer`](crate::SharedBandScorer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BandScorer {
    bands: Vec<ScorePair>,
}

impl BandScorer {
    /// Create a scorer with no bands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer holding the bands of [`DEFAULT_BAND_SCORES`].
    pub fn default_bands() -> Self {
        Self {
            bands: vec![
                ScorePair::new("graylist", -40),
                ScorePair::new("restricted", -20),
                ScorePair::new("nopx", 0),
                ScorePair::new("friend", 20),
            ],
        }
    }

    /// Replace the bands with those in `spec`.
    ///
    /// Entries are `threshold:band` separated by `;`. Blank segments are
    /// skipped, so an empty or whitespace-only spec yields no bands. On error
    /// the current bands are left as they were.
    pub fn parse(&mut self, spec: &str) -> Result<(), BandParseError> {
        let mut bands = spec
            .split(ENTRY_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ScorePair::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        // Stable, so equal thresholds keep their input order.
        bands.sort_by_key(ScorePair::threshold);

        debug!(count = bands.len(), "parsed peer score bands");
        self.bands = bands;
        Ok(())
    }

    /// Band label for `score`.
    ///
    /// Returns an empty string when no bands are configured.
    pub fn bucket(&self, score: i64) -> &str {
        self.try_bucket(score).unwrap_or_default()
    }

    /// Band label for `score`, or `None` when no bands are configured.
    pub fn try_bucket(&self, score: i64) -> Option<&str> {
        self.bucket_index(score)
            .and_then(|idx| self.bands.get(idx))
            .map(ScorePair::band)
    }

    /// Position of the band `score` falls into.
    ///
    /// Non-decreasing in `score`. `None` when no bands are configured.
    pub fn bucket_index(&self, score: i64) -> Option<usize> {
        if self.bands.is_empty() {
            return None;
        }
        let idx = self.bands.partition_point(|pair| pair.threshold() < score);
        Some(idx.min(self.bands.len() - 1))
    }

    /// Count how many of `scores` fall into each band.
    pub fn tally<I>(&self, scores: I) -> BandTally
    where
        I: IntoIterator<Item = i64>,
    {
        let mut counts = vec![0u64; self.bands.len()];
        for score in scores {
            if let Some(count) = self
                .bucket_index(score)
                .and_then(|idx| counts.get_mut(idx))
            {
                *count += 1;
            }
        }
        BandTally::new(
            self.bands
                .iter()
                .map(|pair| pair.band().to_owned())
                .zip(counts)
                .collect(),
        )
    }

    /// Configured bands, ascending by threshold.
    pub fn bands(&self) -> &[ScorePair] {
        &self.bands
    }

    /// Band labels, ascending by threshold.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(ScorePair::band)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl FromStr for BandScorer {
    type Err = BandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scorer = Self::new();
        scorer.parse(s)?;
        Ok(scorer)
    }
}

impl TryFrom<String> for BandScorer {
    type Error = BandParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BandScorer> for String {
    fn from(scorer: BandScorer) -> Self {
        scorer.to_string()
    }
}

/// Canonical configuration string, each entry followed by `;`.
impl fmt::Display for BandScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.bands {
            write!(f, "{pair}{ENTRY_SEPARATOR}")?;
        }
        Ok(())
    }
}
