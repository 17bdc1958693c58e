//! Per-band peer counts and their gauges.

use metrics::gauge;

/// Gauge name for the number of peers per band.
pub const PEER_SCORE_BANDS_GAUGE: &str = "p2p.peer_score_bands";

/// Number of scores that fell into each band, in band order.
///
/// Every configured band is present, including those no score fell into,
/// so gauges for emptied bands drop back to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandTally {
    counts: Vec<(String, u64)>,
}

impl BandTally {
    pub(crate) fn new(counts: Vec<(String, u64)>) -> Self {
        Self { counts }
    }

    /// Count for `band`. Duplicate labels are summed; unknown labels count zero.
    pub fn get(&self, band: &str) -> u64 {
        self.counts
            .iter()
            .filter(|(label, _)| label == band)
            .map(|(_, count)| count)
            .sum()
    }

    /// `(band, count)` pairs in band order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    /// Total number of scores tallied.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Publishes band tallies through the `metrics` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandMetrics;

impl BandMetrics {
    /// Set the per-band gauge for every band in `tally`.
    ///
    /// Nothing is exported unless the host process installed a recorder.
    pub fn record(&self, tally: &BandTally) {
        for (band, _) in tally.iter() {
            gauge!(PEER_SCORE_BANDS_GAUGE, "band" => band.to_owned())
                .set(tally.get(band) as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::{BandScorer, DEFAULT_BAND_SCORES};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    fn tally() -> BandTally {
        BandTally::new(vec![
            ("graylist".to_owned(), 1),
            ("nopx".to_owned(), 0),
            ("friend".to_owned(), 4),
            ("nopx".to_owned(), 2),
        ])
    }

    #[test]
    fn test_get_sums_duplicate_labels() {
        let tally = tally();
        assert_eq!(tally.get("nopx"), 2);
        assert_eq!(tally.get("friend"), 4);
        assert_eq!(tally.get("missing"), 0);
    }

    #[test]
    fn test_total() {
        assert_eq!(tally().total(), 7);
        assert_eq!(BandTally::default().total(), 0);
    }

    fn recorded_gauges(tally: &BandTally) -> Vec<(String, f64)> {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        metrics::with_local_recorder(&recorder, || BandMetrics.record(tally));

        let mut gauges: Vec<_> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter_map(|(key, _, _, value)| {
                let DebugValue::Gauge(value) = value else {
                    return None;
                };
                let key = key.key();
                assert_eq!(key.name(), PEER_SCORE_BANDS_GAUGE);
                let band = key
                    .labels()
                    .find(|label| label.key() == "band")
                    .map(|label| label.value().to_owned())?;
                Some((band, value.into_inner()))
            })
            .collect();
        gauges.sort_by(|a, b| a.0.cmp(&b.0));
        gauges
    }

    #[test]
    fn test_record_sets_gauge_per_band() {
        let scorer: BandScorer = DEFAULT_BAND_SCORES.parse().unwrap();
        let gauges = recorded_gauges(&scorer.tally([-50, -45, 3, 30, 40]));
        assert_eq!(
            gauges,
            [
                ("friend".to_owned(), 3.0),
                ("graylist".to_owned(), 2.0),
                ("nopx".to_owned(), 0.0),
                ("restricted".to_owned(), 0.0),
            ]
        );
    }

    #[test]
    fn test_record_resets_emptied_band() {
        let scorer: BandScorer = DEFAULT_BAND_SCORES.parse().unwrap();
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            BandMetrics.record(&scorer.tally([-100, -100]));
            BandMetrics.record(&scorer.tally([100]));
        });

        let graylist = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .find_map(|(key, _, _, value)| {
                let is_graylist = key
                    .key()
                    .labels()
                    .any(|label| label.key() == "band" && label.value() == "graylist");
                match value {
                    DebugValue::Gauge(value) if is_graylist => Some(value.into_inner()),
                    _ => None,
                }
            });
        assert_eq!(graylist, Some(0.0));
    }

    #[test]
    fn test_record_sums_duplicate_labels() {
        let gauges = recorded_gauges(&tally());
        assert_eq!(
            gauges,
            [
                ("friend".to_owned(), 4.0),
                ("graylist".to_owned(), 1.0),
                ("nopx".to_owned(), 2.0),
            ]
        );
    }
}
