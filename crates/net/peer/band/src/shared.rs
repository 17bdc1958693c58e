//! Reloadable band scorer shared across threads.
//!
//! Readers take an `Arc` snapshot and classify against it without holding the
//! lock. A reload parses into a fresh scorer first and then swaps the whole
//! snapshot, so readers see either the old bands or the new ones, never a mix.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::BandParseError;
use crate::scorer::BandScorer;

/// Cloneable handle to a band scorer that can be reloaded in place.
#[derive(Debug, Clone, Default)]
pub struct SharedBandScorer {
    inner: Arc<RwLock<Arc<BandScorer>>>,
}

impl SharedBandScorer {
    pub fn new(scorer: BandScorer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(scorer))),
        }
    }

    /// Create a handle from a band configuration string.
    pub fn parse(spec: &str) -> Result<Self, BandParseError> {
        spec.parse().map(Self::new)
    }

    /// Current bands.
    pub fn snapshot(&self) -> Arc<BandScorer> {
        Arc::clone(&self.inner.read())
    }

    /// Replace the bands with those in `spec`.
    ///
    /// On error the current bands stay published.
    pub fn reload(&self, spec: &str) -> Result<(), BandParseError> {
        match spec.parse::<BandScorer>() {
            Ok(scorer) => {
                let count = scorer.len();
                *self.inner.write() = Arc::new(scorer);
                debug!(count, "reloaded peer score bands");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "rejected peer score band reload");
                Err(err)
            }
        }
    }

    /// Band label for `score` under the current bands.
    pub fn bucket(&self, score: i64) -> String {
        self.snapshot().bucket(score).to_owned()
    }
}

impl From<BandScorer> for SharedBandScorer {
    fn from(scorer: BandScorer) -> Self {
        Self::new(scorer)
    }
}
