//! Session answer totals and streaks.

use crate::error::Result;
use crate::store::document::JsonDocument;
use crate::types::SessionStats;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle to the learning-stats document.
#[derive(Debug, Clone)]
pub struct StatsStore {
    doc: JsonDocument<SessionStats>,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    pub fn load(&self) -> Result<SessionStats> {
        Ok(self.doc.load()?.unwrap_or_default())
    }

    pub fn load_or_default(&self) -> SessionStats {
        match self.load() {
            Ok(stats) => stats,
            Err(error) => {
                warn!("stats document unavailable, starting at zero: {error}");
                SessionStats::default()
            }
        }
    }

    /// Count one answer and persist. Save failures are logged, not
    /// propagated.
    pub fn record_answer(&self, correct: bool) -> SessionStats {
        let mut stats = self.load_or_default();
        stats.record(correct);
        self.persist(&stats);
        stats
    }

    /// Zero all counters.
    pub fn reset(&self) -> SessionStats {
        let stats = SessionStats::default();
        self.persist(&stats);
        stats
    }

    fn persist(&self, stats: &SessionStats) {
        if let Err(error) = self.doc.save(stats) {
            warn!("failed to persist session stats: {error}");
        }
    }
}
