//! Persistent per-term weight records.

use crate::error::Result;
use crate::scheduler::WeightScheduler;
use crate::store::document::JsonDocument;
use crate::types::{WeightMap, WeightRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// On-disk form of one weight entry. Older documents stored a bare integer
/// weight; the upgrade to a full record happens once, here.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredWeight {
    Record(WeightRecord),
    Legacy(i64),
}

impl StoredWeight {
    fn into_record(self) -> WeightRecord {
        match self {
            Self::Record(record) => record,
            Self::Legacy(weight) => WeightRecord {
                weight: weight.max(1) as u32,
                ..Default::default()
            },
        }
    }
}

/// Handle to the weight document. Every operation reloads, mutates, and
/// saves the whole map; nothing is cached in memory between calls.
#[derive(Debug)]
pub struct WeightStore {
    doc: JsonDocument<BTreeMap<String, StoredWeight>>,
    scheduler: WeightScheduler,
}

impl WeightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_scheduler(path, WeightScheduler::default())
    }

    pub fn with_scheduler(path: impl Into<PathBuf>, scheduler: WeightScheduler) -> Self {
        Self {
            doc: JsonDocument::new(path),
            scheduler,
        }
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    /// Read the full map, upgrading legacy entries. A missing document is
    /// an empty map.
    pub fn load(&self) -> Result<WeightMap> {
        Ok(self
            .doc
            .load()?
            .map(|raw| {
                raw.into_iter()
                    .map(|(term, stored)| (term, stored.into_record()))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Load with the degrade-to-defaults policy: a corrupt or unreadable
    /// document logs a warning and yields an empty map.
    pub fn load_or_default(&self) -> WeightMap {
        match self.load() {
            Ok(map) => map,
            Err(error) => {
                warn!("weight document unavailable, starting empty: {error}");
                WeightMap::new()
            }
        }
    }

    /// Replace the document with `map`.
    pub fn save(&self, map: &WeightMap) -> Result<()> {
        let raw: BTreeMap<String, StoredWeight> = map
            .iter()
            .map(|(term, record)| (term.clone(), StoredWeight::Record(record.clone())))
            .collect();
        self.doc.save(&raw)
    }

    /// Apply one answer to `term` and persist the whole map. A missing
    /// record starts from the defaults. Save failures are logged, not
    /// propagated; the updated record is returned either way.
    pub fn adjust(&self, term: &str, correct: bool) -> WeightRecord {
        self.adjust_at(term, correct, Utc::now())
    }

    pub fn adjust_at(&self, term: &str, correct: bool, now: DateTime<Utc>) -> WeightRecord {
        let mut map = self.load_or_default();
        let record = map.entry(term.to_string()).or_default();
        self.scheduler.apply(record, correct, now);
        let updated = record.clone();
        if let Err(error) = self.save(&map) {
            warn!("failed to persist weight update for {term}: {error}");
        }
        updated
    }
}
