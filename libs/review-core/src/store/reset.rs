//! Reset of all user-mutable documents across redundant storage locations.

use crate::store::document::JsonDocument;
use crate::store::StorageLayout;
use crate::types::{ProgressLedger, SessionStats, WeightMap, WrongEntry};
use crate::vocabulary::builtin_meaning_map;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Per-path results of a reset pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Write default documents to every layout.
///
/// The vocabulary document is only seeded when absent; an existing word
/// list is never overwritten. Individual failures land in
/// `ResetOutcome::failed`; the pass itself never fails.
pub fn reset_all(layouts: &[StorageLayout]) -> ResetOutcome {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let mut outcome = ResetOutcome::default();

    for layout in layouts {
        let words = JsonDocument::new(layout.word_path());
        if !words.exists() {
            record(&mut outcome, &layout.word_path(), words.save(&builtin_meaning_map()));
        }

        record(
            &mut outcome,
            &layout.weight_path(),
            JsonDocument::new(layout.weight_path()).save(&WeightMap::new()),
        );
        record(
            &mut outcome,
            &layout.goals_path(),
            JsonDocument::new(layout.goals_path()).save(&ProgressLedger::new(&today)),
        );
        record(
            &mut outcome,
            &layout.stats_path(),
            JsonDocument::new(layout.stats_path()).save(&SessionStats::default()),
        );
        record(
            &mut outcome,
            &layout.wrong_path(),
            JsonDocument::new(layout.wrong_path()).save(&Vec::<WrongEntry>::new()),
        );
    }

    outcome
}

fn record(outcome: &mut ResetOutcome, path: &Path, result: crate::error::Result<()>) {
    match result {
        Ok(()) => outcome.written.push(path.to_path_buf()),
        Err(error) => {
            warn!("reset could not write {}: {error}", path.display());
            outcome.failed.push(path.to_path_buf());
        }
    }
}
