//! Book of items answered incorrectly, kept for review mode.

use crate::error::Result;
use crate::store::document::JsonDocument;
use crate::types::WrongEntry;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle to the wrong-words document.
#[derive(Debug, Clone)]
pub struct WrongBook {
    doc: JsonDocument<Vec<WrongEntry>>,
}

impl WrongBook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    pub fn load(&self) -> Result<Vec<WrongEntry>> {
        Ok(self.doc.load()?.unwrap_or_default())
    }

    pub fn entries(&self) -> Vec<WrongEntry> {
        match self.load() {
            Ok(entries) => entries,
            Err(error) => {
                warn!("wrong-word book unavailable, treating as empty: {error}");
                Vec::new()
            }
        }
    }

    /// Add an entry unless the same term and meanings are already present.
    /// Returns whether the book changed.
    pub fn add(&self, term: &str, meanings: &[String]) -> bool {
        let mut entries = self.entries();
        let exists = entries
            .iter()
            .any(|entry| entry.term == term && entry.meanings == meanings);
        if exists {
            return false;
        }
        entries.push(WrongEntry {
            term: term.to_string(),
            meanings: meanings.to_vec(),
        });
        self.persist(&entries);
        true
    }

    /// Remove every entry for `term`. Returns whether anything was removed.
    pub fn remove(&self, term: &str) -> bool {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|entry| entry.term != term);
        if entries.len() == before {
            return false;
        }
        self.persist(&entries);
        true
    }

    pub fn clear(&self) {
        self.persist(&Vec::new());
    }

    /// A uniformly random entry for review, if any.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<WrongEntry> {
        let entries = self.entries();
        if entries.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..entries.len());
        entries.into_iter().nth(index)
    }

    fn persist(&self, entries: &Vec<WrongEntry>) {
        if let Err(error) = self.doc.save(entries) {
            warn!("failed to persist wrong-word book: {error}");
        }
    }
}
