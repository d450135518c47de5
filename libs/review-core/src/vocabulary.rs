//! Vocabulary source: term to reference meanings.
//!
//! The document maps each term to either a single meaning string or a list
//! of meanings; both decode to `Vec<String>`. The source is read-only; a
//! missing, empty, or malformed document falls back to a small built-in set.

use crate::store::document::JsonDocument;
use crate::types::VocabularyItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum MeaningField {
    Many(Vec<String>),
    One(String),
}

impl MeaningField {
    fn into_meanings(self) -> Vec<String> {
        match self {
            Self::Many(meanings) => meanings,
            Self::One(meaning) => vec![meaning],
        }
    }
}

/// Read-only handle to the vocabulary document.
#[derive(Debug, Clone)]
pub struct VocabularySource {
    doc: JsonDocument<BTreeMap<String, MeaningField>>,
}

impl VocabularySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// Load the vocabulary, falling back to the built-in set when the
    /// document is missing, empty, or malformed.
    pub fn load_or_builtin(&self) -> Vec<VocabularyItem> {
        match self.doc.load() {
            Ok(Some(raw)) if !raw.is_empty() => raw
                .into_iter()
                .map(|(term, meanings)| VocabularyItem::new(term, meanings.into_meanings()))
                .collect(),
            Ok(_) => builtin_items(),
            Err(error) => {
                warn!("vocabulary unavailable, using built-in set: {error}");
                builtin_items()
            }
        }
    }
}

/// The built-in starter vocabulary.
pub fn builtin_items() -> Vec<VocabularyItem> {
    builtin_meaning_map()
        .into_iter()
        .map(|(term, meanings)| VocabularyItem::new(term, meanings))
        .collect()
}

pub(crate) fn builtin_meaning_map() -> BTreeMap<String, Vec<String>> {
    [
        ("freedom", "自由"),
        ("knowledge", "知识"),
        ("success", "成功"),
        ("challenge", "挑战"),
        ("opportunity", "机会"),
        ("determination", "决心"),
        ("creativity", "创造力"),
        ("inspiration", "灵感"),
    ]
    .into_iter()
    .map(|(term, meaning)| (term.to_string(), vec![meaning.to_string()]))
    .collect()
}
