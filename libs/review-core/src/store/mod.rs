//! Persistent JSON document stores.

pub mod document;
pub mod progress;
pub mod reset;
pub mod stats;
pub mod weights;
pub mod wrongbook;

pub use document::JsonDocument;
pub use progress::ProgressTracker;
pub use reset::{reset_all, ResetOutcome};
pub use stats::StatsStore;
pub use weights::WeightStore;
pub use wrongbook::WrongBook;

use std::path::{Path, PathBuf};

/// Vocabulary document file name.
pub const WORD_FILE: &str = "word_dict.json";
/// Weight document file name.
pub const WEIGHT_FILE: &str = "word_weights.json";
/// Daily-goals document file name.
pub const DAILY_GOALS_FILE: &str = "daily_goals.json";
/// Session-stats document file name.
pub const STATS_FILE: &str = "learning_stats.json";
/// Wrong-word book file name.
pub const WRONG_FILE: &str = "wrong_words.json";

/// One directory holding the engine's documents under their well-known
/// file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    dir: PathBuf,
}

impl StorageLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn word_path(&self) -> PathBuf {
        self.dir.join(WORD_FILE)
    }

    pub fn weight_path(&self) -> PathBuf {
        self.dir.join(WEIGHT_FILE)
    }

    pub fn goals_path(&self) -> PathBuf {
        self.dir.join(DAILY_GOALS_FILE)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.dir.join(STATS_FILE)
    }

    pub fn wrong_path(&self) -> PathBuf {
        self.dir.join(WRONG_FILE)
    }

    /// The redundant locations the application historically wrote to: the
    /// application directory, its parent, and the process's current
    /// directory, deduplicated in that order.
    pub fn candidate_layouts(app_dir: &Path) -> Vec<StorageLayout> {
        let mut dirs: Vec<PathBuf> = vec![app_dir.to_path_buf()];
        if let Some(parent) = app_dir.parent() {
            dirs.push(parent.to_path_buf());
        }
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd);
        }

        let mut layouts: Vec<StorageLayout> = Vec::new();
        for dir in dirs {
            let layout = StorageLayout::new(dir);
            if !layouts.contains(&layout) {
                layouts.push(layout);
            }
        }
        layouts
    }
}
