//! Adaptive vocabulary review engine.
//!
//! Provides:
//! - Weighted next-item selection with a recency window and difficulty bands
//! - Answer matching with substring and edit-distance tolerance
//! - A coarse spaced-repetition weight/interval scheduler
//! - Persistent daily study-goal, session-stat, and wrong-word tracking
//!   over whole-file JSON documents

pub mod engine;
pub mod error;
pub mod matching;
pub mod scheduler;
pub mod selection;
pub mod store;
pub mod types;
pub mod vocabulary;

pub use engine::{AnswerOutcome, ReviewEngine};
pub use error::{EngineError, Result};
pub use matching::{levenshtein_distance, MatchPolicy, MatchResult};
pub use scheduler::WeightScheduler;
pub use selection::{filter_by_difficulty, select_item, RecentHistory, DEFAULT_RECENT_WINDOW};
pub use store::{
    reset_all, JsonDocument, ProgressTracker, ResetOutcome, StatsStore, StorageLayout, WeightStore,
    WrongBook,
};
pub use types::{
    DailyProgress, Difficulty, GoalSnapshot, HistoryEntry, ProgressLedger, SessionStats,
    VocabularyItem, WeightMap, WeightRecord, WrongEntry, DEFAULT_DAILY_TARGET,
};
pub use vocabulary::{builtin_items, VocabularySource};
