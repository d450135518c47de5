//! High-level review engine tying the stores, selector, and matcher
//! together.
//!
//! The engine owns one handle per persisted document plus the
//! session-scoped recent-history window and RNG; callers drive it with
//! `next_item` / `submit_answer` and the pass-through goal operations.

use crate::matching::MatchPolicy;
use crate::selection::{filter_by_difficulty, select_item, RecentHistory};
use crate::store::{
    reset_all, ProgressTracker, ResetOutcome, StatsStore, StorageLayout, WeightStore, WrongBook,
};
use crate::types::{
    Difficulty, GoalSnapshot, HistoryEntry, SessionStats, VocabularyItem, WeightRecord, WrongEntry,
};
use crate::vocabulary::VocabularySource;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything a caller needs to render the verdict on one answer.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    /// The reference meaning that matched, if any.
    pub matched: Option<String>,
    /// Today's goal after counting this answer.
    pub goal: GoalSnapshot,
    /// The term's weight record after the update.
    pub record: WeightRecord,
}

/// A review session over one storage layout.
pub struct ReviewEngine {
    items: Vec<VocabularyItem>,
    weights: WeightStore,
    progress: ProgressTracker,
    stats: StatsStore,
    wrongbook: WrongBook,
    policy: MatchPolicy,
    recent: RecentHistory,
    rng: StdRng,
}

impl ReviewEngine {
    /// Open an engine over `layout`, loading the vocabulary (or the
    /// built-in set when the document is missing or unusable).
    pub fn open(layout: &StorageLayout) -> Self {
        Self::build(layout, StdRng::from_entropy())
    }

    /// Like [`ReviewEngine::open`], with a deterministic RNG seed.
    pub fn with_seed(layout: &StorageLayout, seed: u64) -> Self {
        Self::build(layout, StdRng::seed_from_u64(seed))
    }

    fn build(layout: &StorageLayout, rng: StdRng) -> Self {
        Self {
            items: VocabularySource::new(layout.word_path()).load_or_builtin(),
            weights: WeightStore::new(layout.weight_path()),
            progress: ProgressTracker::new(layout.goals_path()),
            stats: StatsStore::new(layout.stats_path()),
            wrongbook: WrongBook::new(layout.wrong_path()),
            policy: MatchPolicy::default(),
            recent: RecentHistory::default(),
            rng,
        }
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn set_match_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    /// Pick the next item to show, honoring the difficulty band, current
    /// weights, and the recent-history window.
    pub fn next_item(&mut self, difficulty: Difficulty) -> Option<VocabularyItem> {
        let weights = self.weights.load_or_default();
        let pool = filter_by_difficulty(&self.items, difficulty);
        select_item(&pool, &mut self.recent, &weights, &mut self.rng).cloned()
    }

    /// Grade `answer` for `term` and feed the verdict back into the weight
    /// store, the daily goal, the session stats, and (on a miss) the
    /// wrong-word book. Returns `None` for an unknown term.
    pub fn submit_answer(&self, term: &str, answer: &str) -> Option<AnswerOutcome> {
        let item = self.items.iter().find(|item| item.term == term)?;
        let verdict = self.policy.matches(answer, &item.meanings);

        let record = self.weights.adjust(term, verdict.is_correct);
        let goal = self.progress.record_answer(verdict.is_correct);
        self.stats.record_answer(verdict.is_correct);
        if !verdict.is_correct {
            self.wrongbook.add(term, &item.meanings);
        }

        Some(AnswerOutcome {
            is_correct: verdict.is_correct,
            matched: verdict.matched,
            goal,
            record,
        })
    }

    pub fn today_goal(&self) -> GoalSnapshot {
        self.progress.today_goal()
    }

    pub fn adjust_today(
        &self,
        delta_total: i64,
        delta_correct: i64,
        clamp_non_negative: bool,
    ) -> GoalSnapshot {
        self.progress
            .adjust_today(delta_total, delta_correct, clamp_non_negative)
    }

    pub fn reset_today(&self) -> GoalSnapshot {
        self.progress.reset_today()
    }

    pub fn set_daily_target(&self, target: i64) -> crate::error::Result<GoalSnapshot> {
        self.progress.set_daily_target(target)
    }

    pub fn history(&self, days: usize) -> Vec<HistoryEntry> {
        self.progress.history(days)
    }

    pub fn session_stats(&self) -> SessionStats {
        self.stats.load_or_default()
    }

    pub fn wrong_entries(&self) -> Vec<WrongEntry> {
        self.wrongbook.entries()
    }

    /// A random wrong-book entry for review mode.
    pub fn pick_wrong_entry(&mut self) -> Option<WrongEntry> {
        self.wrongbook.pick(&mut self.rng)
    }

    pub fn remove_wrong_entry(&self, term: &str) -> bool {
        self.wrongbook.remove(term)
    }

    /// Reset every document in every given layout; see
    /// [`crate::store::reset_all`].
    pub fn reset_all(&self, layouts: &[StorageLayout]) -> ResetOutcome {
        reset_all(layouts)
    }
}
