//! Core types for the vocabulary review engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of items to study per day.
pub const DEFAULT_DAILY_TARGET: i64 = 20;

/// A vocabulary entry: a term plus one or more reference meanings.
///
/// Items are loaded from an external source and never mutated by the engine;
/// the term doubles as the unique key in every persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub term: String,
    pub meanings: Vec<String>,
}

impl VocabularyItem {
    pub fn new(term: impl Into<String>, meanings: Vec<String>) -> Self {
        Self {
            term: term.into(),
            meanings,
        }
    }
}

/// Review priority record for a single term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Selection weight; higher means shown more often.
    #[serde(default = "default_weight")]
    pub weight: u32,
    /// Days until the item is due again.
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<DateTime<Utc>>,
}

fn default_weight() -> u32 {
    1
}

fn default_interval() -> u32 {
    1
}

impl Default for WeightRecord {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            interval: default_interval(),
            last_seen: None,
            next_due: None,
        }
    }
}

/// Sparse mapping from term to its weight record. Terms never reviewed have
/// no entry and count as weight 1.
pub type WeightMap = BTreeMap<String, WeightRecord>;

/// Pool narrowing applied before selection, based on term length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Normal
    }
}

impl Difficulty {
    /// Whether a term belongs to this difficulty band.
    pub fn admits(self, term: &str) -> bool {
        let len = term.chars().count();
        match self {
            Self::Easy => len <= 4,
            Self::Normal => true,
            Self::Hard => len >= 6,
        }
    }
}

/// Attempt counters for one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub correct: i64,
}

/// Durable record of study activity: the daily target, the date the ledger
/// was last rolled to, and per-date counters keyed `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLedger {
    #[serde(default = "default_daily_target")]
    pub daily_target: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub history: BTreeMap<String, DailyProgress>,
}

fn default_daily_target() -> i64 {
    DEFAULT_DAILY_TARGET
}

impl ProgressLedger {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            daily_target: DEFAULT_DAILY_TARGET,
            date: date.into(),
            history: BTreeMap::new(),
        }
    }

    /// Move the ledger to `today`, creating an empty record for the new date.
    /// Prior dates are preserved. Returns true when the date changed.
    pub fn roll_to(&mut self, today: &str) -> bool {
        let changed = self.date != today;
        if changed {
            self.date = today.to_string();
        }
        self.history.entry(today.to_string()).or_default();
        changed
    }

    /// Count one attempt on `date`.
    pub fn record(&mut self, date: &str, correct: bool) {
        let day = self.history.entry(date.to_string()).or_default();
        day.total += 1;
        if correct {
            day.correct += 1;
        }
    }

    /// Apply signed deltas to the counters on `date`. With
    /// `clamp_non_negative`, both counters are floored at 0 and `correct`
    /// never exceeds `total`.
    pub fn adjust(
        &mut self,
        date: &str,
        delta_total: i64,
        delta_correct: i64,
        clamp_non_negative: bool,
    ) {
        let day = self.history.entry(date.to_string()).or_default();
        day.total += delta_total;
        day.correct += delta_correct;
        if clamp_non_negative {
            day.total = day.total.max(0);
            day.correct = day.correct.max(0).min(day.total);
        }
    }

    /// Zero the counters on `date`, leaving other dates untouched.
    pub fn reset_day(&mut self, date: &str) {
        self.history.insert(date.to_string(), DailyProgress::default());
    }

    /// Today's counters against the target.
    pub fn snapshot(&self, date: &str) -> GoalSnapshot {
        let day = self.history.get(date).copied().unwrap_or_default();
        let percentage = if self.daily_target > 0 {
            round1(day.total as f64 / self.daily_target as f64 * 100.0)
        } else {
            0.0
        };
        GoalSnapshot {
            target: self.daily_target,
            current: day.total,
            correct: day.correct,
            percentage,
        }
    }

    /// Up to `days` most recent dated records, newest first.
    pub fn history_entries(&self, days: usize) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .rev()
            .take(days)
            .map(|(date, day)| HistoryEntry {
                date: date.clone(),
                total: day.total,
                correct: day.correct,
                accuracy: if day.total > 0 {
                    round1(day.correct as f64 / day.total as f64 * 100.0)
                } else {
                    0.0
                },
            })
            .collect()
    }
}

/// Today's goal progress as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSnapshot {
    pub target: i64,
    pub current: i64,
    pub correct: i64,
    pub percentage: f64,
}

/// One row of the rolling history report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub total: i64,
    pub correct: i64,
    pub accuracy: f64,
}

/// Whole-session answer totals and streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    #[serde(default)]
    pub total_questions: i64,
    #[serde(default)]
    pub correct_answers: i64,
    #[serde(default)]
    pub wrong_answers: i64,
    #[serde(default)]
    pub streak: i64,
    #[serde(default)]
    pub best_streak: i64,
}

impl SessionStats {
    pub fn record(&mut self, correct: bool) {
        self.total_questions += 1;
        if correct {
            self.correct_answers += 1;
            self.streak += 1;
            if self.streak > self.best_streak {
                self.best_streak = self.streak;
            }
        } else {
            self.wrong_answers += 1;
            self.streak = 0;
        }
    }

    /// Percentage of correct answers, one decimal place.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions > 0 {
            round1(self.correct_answers as f64 / self.total_questions as f64 * 100.0)
        } else {
            0.0
        }
    }
}

/// An item the user answered incorrectly, kept for review mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongEntry {
    pub term: String,
    pub meanings: Vec<String>,
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
