//! Daily study-goal tracking.
//!
//! Every operation reads the whole ledger, applies the mutation, and writes
//! it back. The ledger rolls to a new date implicitly: whenever the
//! wall-clock date differs from the stored one, an empty record is created
//! for the new date and prior dates stay in the history.

use crate::error::{EngineError, Result};
use crate::store::document::JsonDocument;
use crate::types::{GoalSnapshot, HistoryEntry, ProgressLedger};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle to the daily-goals document.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    doc: JsonDocument<ProgressLedger>,
}

impl ProgressTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    /// Today's target and counters, rolling the ledger date forward first
    /// when needed.
    pub fn today_goal(&self) -> GoalSnapshot {
        self.goal_for(&today())
    }

    /// Count one attempt for today and return the refreshed snapshot.
    pub fn record_answer(&self, correct: bool) -> GoalSnapshot {
        self.record_answer_on(&today(), correct)
    }

    /// Apply signed deltas to today's counters (manual correction).
    pub fn adjust_today(
        &self,
        delta_total: i64,
        delta_correct: i64,
        clamp_non_negative: bool,
    ) -> GoalSnapshot {
        self.adjust_on(&today(), delta_total, delta_correct, clamp_non_negative)
    }

    /// Zero today's counters; other dates are untouched.
    pub fn reset_today(&self) -> GoalSnapshot {
        self.reset_on(&today())
    }

    /// Update the daily target. Rejects targets below 1 without touching
    /// the ledger.
    pub fn set_daily_target(&self, target: i64) -> Result<GoalSnapshot> {
        if target < 1 {
            return Err(EngineError::InvalidDailyTarget(target));
        }
        let date = today();
        let mut ledger = self.load_or_default(&date);
        ledger.roll_to(&date);
        ledger.daily_target = target;
        self.persist(&ledger);
        Ok(ledger.snapshot(&date))
    }

    /// Up to `days` most recent dated records, newest first.
    pub fn history(&self, days: usize) -> Vec<HistoryEntry> {
        self.load_or_default(&today()).history_entries(days)
    }

    fn goal_for(&self, date: &str) -> GoalSnapshot {
        let mut ledger = self.load_or_default(date);
        if ledger.roll_to(date) {
            self.persist(&ledger);
        }
        ledger.snapshot(date)
    }

    fn record_answer_on(&self, date: &str, correct: bool) -> GoalSnapshot {
        let mut ledger = self.load_or_default(date);
        ledger.roll_to(date);
        ledger.record(date, correct);
        self.persist(&ledger);
        ledger.snapshot(date)
    }

    fn adjust_on(
        &self,
        date: &str,
        delta_total: i64,
        delta_correct: i64,
        clamp_non_negative: bool,
    ) -> GoalSnapshot {
        let mut ledger = self.load_or_default(date);
        ledger.roll_to(date);
        ledger.adjust(date, delta_total, delta_correct, clamp_non_negative);
        self.persist(&ledger);
        ledger.snapshot(date)
    }

    fn reset_on(&self, date: &str) -> GoalSnapshot {
        let mut ledger = self.load_or_default(date);
        ledger.roll_to(date);
        ledger.reset_day(date);
        self.persist(&ledger);
        ledger.snapshot(date)
    }

    fn load_or_default(&self, date: &str) -> ProgressLedger {
        match self.doc.load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => ProgressLedger::new(date),
            Err(error) => {
                warn!("progress ledger unavailable, starting fresh: {error}");
                ProgressLedger::new(date)
            }
        }
    }

    fn persist(&self, ledger: &ProgressLedger) {
        if let Err(error) = self.doc.save(ledger) {
            warn!("failed to persist progress ledger: {error}");
        }
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
