//! Weight and interval update rule.
//!
//! A coarse two-state approximation of spaced repetition: a correct answer
//! lowers the selection weight and doubles the review interval; an incorrect
//! answer raises the weight and makes the item due immediately.

use crate::types::WeightRecord;
use chrono::{DateTime, Duration, Utc};

/// Update rule with configurable bounds.
#[derive(Debug, Clone)]
pub struct WeightScheduler {
    pub min_weight: u32,
    pub max_weight: u32,
    pub max_interval_days: u32,
}

impl Default for WeightScheduler {
    fn default() -> Self {
        Self {
            min_weight: 1,
            max_weight: 20,
            max_interval_days: 60,
        }
    }
}

impl WeightScheduler {
    /// Apply one answer to a record.
    ///
    /// The weight is clamped into `[min_weight, max_weight]` even when the
    /// stored value was out of band.
    pub fn apply(&self, record: &mut WeightRecord, correct: bool, now: DateTime<Utc>) {
        if correct {
            record.weight = record
                .weight
                .saturating_sub(1)
                .clamp(self.min_weight, self.max_weight);
            record.interval = record
                .interval
                .max(1)
                .saturating_mul(2)
                .min(self.max_interval_days);
            record.next_due = Some(now + Duration::days(i64::from(record.interval)));
        } else {
            record.weight = record
                .weight
                .saturating_add(1)
                .clamp(self.min_weight, self.max_weight);
            record.interval = 1;
            record.next_due = Some(now);
        }
        record.last_seen = Some(now);
    }
}
