//! Answer matching against reference meanings.
//!
//! A free-text answer is checked against each reference in order: exact
//! equality after normalization, then substring containment in either
//! direction, then an edit-distance fallback with a length-based tolerance.
//! The first reference that succeeds wins.

use serde::{Deserialize, Serialize};

/// Tolerance knobs for the edit-distance fallback.
///
/// References of up to `short_reference_len` characters allow at most
/// `short_edit_limit` edits; longer references allow `tolerance` of their
/// length (never less than one edit).
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    pub short_reference_len: usize,
    pub short_edit_limit: usize,
    pub tolerance: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            short_reference_len: 6,
            short_edit_limit: 1,
            tolerance: 0.15,
        }
    }
}

/// Result of matching an answer against a set of references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// The reference that matched, in its original form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

impl MatchResult {
    fn hit(reference: &str) -> Self {
        Self {
            is_correct: true,
            matched: Some(reference.to_string()),
        }
    }

    fn miss() -> Self {
        Self {
            is_correct: false,
            matched: None,
        }
    }
}

impl MatchPolicy {
    /// Check `answer` against `references`; first success wins.
    ///
    /// Both sides are trimmed and lower-cased. An empty answer never
    /// matches, and empty references are skipped.
    pub fn matches(&self, answer: &str, references: &[String]) -> MatchResult {
        let user = answer.trim().to_lowercase();
        if user.is_empty() {
            return MatchResult::miss();
        }

        for reference in references {
            let target = reference.trim().to_lowercase();
            if target.is_empty() {
                continue;
            }
            if user == target {
                return MatchResult::hit(reference);
            }
            if user.contains(&target) || target.contains(&user) {
                return MatchResult::hit(reference);
            }
            let dist = levenshtein_distance(&user, &target);
            if dist <= self.edit_limit(target.chars().count()) {
                return MatchResult::hit(reference);
            }
        }
        MatchResult::miss()
    }

    fn edit_limit(&self, reference_len: usize) -> usize {
        if reference_len <= self.short_reference_len {
            self.short_edit_limit
        } else {
            ((reference_len as f64 * self.tolerance).floor() as usize).max(1)
        }
    }
}

/// Levenshtein distance over characters, two-row dynamic programming.
///
/// The DP row runs over the shorter string, keeping extra space at
/// O(min(len(a), len(b))).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (outer, inner) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    if inner.is_empty() {
        return outer.len();
    }

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr = vec![0; inner.len() + 1];

    for (i, oc) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ic) in inner.iter().enumerate() {
            let cost = if oc == ic { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
