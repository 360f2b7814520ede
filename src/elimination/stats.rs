//! Batch evaluation statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one batch evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Participants evaluated.
    pub participants: usize,

    /// Enrolled rounds passed in (duplicates included).
    pub rounds_requested: usize,

    /// External fetches performed. Independent of `participants`.
    pub rounds_fetched: usize,

    /// Fetches that failed and were treated as "no data".
    pub fetch_failures: usize,

    /// Participants whose status is eliminated.
    pub eliminated: usize,
}

impl EvaluationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Participants still alive.
    #[must_use]
    pub fn survivors(&self) -> usize {
        self.participants.saturating_sub(self.eliminated)
    }

    /// Fraction of participants still alive.
    #[must_use]
    pub fn survival_rate(&self) -> f64 {
        if self.participants == 0 {
            0.0
        } else {
            self.survivors() as f64 / self.participants as f64
        }
    }
}
