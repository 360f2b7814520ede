//! Enrolled rounds.

use serde::{Deserialize, Serialize};

/// A named stage of the competition (usually a match week).
///
/// The name is the join key with fixtures and picks and must match the
/// provider's round name exactly. Dates are carried for callers that
/// compute deadlines; the engine does not read them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// Provider round name, e.g. "Regular Season - 12".
    pub name: String,

    /// Calendar dates (ISO-8601) the round's matches are played on.
    #[serde(default)]
    pub dates: Vec<String>,
}

impl Round {
    /// Create a round with no dates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dates: Vec::new(),
        }
    }

    /// Add a match date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.dates.push(date.into());
        self
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
