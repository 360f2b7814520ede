//! Participant picks and the round-name index over them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{FixtureId, TeamId};

/// One participant's team selection for one round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pick {
    /// Fixture the picked team plays in.
    pub fixture: FixtureId,

    /// Round the pick belongs to.
    pub round: String,

    /// Picked team.
    pub team: TeamId,

    /// Display name of the picked team.
    #[serde(default)]
    pub team_name: String,
}

impl Pick {
    /// Create a pick.
    pub fn new(fixture: FixtureId, round: impl Into<String>, team: TeamId) -> Self {
        Self {
            fixture,
            round: round.into(),
            team,
            team_name: String::new(),
        }
    }

    /// Set the display name of the picked team.
    #[must_use]
    pub fn named(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }
}

/// A participant's picks indexed by round name.
///
/// Built once per participant. If several picks name the same round the
/// last one wins, matching the overwrite-before-lock behavior of the
/// write path.
#[derive(Clone, Debug, Default)]
pub struct PickBook<'a> {
    by_round: FxHashMap<&'a str, &'a Pick>,
}

impl<'a> PickBook<'a> {
    /// Index a slice of picks.
    pub fn new(picks: &'a [Pick]) -> Self {
        let mut by_round = FxHashMap::default();
        by_round.reserve(picks.len());
        for pick in picks {
            by_round.insert(pick.round.as_str(), pick);
        }
        Self { by_round }
    }

    /// The pick for `round`, if any.
    #[must_use]
    pub fn for_round(&self, round: &str) -> Option<&'a Pick> {
        self.by_round.get(round).copied()
    }

    /// Number of distinct rounds picked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_round.len()
    }

    /// True if there are no picks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_round.is_empty()
    }
}
