//! Identifier newtypes shared with the external fixtures provider.
//!
//! The provider hands out numeric ids for teams, fixtures and leagues.
//! Wrapping them keeps a team id from being compared against a fixture id.

use serde::{Deserialize, Serialize};

/// Provider-assigned team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// Provider-assigned fixture (match) identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(pub u64);

impl FixtureId {
    /// Create a new fixture ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FixtureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fixture({})", self.0)
    }
}

/// Provider-assigned competition identifier (e.g. 39 for the Premier League).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new league ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LeagueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "League({})", self.0)
    }
}

/// A league in a given season. This is the scope every fixtures lookup runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Competition {
    /// Provider league id.
    pub league: LeagueId,
    /// Season starting year, e.g. 2024 for 2024/25.
    pub season: u16,
}

impl Competition {
    /// Create a new competition scope.
    #[must_use]
    pub const fn new(league: LeagueId, season: u16) -> Self {
        Self { league, season }
    }
}

impl std::fmt::Display for Competition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} season {}", self.league, self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_basics() {
        assert_eq!(TeamId::new(33).raw(), 33);
        assert_eq!(FixtureId::new(1_035_037).raw(), 1_035_037);
        assert_eq!(format!("{}", TeamId::new(33)), "Team(33)");
        assert_eq!(format!("{}", FixtureId::new(7)), "Fixture(7)");
    }

    #[test]
    fn test_competition_display() {
        let competition = Competition::new(LeagueId::new(39), 2024);
        assert_eq!(format!("{}", competition), "League(39) season 2024");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&TeamId::new(50)).unwrap();
        assert_eq!(json, "50");

        let competition = Competition::new(LeagueId::new(140), 2023);
        let json = serde_json::to_string(&competition).unwrap();
        let deserialized: Competition = serde_json::from_str(&json).unwrap();
        assert_eq!(competition, deserialized);
    }
}
