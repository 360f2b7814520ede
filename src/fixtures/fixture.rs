//! Fixture (match) data as reported by the football provider.

use serde::{Deserialize, Serialize};

use crate::core::{FixtureId, TeamId};

/// Match status, classified from the provider's short status code.
///
/// Only `NS` is "not started". `FT`, `AET` and `PEN` are the finished
/// variants. Every other code (live, halftime, postponed, abandoned...)
/// is kept verbatim in `Other` and counts as started but unfinished.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FixtureStatus {
    /// `NS`
    NotStarted,
    /// `FT`
    FullTime,
    /// `AET`
    AfterExtraTime,
    /// `PEN`
    Penalties,
    /// Any other code, upper-cased.
    Other(String),
}

impl FixtureStatus {
    /// Classify a provider status code. Case and surrounding whitespace are ignored.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        match code.as_str() {
            "NS" => FixtureStatus::NotStarted,
            "FT" => FixtureStatus::FullTime,
            "AET" => FixtureStatus::AfterExtraTime,
            "PEN" => FixtureStatus::Penalties,
            _ => FixtureStatus::Other(code),
        }
    }

    /// The provider short code for this status.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            FixtureStatus::NotStarted => "NS",
            FixtureStatus::FullTime => "FT",
            FixtureStatus::AfterExtraTime => "AET",
            FixtureStatus::Penalties => "PEN",
            FixtureStatus::Other(code) => code,
        }
    }

    /// True for any of the finished variants.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            FixtureStatus::FullTime | FixtureStatus::AfterExtraTime | FixtureStatus::Penalties
        )
    }

    /// True for every status except `NotStarted`.
    #[must_use]
    pub fn has_started(&self) -> bool {
        !matches!(self, FixtureStatus::NotStarted)
    }
}

impl From<String> for FixtureStatus {
    fn from(code: String) -> Self {
        FixtureStatus::from_code(&code)
    }
}

impl From<FixtureStatus> for String {
    fn from(status: FixtureStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Which side of a fixture a team played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// One team's side of a fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSide {
    /// Team that played this side.
    pub team: TeamId,

    /// Display name (not used for matching).
    #[serde(default)]
    pub name: String,

    /// Tri-state result: `Some(true)` won, `Some(false)` lost, `None` drew
    /// (or no result yet).
    #[serde(default)]
    pub winner: Option<bool>,
}

impl FixtureSide {
    /// Create a side with no result yet.
    pub fn new(team: TeamId) -> Self {
        Self {
            team,
            name: String::new(),
            winner: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the winner indicator.
    #[must_use]
    pub fn with_winner(mut self, winner: Option<bool>) -> Self {
        self.winner = winner;
        self
    }
}

/// One scheduled match. Belongs to exactly one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,

    /// Round name, the join key with picks and enrolled rounds.
    pub round: String,

    pub status: FixtureStatus,

    pub home: FixtureSide,

    pub away: FixtureSide,
}

impl Fixture {
    /// Create a fixture.
    pub fn new(
        id: FixtureId,
        round: impl Into<String>,
        status: FixtureStatus,
        home: FixtureSide,
        away: FixtureSide,
    ) -> Self {
        Self {
            id,
            round: round.into(),
            status,
            home,
            away,
        }
    }

    /// Which side `team` played on, if either.
    #[must_use]
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.home.team == team {
            Some(Side::Home)
        } else if self.away.team == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Get one side of the fixture.
    #[must_use]
    pub fn side(&self, side: Side) -> &FixtureSide {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Shorthand for `self.status.is_finished()`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}
