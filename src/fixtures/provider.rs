//! Decoding of the football provider's fixtures response.
//!
//! The provider wraps every fixture in nested objects:
//!
//! ```json
//! {"response": [{
//!     "fixture": {"id": 1035037, "status": {"short": "FT"}},
//!     "league": {"round": "Regular Season - 1"},
//!     "teams": {
//!         "home": {"id": 50, "name": "Manchester City", "winner": true},
//!         "away": {"id": 65, "name": "Nottingham Forest", "winner": false}
//!     }
//! }]}
//! ```
//!
//! Only the fields the engine reads are decoded; everything else is ignored.

use serde::Deserialize;

use super::{FetchError, Fixture, FixtureSide, FixtureStatus};
use crate::core::{FixtureId, TeamId};

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    fixture: FixtureInfo,
    league: LeagueInfo,
    teams: Teams,
}

#[derive(Deserialize)]
struct FixtureInfo {
    id: u64,
    status: StatusInfo,
}

#[derive(Deserialize)]
struct StatusInfo {
    short: String,
}

#[derive(Deserialize)]
struct LeagueInfo {
    round: String,
}

#[derive(Deserialize)]
struct Teams {
    home: TeamInfo,
    away: TeamInfo,
}

#[derive(Deserialize)]
struct TeamInfo {
    id: u64,
    #[serde(default)]
    name: String,
    // Absent and null both mean "no winner".
    #[serde(default)]
    winner: Option<bool>,
}

fn into_side(team: TeamInfo) -> FixtureSide {
    FixtureSide {
        team: TeamId::new(team.id),
        name: team.name,
        winner: team.winner,
    }
}

fn into_fixture(entry: Entry) -> Fixture {
    Fixture {
        id: FixtureId::new(entry.fixture.id),
        round: entry.league.round,
        status: FixtureStatus::from_code(&entry.fixture.status.short),
        home: into_side(entry.teams.home),
        away: into_side(entry.teams.away),
    }
}

/// Decode a provider fixtures response into engine fixtures.
pub fn parse_fixtures_response(body: &str) -> Result<Vec<Fixture>, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope.response.into_iter().map(into_fixture).collect())
}
