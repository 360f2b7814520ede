//! Single-pick evaluation against its fixture.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::TeamId;
use crate::fixtures::{Fixture, Side};

/// Outcome of a pick's own match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickResult {
    Win,
    Draw,
    Loss,
    /// Match not finished yet.
    Pending,
}

/// Classification of one pick.
///
/// `success` is true for wins and draws. `finished` says whether the
/// pick's own match has concluded, independent of the rest of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickOutcome {
    pub success: bool,
    pub finished: bool,
    pub result: PickResult,
}

impl PickOutcome {
    const PENDING: Self = Self {
        success: false,
        finished: false,
        result: PickResult::Pending,
    };
}

/// Classify the pick of `team` in `fixture`.
///
/// A team that played neither side is a caller error; it is evaluated as
/// the away side so a single bad record cannot abort a whole evaluation.
#[must_use]
pub fn evaluate_pick(fixture: &Fixture, team: TeamId) -> PickOutcome {
    if !fixture.is_finished() {
        return PickOutcome::PENDING;
    }

    let side = fixture.side_of(team).unwrap_or_else(|| {
        warn!(fixture = %fixture.id, %team, "picked team not in fixture, using away side");
        Side::Away
    });

    match fixture.side(side).winner {
        None => PickOutcome {
            success: true,
            finished: true,
            result: PickResult::Draw,
        },
        Some(true) => PickOutcome {
            success: true,
            finished: true,
            result: PickResult::Win,
        },
        Some(false) => PickOutcome {
            success: false,
            finished: true,
            result: PickResult::Loss,
        },
    }
}
