//! The round fold.
//!
//! Walks a participant's enrolled rounds in order and applies the life
//! rules to each one. The fold is parameterized by a round -> fixtures
//! lookup so the single and batch entry points share every branch.

use std::borrow::Cow;

use tracing::{trace, warn};

use super::status::{CalculatedStatus, RoundOutcome, SurvivalState};
use crate::fixtures::Fixture;
use crate::picks::{evaluate_pick, Pick, PickBook};
use crate::rounds::{has_round_started, is_round_finished, Round};

/// Compute a participant's status over `rounds`.
///
/// `fixtures_for` is called at most once per round, and never for rounds
/// after elimination. A participant given zero lives is eliminated from the
/// start: every round is `Pending` and `eliminated_at_round` is `None`.
pub fn sequence_rounds<'f, F>(
    picks: &[Pick],
    rounds: &[Round],
    total_lives: u32,
    mut fixtures_for: F,
) -> CalculatedStatus
where
    F: FnMut(&str) -> Cow<'f, [Fixture]>,
{
    let book = PickBook::new(picks);

    rounds
        .iter()
        .fold(SurvivalState::new(total_lives, rounds.len()), |mut state, round| {
            let pick = book.for_round(&round.name);

            if state.is_eliminated() {
                state.record(&round.name, pick, RoundOutcome::Pending, false);
            } else {
                let fixtures = fixtures_for(&round.name);
                apply_round(&mut state, &round.name, pick, &fixtures);
            }

            state
        })
        .finish()
}

/// Apply one round to a live participant.
pub fn apply_round(
    state: &mut SurvivalState,
    round: &str,
    pick: Option<&Pick>,
    fixtures: &[Fixture],
) {
    let round_finished = is_round_finished(fixtures);
    let round_started = has_round_started(fixtures);
    let own_fixture =
        pick.and_then(|pick| fixtures.iter().find(|fixture| fixture.id == pick.fixture));

    trace!(round, round_finished, round_started, has_pick = pick.is_some(), "applying round");

    match (round_finished, pick) {
        // Missed the deadline: the round is under way and nothing was picked.
        (false, None) if round_started => {
            state.lose_life(round);
            state.record(round, None, RoundOutcome::NoPick, false);
        }
        (false, None) => {
            state.record(round, None, RoundOutcome::Pending, false);
        }
        (false, Some(pick)) => {
            let outcome = own_fixture.map(|fixture| evaluate_pick(fixture, pick.team));
            match outcome {
                Some(outcome) if outcome.finished => {
                    if !outcome.success {
                        state.lose_life(round);
                    }
                    state.record(round, Some(pick), outcome.result.into(), false);
                }
                _ => state.record(round, Some(pick), RoundOutcome::Pending, false),
            }
        }
        (true, None) => {
            state.lose_life(round);
            state.record(round, None, RoundOutcome::NoPick, true);
        }
        (true, Some(pick)) => match own_fixture {
            None => {
                warn!(
                    round,
                    fixture = %pick.fixture,
                    "picked fixture missing from finished round, counting as loss"
                );
                state.lose_life(round);
                state.record(round, Some(pick), RoundOutcome::Loss, true);
            }
            Some(fixture) => {
                let outcome = evaluate_pick(fixture, pick.team);
                if !outcome.success {
                    state.lose_life(round);
                }
                state.record(round, Some(pick), outcome.result.into(), true);
            }
        },
    }
}
