//! Per-round results and the computed participant status.
//!
//! `SurvivalState` is the accumulator of the round fold. It is the only
//! place lives are deducted, which keeps the elimination invariants local:
//!
//! - lives never increase and never go below zero
//! - `eliminated_at` is written once, at the round lives first reach zero
//! - no life is deducted after elimination

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::picks::{Pick, PickResult};

/// Result tag recorded for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Win,
    Draw,
    Loss,
    Pending,
    /// No pick was made and the round has started or finished.
    NoPick,
}

impl RoundOutcome {
    /// True for outcomes that cost a life.
    #[must_use]
    pub fn costs_life(self) -> bool {
        matches!(self, RoundOutcome::Loss | RoundOutcome::NoPick)
    }
}

impl From<PickResult> for RoundOutcome {
    fn from(result: PickResult) -> Self {
        match result {
            PickResult::Win => RoundOutcome::Win,
            PickResult::Draw => RoundOutcome::Draw,
            PickResult::Loss => RoundOutcome::Loss,
            PickResult::Pending => RoundOutcome::Pending,
        }
    }
}

/// One entry of the round ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: String,

    /// Pick that applied to this round, if any.
    pub pick: Option<Pick>,

    pub result: RoundOutcome,

    /// Whether every fixture of the round had finished. A pick can be
    /// resolved while this is still false.
    pub is_round_finished: bool,
}

/// Elimination status of one participant, recomputed on every call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedStatus {
    pub lives_remaining: u32,
    pub is_eliminated: bool,
    pub eliminated_at_round: Option<String>,

    /// One entry per enrolled round, in enrollment order.
    pub round_results: Vec<RoundResult>,
}

impl CalculatedStatus {
    /// Number of rounds with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: RoundOutcome) -> usize {
        self.round_results
            .iter()
            .filter(|entry| entry.result == outcome)
            .count()
    }

    /// Position of the elimination round in the ledger.
    ///
    /// Nothing costs a life after elimination, so this is the last
    /// life-costing entry, even when the round name is enrolled twice.
    #[must_use]
    pub fn eliminated_round_index(&self) -> Option<usize> {
        let round = self.eliminated_at_round.as_deref()?;
        self.round_results
            .iter()
            .rposition(|entry| entry.round == round && entry.result.costs_life())
    }

    /// Ledger entry for a round.
    #[must_use]
    pub fn result_for(&self, round: &str) -> Option<&RoundResult> {
        self.round_results.iter().find(|entry| entry.round == round)
    }
}

/// Fold accumulator over the enrolled rounds.
#[derive(Clone, Debug)]
pub struct SurvivalState {
    lives_remaining: u32,
    eliminated: bool,
    eliminated_at: Option<String>,
    results: Vec<RoundResult>,
}

impl SurvivalState {
    /// Start a participant with `total_lives`, expecting `round_count` rounds.
    ///
    /// With zero lives the participant is eliminated before the first round
    /// and `eliminated_at` stays `None`.
    pub fn new(total_lives: u32, round_count: usize) -> Self {
        Self {
            lives_remaining: total_lives,
            eliminated: total_lives == 0,
            eliminated_at: None,
            results: Vec::with_capacity(round_count),
        }
    }

    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Rounds recorded so far.
    #[must_use]
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    /// Deduct one life for `round`. No-op once eliminated.
    pub fn lose_life(&mut self, round: &str) {
        if self.is_eliminated() {
            return;
        }

        self.lives_remaining = self.lives_remaining.saturating_sub(1);
        if self.lives_remaining == 0 {
            debug!(round, "participant eliminated");
            self.eliminated = true;
            self.eliminated_at = Some(round.to_string());
        }
    }

    /// Append a ledger entry.
    pub fn record(
        &mut self,
        round: &str,
        pick: Option<&Pick>,
        result: RoundOutcome,
        is_round_finished: bool,
    ) {
        self.results.push(RoundResult {
            round: round.to_string(),
            pick: pick.cloned(),
            result,
            is_round_finished,
        });
    }

    /// Close the fold.
    #[must_use]
    pub fn finish(self) -> CalculatedStatus {
        CalculatedStatus {
            lives_remaining: self.lives_remaining,
            is_eliminated: self.eliminated,
            eliminated_at_round: self.eliminated_at,
            round_results: self.results,
        }
    }
}
