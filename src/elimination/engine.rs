//! Single-participant and batch entry points.
//!
//! Both paths run `sequence_rounds`. The batch path only changes where
//! fixtures come from: a `RoundFixtureMap` filled once up front, so the
//! number of external fetches depends on the rounds and not on the
//! number of participants.

use std::borrow::Cow;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::cache::{fetch_round, RoundFixtureMap};
use super::sequencer::sequence_rounds;
use super::stats::EvaluationStats;
use super::status::CalculatedStatus;
use crate::core::{ConfigError, PoolConfig};
use crate::fixtures::FixtureSource;
use crate::picks::Pick;
use crate::rounds::Round;

/// Elimination engine bound to one fixtures source and one pool config.
///
/// ## Example
///
/// ```
/// use survivor_pool::core::{FixtureId, PoolConfig, TeamId};
/// use survivor_pool::elimination::{RoundOutcome, SurvivorEngine};
/// use survivor_pool::fixtures::{Fixture, FixtureSide, FixtureStatus, StaticFixtures};
/// use survivor_pool::picks::Pick;
/// use survivor_pool::rounds::Round;
///
/// let source = StaticFixtures::from_fixtures(vec![Fixture::new(
///     FixtureId::new(1),
///     "Regular Season - 1",
///     FixtureStatus::FullTime,
///     FixtureSide::new(TeamId::new(50)).with_winner(Some(true)),
///     FixtureSide::new(TeamId::new(65)).with_winner(Some(false)),
/// )]);
/// let engine = SurvivorEngine::new(source, PoolConfig::default().with_lives(2)).unwrap();
///
/// let picks = vec![Pick::new(FixtureId::new(1), "Regular Season - 1", TeamId::new(50))];
/// let status = engine.evaluate(&picks, &[Round::new("Regular Season - 1")]);
///
/// assert_eq!(status.lives_remaining, 2);
/// assert_eq!(status.round_results[0].result, RoundOutcome::Win);
/// ```
#[derive(Clone, Debug)]
pub struct SurvivorEngine<S> {
    source: S,
    config: PoolConfig,
}

impl<S: FixtureSource> SurvivorEngine<S> {
    /// Create an engine. Fails if the config is not playable.
    pub fn new(source: S, config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Get the pool configuration.
    #[must_use]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Get the fixtures source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Compute one participant's status, fetching each round as it is reached.
    #[must_use]
    pub fn evaluate(&self, picks: &[Pick], rounds: &[Round]) -> CalculatedStatus {
        let competition = self.config.competition;
        sequence_rounds(picks, rounds, self.config.total_lives, |round| {
            Cow::Owned(fetch_round(&self.source, &competition, round).0)
        })
    }

    /// Compute the status of every participant, fetching each round once.
    ///
    /// Each participant's result is identical to `evaluate` on the same inputs.
    pub fn evaluate_batch<I, K, P>(
        &self,
        picks_by_participant: I,
        rounds: &[Round],
    ) -> FxHashMap<K, CalculatedStatus>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Eq + Hash,
        P: AsRef<[Pick]>,
    {
        self.evaluate_batch_with_stats(picks_by_participant, rounds).0
    }

    /// `evaluate_batch`, also reporting fetch and elimination counts.
    pub fn evaluate_batch_with_stats<I, K, P>(
        &self,
        picks_by_participant: I,
        rounds: &[Round],
    ) -> (FxHashMap<K, CalculatedStatus>, EvaluationStats)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Eq + Hash,
        P: AsRef<[Pick]>,
    {
        let fixtures = RoundFixtureMap::prefetch(&self.source, &self.config.competition, rounds);
        let statuses = evaluate_with_fixtures(
            picks_by_participant,
            rounds,
            self.config.total_lives,
            &fixtures,
        );

        let stats = EvaluationStats {
            participants: statuses.len(),
            rounds_requested: rounds.len(),
            rounds_fetched: fixtures.len(),
            fetch_failures: fixtures.failures(),
            eliminated: statuses.values().filter(|status| status.is_eliminated).count(),
        };
        debug!(?stats, "batch evaluation complete");

        (statuses, stats)
    }
}

/// Run the fold for every participant against fixtures already fetched.
pub fn evaluate_with_fixtures<I, K, P>(
    picks_by_participant: I,
    rounds: &[Round],
    total_lives: u32,
    fixtures: &RoundFixtureMap,
) -> FxHashMap<K, CalculatedStatus>
where
    I: IntoIterator<Item = (K, P)>,
    K: Eq + Hash,
    P: AsRef<[Pick]>,
{
    picks_by_participant
        .into_iter()
        .map(|(participant, picks)| {
            let status = sequence_rounds(picks.as_ref(), rounds, total_lives, |round| {
                Cow::Borrowed(fixtures.fixtures(round))
            });
            (participant, status)
        })
        .collect()
}
