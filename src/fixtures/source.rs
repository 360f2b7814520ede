//! The fixtures collaborator.
//!
//! The engine never talks to the football provider directly. It asks a
//! `FixtureSource` for one round at a time and treats any failure as
//! "no data for this round yet".

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::Fixture;
use crate::core::Competition;

/// Failure reported by a fixtures source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fixtures unavailable: {0}")]
    Unavailable(String),
    #[error("rate limited by fixtures provider")]
    RateLimited,
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Supplies the fixtures of one round of a competition.
///
/// ## Implementation Notes
///
/// - `round` must be matched verbatim against the provider's round names
/// - Return an empty vec (or an error) when there is no data yet; the
///   engine handles both the same way
/// - Caching, retries and rate limiting belong in the implementation
pub trait FixtureSource {
    /// Fetch every fixture of `round` in `competition`.
    fn round_fixtures(
        &self,
        competition: &Competition,
        round: &str,
    ) -> Result<Vec<Fixture>, FetchError>;
}

impl<S: FixtureSource + ?Sized> FixtureSource for &S {
    fn round_fixtures(
        &self,
        competition: &Competition,
        round: &str,
    ) -> Result<Vec<Fixture>, FetchError> {
        (**self).round_fixtures(competition, round)
    }
}

/// In-memory fixtures keyed by round name.
///
/// Ignores the competition: callers that already hold fixture data for a
/// single competition load it here and hand it to the engine.
#[derive(Clone, Debug, Default)]
pub struct StaticFixtures {
    rounds: FxHashMap<String, Vec<Fixture>>,
}

impl StaticFixtures {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from a flat list, grouping fixtures by their round name.
    pub fn from_fixtures(fixtures: impl IntoIterator<Item = Fixture>) -> Self {
        let mut source = Self::new();
        for fixture in fixtures {
            source.insert(fixture);
        }
        source
    }

    /// Add one fixture under its own round name.
    pub fn insert(&mut self, fixture: Fixture) {
        self.rounds
            .entry(fixture.round.clone())
            .or_default()
            .push(fixture);
    }

    /// Replace all fixtures of a round.
    pub fn set_round(&mut self, round: impl Into<String>, fixtures: Vec<Fixture>) {
        self.rounds.insert(round.into(), fixtures);
    }

    /// Number of rounds with data.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }
}

impl FixtureSource for StaticFixtures {
    fn round_fixtures(
        &self,
        _competition: &Competition,
        round: &str,
    ) -> Result<Vec<Fixture>, FetchError> {
        Ok(self.rounds.get(round).cloned().unwrap_or_default())
    }
}

/// Adapts a closure into a `FixtureSource`.
///
/// ```
/// use survivor_pool::core::{Competition, LeagueId};
/// use survivor_pool::fixtures::{FetchError, FixtureSource, FnFixtures};
///
/// let source = FnFixtures::new(|_: &Competition, _: &str| Err(FetchError::RateLimited));
/// let competition = Competition::new(LeagueId::new(39), 2024);
/// assert!(source.round_fixtures(&competition, "Regular Season - 1").is_err());
/// ```
pub struct FnFixtures<F> {
    fetch: F,
}

impl<F> FnFixtures<F> {
    /// Wrap a fetch closure.
    pub fn new(fetch: F) -> Self
    where
        F: Fn(&Competition, &str) -> Result<Vec<Fixture>, FetchError>,
    {
        Self { fetch }
    }
}

impl<F> FixtureSource for FnFixtures<F>
where
    F: Fn(&Competition, &str) -> Result<Vec<Fixture>, FetchError>,
{
    fn round_fixtures(
        &self,
        competition: &Competition,
        round: &str,
    ) -> Result<Vec<Fixture>, FetchError> {
        (self.fetch)(competition, round)
    }
}
