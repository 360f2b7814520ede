//! Shared round -> fixtures map for batch evaluation.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::core::Competition;
use crate::fixtures::{Fixture, FixtureSource};
use crate::rounds::Round;

/// Fetch one round, turning a failed fetch into "no data".
///
/// Returns the fixtures and whether the fetch failed.
pub(crate) fn fetch_round<S: FixtureSource>(
    source: &S,
    competition: &Competition,
    round: &str,
) -> (Vec<Fixture>, bool) {
    match source.round_fixtures(competition, round) {
        Ok(fixtures) => (fixtures, false),
        Err(err) => {
            warn!(
                %competition,
                round,
                error = %err,
                "fixtures fetch failed, treating round as not started"
            );
            (Vec::new(), true)
        }
    }
}

/// Fixtures of every enrolled round, fetched once per distinct round name.
#[derive(Clone, Debug, Default)]
pub struct RoundFixtureMap {
    by_round: FxHashMap<String, Vec<Fixture>>,
    failures: usize,
}

impl RoundFixtureMap {
    /// Fetch each distinct round in `rounds` exactly once.
    pub fn prefetch<S: FixtureSource>(
        source: &S,
        competition: &Competition,
        rounds: &[Round],
    ) -> Self {
        let mut seen = FxHashSet::default();
        let mut map = Self::default();

        for round in rounds {
            if !seen.insert(round.name.as_str()) {
                continue;
            }
            let (fixtures, failed) = fetch_round(source, competition, &round.name);
            if failed {
                map.failures += 1;
            }
            map.by_round.insert(round.name.clone(), fixtures);
        }

        debug!(
            %competition,
            rounds = map.by_round.len(),
            failures = map.failures,
            "prefetched round fixtures"
        );
        map
    }

    /// Build a map from fixtures already in hand.
    pub fn from_rounds(rounds: impl IntoIterator<Item = (String, Vec<Fixture>)>) -> Self {
        Self {
            by_round: rounds.into_iter().collect(),
            failures: 0,
        }
    }

    /// Fixtures for `round`; empty when the round was never fetched.
    #[must_use]
    pub fn fixtures(&self, round: &str) -> &[Fixture] {
        self.by_round.get(round).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct rounds held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_round.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_round.is_empty()
    }

    /// Fetches that failed and were stored as empty rounds.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }
}
