//! Round completeness predicates.
//!
//! Both predicates treat an empty fixture list as "nothing happened yet",
//! so a round with missing data can never cost a participant a life.

use crate::fixtures::Fixture;

/// True iff the round has at least one fixture and every fixture is finished.
#[must_use]
pub fn is_round_finished(fixtures: &[Fixture]) -> bool {
    !fixtures.is_empty() && fixtures.iter().all(Fixture::is_finished)
}

/// True iff at least one fixture has left the not-started state.
#[must_use]
pub fn has_round_started(fixtures: &[Fixture]) -> bool {
    fixtures.iter().any(|fixture| fixture.status.has_started())
}
