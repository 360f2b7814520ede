//! # survivor-pool
//!
//! Elimination-state engine for football survivor pools.
//!
//! Participants pick one team per round. A losing pick, or no pick once a
//! round is under way, costs a life; a participant with no lives left is
//! eliminated.
//!
//! ## Design Principles
//!
//! 1. **Recomputed, Never Stored**: Status is a pure projection of
//!    (picks, rounds, lives, fixtures). Nothing is persisted between calls.
//!
//! 2. **One Fold**: Single and batch evaluation run the same round fold.
//!    Batch mode only swaps per-round fetches for a shared prefetched map.
//!
//! 3. **Conservative Fallbacks**: Missing or failed fixture data reads as
//!    "not started", so a fetch failure can never cost a life.
//!
//! ## Modules
//!
//! - `core`: Provider identifiers, competition scope, pool configuration
//! - `fixtures`: Fixture data, status codes, the `FixtureSource` collaborator
//! - `rounds`: Enrolled rounds and completeness predicates
//! - `picks`: Picks and per-pick evaluation
//! - `elimination`: The round fold, engine entry points, stats, standings

pub mod core;
pub mod fixtures;
pub mod rounds;
pub mod picks;
pub mod elimination;

// Re-export commonly used types
pub use crate::core::{Competition, ConfigError, FixtureId, LeagueId, PoolConfig, TeamId};

pub use crate::fixtures::{
    parse_fixtures_response, FetchError, Fixture, FixtureSide, FixtureSource, FixtureStatus,
    FnFixtures, Side, StaticFixtures,
};

pub use crate::rounds::{has_round_started, is_round_finished, Round};

pub use crate::picks::{evaluate_pick, Pick, PickBook, PickOutcome, PickResult};

pub use crate::elimination::{
    sequence_rounds, standings, CalculatedStatus, EvaluationStats, RoundFixtureMap, RoundOutcome,
    RoundResult, Standing, SurvivalState, SurvivorEngine,
};
