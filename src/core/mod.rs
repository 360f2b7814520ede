//! Core pool types: provider identifiers, competition scope, configuration.
//!
//! Everything here is independent of how fixtures are fetched or how picks
//! are evaluated.

pub mod ids;
pub mod config;

pub use ids::{Competition, FixtureId, LeagueId, TeamId};
pub use config::{ConfigError, PoolConfig};
