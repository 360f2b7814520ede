//! Elimination state derivation.
//!
//! Status is never stored. Every call folds the participant's picks over
//! the enrolled rounds against current fixture data:
//!
//! - `status`: ledger types and the fold accumulator
//! - `sequencer`: the fold itself
//! - `cache`: shared round fixtures for batch mode
//! - `engine`: single and batch entry points
//! - `stats`, `standings`: reporting over computed statuses

pub mod cache;
pub mod engine;
pub mod sequencer;
pub mod standings;
pub mod stats;
pub mod status;

pub use cache::RoundFixtureMap;
pub use engine::{evaluate_with_fixtures, SurvivorEngine};
pub use sequencer::{apply_round, sequence_rounds};
pub use standings::{standings, Standing};
pub use stats::EvaluationStats;
pub use status::{CalculatedStatus, RoundOutcome, RoundResult, SurvivalState};
