//! Rounds and their completeness predicates.

pub mod completeness;
pub mod round;

pub use completeness::{has_round_started, is_round_finished};
pub use round::Round;
