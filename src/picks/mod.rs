//! Picks and per-pick evaluation.

pub mod evaluate;
pub mod pick;

pub use evaluate::{evaluate_pick, PickOutcome, PickResult};
pub use pick::{Pick, PickBook};
