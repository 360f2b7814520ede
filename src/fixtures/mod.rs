//! Fixture data and the collaborator that supplies it.
//!
//! - `fixture`: `Fixture`, its sides and status classification
//! - `source`: the `FixtureSource` trait plus in-memory and closure sources
//! - `provider`: decoding of the provider's JSON response

pub mod fixture;
pub mod provider;
pub mod source;

pub use fixture::{Fixture, FixtureSide, FixtureStatus, Side};
pub use provider::parse_fixtures_response;
pub use source::{FetchError, FixtureSource, FnFixtures, StaticFixtures};
