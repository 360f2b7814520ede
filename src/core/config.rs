//! Pool configuration.
//!
//! A pool is configured once at startup with:
//! - `Competition`: which league and season the fixtures come from
//! - `total_lives`: how many lost rounds a participant can absorb
//!
//! The engine never hardcodes a league or a life count.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Competition, LeagueId};

/// Errors raised while building or loading a `PoolConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A pool where every participant starts eliminated is meaningless.
    #[error("total lives must be at least 1")]
    ZeroLives,
    #[error("invalid season year: {0}")]
    InvalidSeason(u16),
    #[error("config parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for one survivor pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// League and season the pool tracks.
    pub competition: Competition,

    /// Lives every participant starts with.
    pub total_lives: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            competition: Competition::new(LeagueId::new(39), 2024),
            total_lives: 1,
        }
    }
}

impl PoolConfig {
    /// Create a config for a competition with the default life count.
    pub fn new(competition: Competition) -> Self {
        Self {
            competition,
            ..Self::default()
        }
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PoolConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of lives.
    #[must_use]
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.total_lives = lives;
        self
    }

    /// Set the league.
    #[must_use]
    pub fn with_league(mut self, league: LeagueId) -> Self {
        self.competition.league = league;
        self
    }

    /// Set the season.
    #[must_use]
    pub fn with_season(mut self, season: u16) -> Self {
        self.competition.season = season;
        self
    }

    /// Check that the config describes a playable pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        if self.competition.season == 0 {
            return Err(ConfigError::InvalidSeason(self.competition.season));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.total_lives, 1);
        assert_eq!(config.competition.league, LeagueId::new(39));
        assert_eq!(config.competition.season, 2024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PoolConfig::default()
            .with_lives(3)
            .with_league(LeagueId::new(140))
            .with_season(2023);

        assert_eq!(config.total_lives, 3);
        assert_eq!(config.competition, Competition::new(LeagueId::new(140), 2023));
    }

    #[test]
    fn test_validate_rejects_zero_lives() {
        let config = PoolConfig::default().with_lives(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroLives)));
    }

    #[test]
    fn test_validate_rejects_zero_season() {
        let config = PoolConfig::default().with_season(0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSeason(0))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"competition": {"league": 61, "season": 2024}, "total_lives": 2}"#;
        let config = PoolConfig::from_json(json).unwrap();
        assert_eq!(config.total_lives, 2);
        assert_eq!(config.competition.league, LeagueId::new(61));

        assert!(matches!(PoolConfig::from_json("{"), Err(ConfigError::Json(_))));

        let zero = r#"{"competition": {"league": 61, "season": 2024}, "total_lives": 0}"#;
        assert!(matches!(PoolConfig::from_json(zero), Err(ConfigError::ZeroLives)));
    }

    #[test]
    fn test_serialization() {
        let config = PoolConfig::default().with_lives(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
