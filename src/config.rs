//! Configuration management for the Cee-Lo engine
//!
//! Centralized configuration with environment-based defaults, TOML file
//! loading, and runtime validation. House edge and table limits are
//! injected here rather than read from any process-wide singleton; a bad
//! edge is fatal at load time, before any round can start.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::gaming::payout::HouseEdge;
use crate::protocol::constants::{DEFAULT_HOUSE_EDGE, MAX_BET_AMOUNT, MIN_BET_AMOUNT};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub game: GameConfig,
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub environment: Environment,
    pub log_level: String,
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub min_bet: u64,
    pub max_bet: u64,
    pub house_edge: f64,
}

/// Environment enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Default for Config {
    fn default() -> Self {
        Self::development()
    }
}

impl Config {
    /// Development defaults
    pub fn development() -> Self {
        Self {
            app: AppConfig {
                name: "ceelo".to_string(),
                environment: Environment::Development,
                log_level: "debug".to_string(),
            },
            game: GameConfig::default(),
        }
    }

    /// Production defaults
    pub fn production() -> Self {
        Self {
            app: AppConfig {
                name: "ceelo".to_string(),
                environment: Environment::Production,
                log_level: "info".to_string(),
            },
            game: GameConfig::default(),
        }
    }

    /// Load configuration, preferring the `CEELO_CONFIG` file when set
    ///
    /// Falls back to environment defaults selected by `CEELO_ENV`
    /// (`development`, `testing`, `production`).
    pub fn load() -> Result<Self> {
        if let Ok(path) = env::var("CEELO_CONFIG") {
            return Self::load_from_file(path);
        }

        let config = match env::var("CEELO_ENV").as_deref() {
            Ok("production") => Self::production(),
            Ok("testing") => {
                let mut config = Self::development();
                config.app.environment = Environment::Testing;
                config
            }
            _ => Self::development(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Runs at load time so an invalid house edge or bet range can never
    /// reach a live round.
    pub fn validate(&self) -> Result<()> {
        self.game.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_bet: MIN_BET_AMOUNT,
            max_bet: MAX_BET_AMOUNT,
            house_edge: DEFAULT_HOUSE_EDGE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        // HouseEdge construction enforces the open (0, 1) interval
        self.house_edge()?;

        if self.min_bet == 0 {
            return Err(Error::InvalidConfiguration(
                "min_bet must be positive".to_string(),
            ));
        }
        if self.min_bet > self.max_bet {
            return Err(Error::InvalidConfiguration(format!(
                "min_bet {} exceeds max_bet {}",
                self.min_bet, self.max_bet
            )));
        }
        Ok(())
    }

    /// The validated fixed-point edge used by settlement
    pub fn house_edge(&self) -> Result<HouseEdge> {
        HouseEdge::from_fraction(self.house_edge)
    }
}
