//! Error types and handling for the Cee-Lo engine

use thiserror::Error;

use crate::protocol::RoundId;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cee-Lo engine error types
///
/// Every failure here is deterministic given the same inputs: there is no
/// I/O inside the engine besides config loading, so a failed round replays
/// to the same error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Revealed seed does not hash to the recorded commitment. Never
    /// retried by the engine: retrying a reveal would let a caller shop
    /// for a seed that matches.
    #[error("Revealed seed does not match commitment for round {round_id}")]
    CommitmentMismatch { round_id: RoundId },

    #[error("Invalid dice roll: {0}")]
    InvalidRoll(String),

    #[error("Invalid bet: {0}")]
    InvalidBet(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("TOML error: {}", err))
    }
}
