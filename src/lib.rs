//! Ceelo - a provably-fair Cee-Lo dice engine
//!
//! The fairness argument is a commit-reveal protocol: a one-way
//! commitment to a round's seed is recorded before the seed is final, so
//! revealing a seed that verifies is the only proof the roll was not
//! chosen after the fact. Everything downstream of the reveal is a pure
//! function of the seed:
//!
//! - `crypto::commitment`: the commit/verify pair and two-phase records
//! - `crypto::random`: deterministic seed -> dice derivation
//! - `gaming::rules`: Cee-Lo hand classification and PVP comparison
//! - `gaming::payout`: integer settlement under a configured house edge
//! - `gaming::round`: the round state machines tying the stages together
//!
//! Transport, wallets, matchmaking, and persistence live outside this
//! crate; they drive the engine and record what it returns. The engine
//! itself performs no network or disk I/O (config loading aside) and
//! holds no shared mutable state, so unrelated rounds can run fully in
//! parallel.

pub mod config;
pub mod error;
pub mod protocol; // Core value types (dice, chips, identifiers)
pub mod crypto; // Commitments and deterministic derivation
pub mod gaming; // Rules, settlement, round state machines

// Re-export commonly used types for easy access
pub use error::{Error, Result};
pub use protocol::{Chips, DiceTriple, GameId, Hash256, PeerId, RoundId};
pub use crypto::{
    commit, derive, derive_indexed, verify, DeterministicRng, PendingSeed, SeedCommit, SeedReveal,
};
pub use gaming::{
    compare, resolve, settle, settle_fraction, settle_outcome, HouseEdge, Outcome, PvpResult,
    PvpRound, Round, RoundOrdering, RoundResult, Settlement,
};
pub use config::{AppConfig, Config, Environment, GameConfig};
