//! Gaming module for the Cee-Lo engine
//!
//! This module provides the game-rule layer on top of the crypto
//! primitives:
//!
//! ## Rules
//! - Cee-Lo hand classification (sweep, triples, 1-2-3, points, rerolls)
//! - Head-to-head outcome comparison for PVP rounds
//!
//! ## Settlement
//! - Integer fixed-point payout math under a configurable house edge
//!
//! ## Rounds
//! - Commit-reveal round state machines (single-sided and PVP)
//! - Stake validation against configured table limits

pub mod payout;
pub mod round;
pub mod rules;

pub use payout::{settle, settle_fraction, settle_outcome, HouseEdge, Settlement};
pub use round::{PvpResult, PvpRound, Round, RoundResult};
pub use rules::{compare, resolve, Outcome, RoundOrdering};
