//! Protocol types for the Cee-Lo engine
//!
//! This module defines the value types every round computation is built
//! from:
//! - Identifiers (peers, games, rounds)
//! - `Hash256` commitments
//! - `DiceTriple` rolls
//! - `Chips` token amounts (smallest currency unit, checked arithmetic)
//!
//! Everything here is a plain value type: rounds never share mutable
//! state, so unrelated rounds can be computed in parallel with zero
//! coordination.

pub mod constants;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use constants::{COMMITMENT_SIZE, SEED_NONCE_SIZE};

/// Peer identifier - 32 bytes for Ed25519 public key compatibility
pub type PeerId = [u8; 32];

/// Game identifier - 16 bytes UUID
pub type GameId = [u8; 16];

/// Round identifier within a game
pub type RoundId = u64;

/// SHA-256 digest, used for seed commitments
pub type Hash256 = [u8; 32];

/// Helper function to create a new GameId using cryptographic randomness
pub fn new_game_id() -> GameId {
    let mut game_id = [0u8; 16];
    use rand::RngCore;
    let mut rng = rand::thread_rng();
    rng.fill_bytes(&mut game_id);
    game_id
}

/// Token amount in the smallest currency unit (like satoshis)
///
/// No floating-point currency value ever crosses an engine boundary;
/// all money math is integer with floor division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chips {
    amount: u64,
}

impl Chips {
    pub fn new(amount: u64) -> Result<Self> {
        if amount == 0 {
            return Err(Error::InvalidBet("Chip amount cannot be zero".to_string()));
        }
        Ok(Self { amount })
    }

    /// Create chips without validation (for internal use)
    pub fn new_unchecked(amount: u64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Add chips with overflow checking
    pub fn checked_add(&self, other: Chips) -> Result<Chips> {
        self.amount
            .checked_add(other.amount)
            .map(|amount| Chips { amount })
            .ok_or_else(|| Error::ArithmeticOverflow("Chip addition overflow".to_string()))
    }

    /// Subtract chips with underflow checking
    pub fn checked_sub(&self, other: Chips) -> Result<Chips> {
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Chips { amount })
            .ok_or_else(|| Error::ArithmeticOverflow("Chip subtraction underflow".to_string()))
    }
}

impl std::fmt::Display for Chips {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount)
    }
}

/// Three dice as produced by derivation, each 1-6
///
/// Order is preserved as derived for audit and display. Rule resolution
/// sorts an internal copy; the stored order never affects the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTriple {
    pub die1: u8,
    pub die2: u8,
    pub die3: u8,
}

impl DiceTriple {
    pub fn new(die1: u8, die2: u8, die3: u8) -> Result<Self> {
        for (name, value) in [("die1", die1), ("die2", die2), ("die3", die3)] {
            if !(1..=6).contains(&value) {
                return Err(Error::InvalidRoll(format!(
                    "Invalid {} value: {}, must be 1-6",
                    name, value
                )));
            }
        }
        Ok(Self { die1, die2, die3 })
    }

    /// Create a triple without validation (for internal use)
    pub fn new_unchecked(die1: u8, die2: u8, die3: u8) -> Self {
        Self { die1, die2, die3 }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.die1, self.die2, self.die3]
    }

    /// Sorted copy used by rule resolution
    pub fn sorted(&self) -> [u8; 3] {
        let mut dice = self.as_array();
        dice.sort_unstable();
        dice
    }

    /// All three dice show the same face
    pub fn is_triple(&self) -> bool {
        self.die1 == self.die2 && self.die2 == self.die3
    }

    /// All dice within 1-6
    pub fn is_valid(&self) -> bool {
        self.as_array().iter().all(|d| (1..=6).contains(d))
    }
}

impl std::fmt::Display for DiceTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.die1, self.die2, self.die3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_triple_validation() {
        assert!(DiceTriple::new(1, 2, 3).is_ok());
        assert!(DiceTriple::new(6, 6, 6).is_ok());
        assert!(DiceTriple::new(0, 2, 3).is_err());
        assert!(DiceTriple::new(1, 7, 3).is_err());
        assert!(DiceTriple::new(1, 2, 255).is_err());
    }

    #[test]
    fn test_dice_triple_sorted_preserves_original_order() {
        let dice = DiceTriple::new(5, 2, 4).unwrap();
        assert_eq!(dice.sorted(), [2, 4, 5]);
        // Stored order is untouched
        assert_eq!(dice.as_array(), [5, 2, 4]);
    }

    #[test]
    fn test_dice_triple_is_triple() {
        assert!(DiceTriple::new_unchecked(4, 4, 4).is_triple());
        assert!(!DiceTriple::new_unchecked(4, 4, 5).is_triple());
    }

    #[test]
    fn test_chips_checked_arithmetic() {
        let a = Chips::new_unchecked(100);
        let b = Chips::new_unchecked(50);
        assert_eq!(a.checked_add(b).unwrap().amount(), 150);
        assert_eq!(a.checked_sub(b).unwrap().amount(), 50);
        assert!(b.checked_sub(a).is_err());
        assert!(Chips::new_unchecked(u64::MAX).checked_add(a).is_err());
    }

    #[test]
    fn test_chips_rejects_zero() {
        assert!(Chips::new(0).is_err());
        assert!(Chips::new(1).is_ok());
    }

    #[test]
    fn test_game_ids_are_unique() {
        assert_ne!(new_game_id(), new_game_id());
    }
}
