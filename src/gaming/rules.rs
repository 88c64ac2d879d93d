//! Cee-Lo hand classification and head-to-head comparison
//!
//! Resolution walks an ordered chain of predicates over a sorted copy of
//! the dice, first match wins:
//!
//! 1. 4-5-6 (any order) - instant win, beats all triples
//! 2. Triple v-v-v - win, stronger triples beat weaker
//! 3. 1-2-3 (any order) - instant loss
//! 4. Pair plus an odd die of 2-5 - point, the number to beat
//! 5. Anything else - no hand, reroll
//!
//! The order of the chain and the numeric rank bands must stay exactly as
//! written: head-to-head comparison relies on the bands being disjoint and
//! monotonic with hand strength.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::protocol::constants::{
    RANK_LOSE, RANK_POINT_BASE, RANK_REROLL, RANK_SWEEP, RANK_TRIPLE_BASE,
};
use crate::protocol::DiceTriple;

/// Classified result of a single Cee-Lo roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 4-5-6 or a triple. `triple_value` is `None` for 4-5-6.
    Win { rank: i16, triple_value: Option<u8> },
    /// 1-2-3
    Lose,
    /// Pair with an odd die of 2-5: `point` is the number to beat
    Point { point: u8 },
    /// No scoreable hand; the round must be rolled again
    Reroll,
}

impl Outcome {
    /// Numeric rank used for head-to-head comparison
    ///
    /// Reroll carries the lowest sentinel rank, Lose the next-lowest.
    pub fn rank(&self) -> i16 {
        match self {
            Outcome::Win { rank, .. } => *rank,
            Outcome::Lose => RANK_LOSE,
            Outcome::Point { point } => RANK_POINT_BASE + *point as i16,
            Outcome::Reroll => RANK_REROLL,
        }
    }

    /// Terminal win/lose outcomes are the only ones settlement accepts
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win { .. } | Outcome::Lose)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win {
                triple_value: Some(v),
                ..
            } => write!(f, "win (triple {})", v),
            Outcome::Win { .. } => write!(f, "win (4-5-6)"),
            Outcome::Lose => write!(f, "lose (1-2-3)"),
            Outcome::Point { point } => write!(f, "point {}", point),
            Outcome::Reroll => write!(f, "reroll"),
        }
    }
}

/// Result of comparing two resolved outcomes in a PVP round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOrdering {
    AWins,
    BWins,
    Tie,
}

/// Classify a triple of dice into its Cee-Lo outcome
///
/// Dice outside 1-6 are a programming error in the caller: the engine's
/// own derivation never produces them, so they fail loudly instead of
/// being coerced.
pub fn resolve(dice: DiceTriple) -> Result<Outcome> {
    if !dice.is_valid() {
        return Err(Error::InvalidRoll(format!(
            "Dice out of range: {:?}",
            dice.as_array()
        )));
    }

    let sorted = dice.sorted();

    // 1. 4-5-6 as a set
    if sorted == [4, 5, 6] {
        return Ok(Outcome::Win {
            rank: RANK_SWEEP,
            triple_value: None,
        });
    }

    // 2. Triple
    if sorted[0] == sorted[2] {
        return Ok(Outcome::Win {
            rank: RANK_TRIPLE_BASE + sorted[0] as i16,
            triple_value: Some(sorted[0]),
        });
    }

    // 3. 1-2-3 as a set
    if sorted == [1, 2, 3] {
        return Ok(Outcome::Lose);
    }

    // 4. Pair with a playable odd die. After sorting, a pair leaves the
    // odd die at either end.
    if sorted[0] == sorted[1] || sorted[1] == sorted[2] {
        let point = if sorted[0] == sorted[1] {
            sorted[2]
        } else {
            sorted[0]
        };
        if (2..=5).contains(&point) {
            return Ok(Outcome::Point { point });
        }
        // Odd die of 1 or 6 is not a playable point; falls through
    }

    // 5. No hand
    Ok(Outcome::Reroll)
}

/// Compare two resolved outcomes
///
/// This is intentionally not a bare numeric comparison: Reroll's sentinel
/// rank must never be weighed against Lose's rank as an ordinary number.
/// The category rules below collapse Reroll-vs-Reroll and Lose-vs-Lose to
/// ties before any ranks are read; tests pin that the numeric shortcut
/// would agree for every category pairing.
pub fn compare(a: &Outcome, b: &Outcome) -> RoundOrdering {
    match (a, b) {
        // Neither side has a qualifying hand; the round is redone, not scored
        (Outcome::Reroll, Outcome::Reroll) => RoundOrdering::Tie,
        // A Reroll is never compared by rank; it loses to a Lose or better
        (Outcome::Reroll, _) => RoundOrdering::BWins,
        (_, Outcome::Reroll) => RoundOrdering::AWins,
        (Outcome::Lose, Outcome::Lose) => RoundOrdering::Tie,
        (Outcome::Lose, _) => RoundOrdering::BWins,
        (_, Outcome::Lose) => RoundOrdering::AWins,
        _ => match a.rank().cmp(&b.rank()) {
            std::cmp::Ordering::Greater => RoundOrdering::AWins,
            std::cmp::Ordering::Less => RoundOrdering::BWins,
            std::cmp::Ordering::Equal => RoundOrdering::Tie,
        },
    }
}
