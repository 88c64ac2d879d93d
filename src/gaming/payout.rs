//! Settlement math for terminal round outcomes
//!
//! Converts a stake and a win/lose decision into a payout and a house
//! profit delta under a configured house edge. All money math is integer
//! with floor division; the `f64` edge from configuration is converted to
//! parts-per-million exactly once, at validation time, and never touches
//! a currency value afterwards.
//!
//! Rounding direction is floor, so the realized edge is never below the
//! nominal edge. A winning payout at edge `e` is
//! `stake + floor(stake * (1/e - 1))`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::protocol::Chips;

use super::rules::Outcome;

/// Parts-per-million scale for the fixed-point edge
const EDGE_SCALE: u64 = 1_000_000;

/// Validated house edge, stored as parts-per-million
///
/// Construction fails fast on any edge outside the open interval (0, 1);
/// the engine never clamps a bad edge into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseEdge {
    ppm: u64,
}

impl HouseEdge {
    /// Validate and convert a fractional edge (e.g. 0.03 for 3%)
    pub fn from_fraction(edge: f64) -> Result<Self> {
        if !edge.is_finite() || edge <= 0.0 || edge >= 1.0 {
            return Err(Error::InvalidConfiguration(format!(
                "House edge must be in (0, 1), got {}",
                edge
            )));
        }
        let ppm = (edge * EDGE_SCALE as f64).round() as u64;
        if ppm == 0 || ppm >= EDGE_SCALE {
            return Err(Error::InvalidConfiguration(format!(
                "House edge {} is outside ppm resolution",
                edge
            )));
        }
        Ok(Self { ppm })
    }

    pub fn ppm(&self) -> u64 {
        self.ppm
    }

    pub fn as_fraction(&self) -> f64 {
        self.ppm as f64 / EDGE_SCALE as f64
    }
}

/// Monetary result of one settled round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Amount returned to the player, smallest unit; zero on a loss
    pub payout: Chips,
    /// Player-perspective profit delta; the house books the negation
    pub profit: i128,
}

/// Settle a terminal round against the house
///
/// `won` is the caller's reduction of the outcome to win/lose; Point and
/// Reroll never reach settlement. On a win `payout = stake + profit`; on
/// a loss `payout = 0` and the stake is the house's profit.
pub fn settle(stake: Chips, won: bool, edge: HouseEdge) -> Result<Settlement> {
    if stake.is_zero() {
        return Err(Error::InvalidBet("Stake cannot be zero".to_string()));
    }

    if !won {
        let settlement = Settlement {
            payout: Chips::new_unchecked(0),
            profit: -(stake.amount() as i128),
        };
        tracing::debug!(stake = stake.amount(), "round settled against player");
        return Ok(settlement);
    }

    // profit = floor(stake * (1/e - 1)) computed in ppm fixed point:
    // floor(stake * (EDGE_SCALE - ppm) / ppm)
    let numerator = stake.amount() as u128 * (EDGE_SCALE - edge.ppm()) as u128;
    let profit = numerator / edge.ppm() as u128;

    let payout = (stake.amount() as u128)
        .checked_add(profit)
        .filter(|p| *p <= u64::MAX as u128)
        .ok_or_else(|| {
            Error::ArithmeticOverflow(format!(
                "Payout overflow for stake {} at edge {} ppm",
                stake.amount(),
                edge.ppm()
            ))
        })?;

    tracing::debug!(
        stake = stake.amount(),
        payout = payout as u64,
        edge_ppm = edge.ppm(),
        "round settled for player"
    );

    Ok(Settlement {
        payout: Chips::new_unchecked(payout as u64),
        profit: profit as i128,
    })
}

/// Settle with a raw fractional edge, validating it first
///
/// Convenience for callers holding the configured `f64` edge; an edge
/// outside (0, 1) fails before any money math runs.
pub fn settle_fraction(stake: Chips, won: bool, house_edge: f64) -> Result<Settlement> {
    settle(stake, won, HouseEdge::from_fraction(house_edge)?)
}

/// Settle a resolved outcome directly
///
/// Only terminal Win/Lose outcomes are settleable; a Point or Reroll
/// reaching this function is a caller bug.
pub fn settle_outcome(outcome: &Outcome, stake: Chips, edge: HouseEdge) -> Result<Settlement> {
    match outcome {
        Outcome::Win { .. } => settle(stake, true, edge),
        Outcome::Lose => settle(stake, false, edge),
        other => Err(Error::InvalidInput(format!(
            "Outcome {} is not settleable",
            other
        ))),
    }
}
