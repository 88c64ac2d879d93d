//! Commit-reveal round state machines
//!
//! The session layer owns transport, persistence, and ordering; these
//! types own the fairness-critical part of a round: a recorded
//! commitment, a strict reveal gate, and the derived, resolved result.
//! Each round is a value, so unrelated rounds run in parallel with no
//! coordination.
//!
//! A PVP round applies the same discipline twice: both sides must be
//! committed before either reveal is accepted, and comparison happens
//! only once both sides have revealed.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::crypto::commitment::{SeedCommit, SeedReveal};
use crate::crypto::random;
use crate::error::{Error, Result};
use crate::protocol::{Chips, DiceTriple, Hash256, PeerId, RoundId};

use super::payout::{settle_outcome, HouseEdge, Settlement};
use super::rules::{compare, resolve, Outcome, RoundOrdering};

/// Fully revealed and resolved round, the auditable record of one roll
///
/// Everything needed to re-check the round is here: re-hash the seed
/// against the commitment, re-derive the dice, re-resolve the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_id: RoundId,
    pub player: PeerId,
    pub commitment: Hash256,
    pub seed: Vec<u8>,
    pub dice: DiceTriple,
    pub outcome: Outcome,
}

impl RoundResult {
    /// Replay the full round from its own record
    ///
    /// Anyone holding this record can run the same check; a `true` means
    /// the commitment, seed, dice, and outcome are mutually consistent.
    pub fn verify(&self) -> bool {
        if !crate::crypto::commitment::verify(&self.commitment, &self.seed) {
            return false;
        }
        let dice = random::derive(&self.seed);
        if dice != self.dice {
            return false;
        }
        matches!(resolve(dice), Ok(outcome) if outcome == self.outcome)
    }

    /// Settle this round against the house for the given stake
    pub fn settle(&self, stake: Chips, edge: HouseEdge) -> Result<Settlement> {
        settle_outcome(&self.outcome, stake, edge)
    }
}

/// Single-sided round: one recorded commitment awaiting its reveal
#[derive(Debug, Clone)]
pub struct Round {
    commit: SeedCommit,
}

impl Round {
    /// Open a round from a recorded commitment
    pub fn new(commit: SeedCommit) -> Self {
        Self { commit }
    }

    pub fn round_id(&self) -> RoundId {
        self.commit.round_id
    }

    pub fn commitment(&self) -> &Hash256 {
        &self.commit.commitment
    }

    /// Accept the reveal, derive and resolve the roll
    ///
    /// A mismatched seed surfaces as `CommitmentMismatch`. The engine
    /// never retries a reveal on its own; a caller that retries with
    /// different seeds is shopping for an outcome, which is exactly what
    /// the commitment exists to expose.
    pub fn reveal(&self, reveal: &SeedReveal) -> Result<RoundResult> {
        if reveal.seed.is_empty() {
            return Err(Error::InvalidInput("Revealed seed is empty".to_string()));
        }
        self.commit.check_reveal(reveal)?;

        let dice = random::derive(&reveal.seed);
        let outcome = resolve(dice)?;

        tracing::debug!(
            round_id = self.commit.round_id,
            dice = %dice,
            outcome = %outcome,
            "round revealed"
        );

        Ok(RoundResult {
            round_id: self.commit.round_id,
            player: self.commit.player,
            commitment: self.commit.commitment,
            seed: reveal.seed.clone(),
            dice,
            outcome,
        })
    }
}

/// Outcome of a resolved PVP round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvpResult {
    pub round_id: RoundId,
    pub a: RoundResult,
    pub b: RoundResult,
    pub ordering: RoundOrdering,
}

impl PvpResult {
    /// Both sides rolled no hand; the round must be redone, not scored
    pub fn needs_redo(&self) -> bool {
        self.a.outcome == Outcome::Reroll && self.b.outcome == Outcome::Reroll
    }
}

#[derive(Debug, Clone)]
enum SideState {
    Committed(SeedCommit),
    Revealed(RoundResult),
}

/// Two-sided commit-reveal round
///
/// Both commitments must be registered at construction, before either
/// side's reveal is accepted; that is the ordering the fairness argument
/// rests on. The comparator runs only after both reveals.
#[derive(Debug, Clone)]
pub struct PvpRound {
    round_id: RoundId,
    a: SideState,
    b: SideState,
}

impl PvpRound {
    pub fn new(commit_a: SeedCommit, commit_b: SeedCommit) -> Result<Self> {
        if commit_a.round_id != commit_b.round_id {
            return Err(Error::InvalidInput(format!(
                "Commitments are for different rounds: {} vs {}",
                commit_a.round_id, commit_b.round_id
            )));
        }
        if commit_a.player == commit_b.player {
            return Err(Error::InvalidInput(
                "PVP round requires two distinct players".to_string(),
            ));
        }
        Ok(Self {
            round_id: commit_a.round_id,
            a: SideState::Committed(commit_a),
            b: SideState::Committed(commit_b),
        })
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Accept one side's reveal, matched to its player id
    pub fn reveal(&mut self, reveal: &SeedReveal) -> Result<()> {
        let side = if self.player_of(&self.a) == reveal.player {
            &mut self.a
        } else if self.player_of(&self.b) == reveal.player {
            &mut self.b
        } else {
            return Err(Error::InvalidInput(
                "Reveal from a player not in this round".to_string(),
            ));
        };

        match side {
            SideState::Revealed(_) => Err(Error::InvalidState(
                "Side has already revealed".to_string(),
            )),
            SideState::Committed(commit) => {
                let result = Round::new(commit.clone()).reveal(reveal)?;
                *side = SideState::Revealed(result);
                Ok(())
            }
        }
    }

    /// Compare both outcomes once both sides have revealed
    pub fn resolve(&self) -> Result<PvpResult> {
        let (a, b) = match (&self.a, &self.b) {
            (SideState::Revealed(a), SideState::Revealed(b)) => (a.clone(), b.clone()),
            _ => {
                return Err(Error::InvalidState(
                    "Both sides must reveal before the round resolves".to_string(),
                ))
            }
        };

        let ordering = compare(&a.outcome, &b.outcome);

        tracing::debug!(
            round_id = self.round_id,
            outcome_a = %a.outcome,
            outcome_b = %b.outcome,
            ?ordering,
            "pvp round resolved"
        );

        Ok(PvpResult {
            round_id: self.round_id,
            a,
            b,
            ordering,
        })
    }

    fn player_of(&self, side: &SideState) -> PeerId {
        match side {
            SideState::Committed(commit) => commit.player,
            SideState::Revealed(result) => result.player,
        }
    }
}

/// Validate a stake against the configured table limits
pub fn validate_stake(stake: Chips, config: &GameConfig) -> Result<()> {
    if stake.amount() < config.min_bet {
        return Err(Error::InvalidBet(format!(
            "Stake {} below minimum {}",
            stake.amount(),
            config.min_bet
        )));
    }
    if stake.amount() > config.max_bet {
        return Err(Error::InvalidBet(format!(
            "Stake {} exceeds maximum {}",
            stake.amount(),
            config.max_bet
        )));
    }
    Ok(())
}
