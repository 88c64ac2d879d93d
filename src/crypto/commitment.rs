//! Commit-reveal scheme for fair dice rolls
//!
//! A round cannot be biased after the fact: the committing side publishes
//! `SHA256(seed)` before the round runs, then reveals the seed. Verifying
//! the reveal against the recorded commitment is the only proof that the
//! seed was not chosen to force an outcome.
//!
//! The engine does not enforce temporal ordering between commit and reveal
//! (that is the session layer's job); it enforces that verification is
//! strict, so ordering violations are at least detectable when timestamps
//! are compared externally.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::protocol::constants::SEED_NONCE_SIZE;
use crate::protocol::{Hash256, PeerId, RoundId};

/// Compute the one-way commitment to a seed
pub fn commit(seed: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.finalize().into()
}

/// Verify a revealed seed against a recorded commitment
///
/// Fails closed: any non-match is an invalid reveal, never "close enough".
/// The comparison is constant-time; seeds are public once revealed, so
/// this costs nothing and removes timing questions from audits.
pub fn verify(commitment: &Hash256, seed: &[u8]) -> bool {
    constant_time_eq::constant_time_eq_32(commitment, &commit(seed))
}

/// Seed commitment for a round
///
/// Recorded by the session layer before the seed is final. The timestamp
/// is carried for external ordering audits only; the engine never
/// branches on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCommit {
    pub player: PeerId,
    pub round_id: RoundId,
    pub commitment: Hash256,
    pub timestamp: u64,
}

/// Seed reveal for a round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReveal {
    pub player: PeerId,
    pub round_id: RoundId,
    pub seed: Vec<u8>,
    pub timestamp: u64,
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

impl SeedCommit {
    /// Create a new seed commitment
    pub fn new(player: PeerId, round_id: RoundId, seed: &[u8]) -> Self {
        Self {
            player,
            round_id,
            commitment: commit(seed),
            timestamp: unix_now(),
        }
    }

    /// Record a commitment received from a peer
    pub fn from_commitment(player: PeerId, round_id: RoundId, commitment: Hash256) -> Self {
        Self {
            player,
            round_id,
            commitment,
            timestamp: unix_now(),
        }
    }

    /// Verify a reveal against this commitment
    pub fn verify_reveal(&self, reveal: &SeedReveal) -> bool {
        if self.player != reveal.player || self.round_id != reveal.round_id {
            return false;
        }
        verify(&self.commitment, &reveal.seed)
    }

    /// Strict form of [`verify_reveal`](Self::verify_reveal)
    pub fn check_reveal(&self, reveal: &SeedReveal) -> Result<()> {
        if self.verify_reveal(reveal) {
            Ok(())
        } else {
            Err(Error::CommitmentMismatch {
                round_id: self.round_id,
            })
        }
    }
}

impl SeedReveal {
    pub fn new(player: PeerId, round_id: RoundId, seed: Vec<u8>) -> Self {
        Self {
            player,
            round_id,
            seed,
            timestamp: unix_now(),
        }
    }
}

/// Server-side seed held between commit and reveal
///
/// Generated with OS entropy, committed at creation, and zeroized when
/// dropped without being revealed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PendingSeed {
    seed: [u8; SEED_NONCE_SIZE],
}

impl PendingSeed {
    /// Generate a fresh seed from OS entropy
    pub fn generate() -> Self {
        let mut seed = [0u8; SEED_NONCE_SIZE];
        getrandom::getrandom(&mut seed).expect("Failed to generate random bytes");
        Self { seed }
    }

    /// The commitment to publish before the round runs
    pub fn commitment(&self) -> Hash256 {
        commit(&self.seed)
    }

    /// Consume the pending seed into a reveal record
    pub fn into_reveal(self, player: PeerId, round_id: RoundId) -> SeedReveal {
        let seed = self.seed;
        SeedReveal::new(player, round_id, seed.to_vec())
    }

    /// Consume the pending seed, returning the raw bytes
    pub fn into_seed(self) -> [u8; SEED_NONCE_SIZE] {
        self.seed
    }
}
