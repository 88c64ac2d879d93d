//! Deterministic dice derivation
//!
//! Maps a revealed seed to three die values so that every party can
//! reproduce the roll from the seed alone: same seed, same triple, on
//! every platform. All entropy comes from the seed; nothing here reads
//! the clock, process state, or an external RNG.
//!
//! Each die comes from its own non-overlapping 8-byte slice of the
//! SHA-256 digest, reduced `1 + (v mod 6)`. 2^64 is not a multiple of 6,
//! so the reduction carries a residual bias of (2^64 mod 6) / 2^64, about
//! 2e-19 per die. That skew is documented and accepted rather than
//! rejection-sampled away: an auditor re-deriving a roll must land on
//! exactly this formula.

use rand::{Error as RandError, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::protocol::DiceTriple;

/// Domain tag separating dice digests from plain seed commitments
const ROLL_DOMAIN: &[u8] = b"CEELO_ROLL";

fn die_from_slice(slice: &[u8]) -> u8 {
    let mut value = 0u64;
    for (i, byte) in slice.iter().take(8).enumerate() {
        value |= (*byte as u64) << (i * 8);
    }
    ((value % 6) + 1) as u8
}

fn triple_from_digest(digest: &[u8; 32]) -> DiceTriple {
    DiceTriple::new_unchecked(
        die_from_slice(&digest[0..8]),
        die_from_slice(&digest[8..16]),
        die_from_slice(&digest[16..24]),
    )
}

/// Derive the dice triple for a round from its revealed seed
///
/// The digest is domain-tagged so it can never collide with the
/// commitment hash of the same seed: the published commitment must not
/// let observers compute the roll before the reveal.
pub fn derive(seed: &[u8]) -> DiceTriple {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.update(ROLL_DOMAIN);
    let digest: [u8; 32] = hasher.finalize().into();
    triple_from_digest(&digest)
}

/// Derive the dice triple for roll `index` of a reroll chain
///
/// A Cee-Lo round can pass through several rerolls before it produces a
/// scoreable hand; each reroll consumes the next index. The index is
/// hashed in, so `derive_indexed(seed, 0)` intentionally differs from
/// `derive(seed)`: in an audit transcript a chained roll can never be
/// confused with a first roll.
pub fn derive_indexed(seed: &[u8], index: u64) -> DiceTriple {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.update(index.to_le_bytes());
    hasher.update(ROLL_DOMAIN);
    let digest: [u8; 32] = hasher.finalize().into();
    triple_from_digest(&digest)
}

/// Deterministic random number generator for simulations
///
/// Uses ChaCha20 to ensure cryptographic quality while maintaining
/// determinism across platforms. Settled rounds never use this: their
/// dice always come from [`derive`]/[`derive_indexed`] so they stay
/// auditable from the seed alone.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: ChaCha20Rng,
}

impl DeterministicRng {
    /// Create a new deterministic RNG from a seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Generate a random value in range [min, max)
    pub fn gen_range(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }

        let range = max - min;
        let mut value = self.inner.next_u64();

        // Avoid modulo bias
        let threshold = u64::MAX - (u64::MAX % range);
        while value >= threshold {
            value = self.inner.next_u64();
        }

        min + (value % range)
    }

    /// Generate a single die value (1-6)
    pub fn roll_die(&mut self) -> u8 {
        self.gen_range(1, 7) as u8
    }

    /// Generate a full triple
    pub fn roll_triple(&mut self) -> DiceTriple {
        DiceTriple::new_unchecked(self.roll_die(), self.roll_die(), self.roll_die())
    }
}

impl RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.inner.try_fill_bytes(dest)
    }
}
