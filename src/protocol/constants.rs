// src/protocol/constants.rs
pub const PROTOCOL_VERSION: u8 = 1;

// Commitment scheme sizes
pub const COMMITMENT_SIZE: usize = 32; // SHA-256 hash size
pub const SEED_NONCE_SIZE: usize = 32;

// Gaming constants
pub const MIN_BET_AMOUNT: u64 = 1;
pub const MAX_BET_AMOUNT: u64 = 1_000_000_000;
pub const DEFAULT_HOUSE_EDGE: f64 = 0.03;

// Outcome rank bands. Downstream comparison relies on these bands being
// disjoint and monotonic with hand strength.
pub const RANK_SWEEP: i16 = 1000; // 4-5-6, beats everything
pub const RANK_TRIPLE_BASE: i16 = 900; // triple v ranks 900 + v
pub const RANK_POINT_BASE: i16 = 100; // point p ranks 100 + p
pub const RANK_LOSE: i16 = 0; // 1-2-3
pub const RANK_REROLL: i16 = -1; // sentinel, never rank-compared
