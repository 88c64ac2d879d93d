//! crypto module

pub mod commitment;
pub mod random;

// Re-export commonly used types
pub use commitment::{commit, verify, PendingSeed, SeedCommit, SeedReveal};
pub use random::{derive, derive_indexed, DeterministicRng};
