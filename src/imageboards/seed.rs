//! Seeds for the board's `random:<seed>` sort field.
//!
//! Every search asks the board for a fresh random ordering. Where the seed comes from is
//! pluggable so tests and reproducible runs can pin it.
use rand::Rng;

/// Source of the seed sent with every search.
pub trait SeedSource: Send + Sync {
    /// Returns a uniformly distributed seed in `0..=u32::MAX`.
    fn next_seed(&self) -> u32;
}

/// Draws seeds from the thread-local RNG. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSeed;

impl SeedSource for ThreadRngSeed {
    fn next_seed(&self) -> u32 {
        rand::thread_rng().gen()
    }
}

/// Always returns the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&self) -> u32 {
        self.0
    }
}
