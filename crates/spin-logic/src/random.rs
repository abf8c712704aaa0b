//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG used by the collapse step. Seeded once per process
//! run; the same seed replays the same tournament.

use serde::{Deserialize, Serialize};
use crate::error::GameError;

/// Inclusive integer range for the collapse draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct DrawRange {
    low: u32,
    high: u32,
}

impl DrawRange {
    /// 1..=10, the draw used by default
    pub const ONE_TO_TEN: DrawRange = DrawRange { low: 1, high: 10 };
    /// 0..=9, the draw found in the second copy of the game script
    pub const ZERO_TO_NINE: DrawRange = DrawRange { low: 0, high: 9 };

    pub fn new(low: u32, high: u32) -> Result<Self, GameError> {
        if low > high {
            return Err(GameError::InvalidDrawRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Number of values in the range
    fn span(&self) -> u64 {
        (self.high - self.low) as u64 + 1
    }
}

impl TryFrom<(u32, u32)> for DrawRange {
    type Error = GameError;

    fn try_from((low, high): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<DrawRange> for (u32, u32) {
    fn from(range: DrawRange) -> Self {
        (range.low, range.high)
    }
}

impl Default for DrawRange {
    fn default() -> Self {
        Self::ONE_TO_TEN
    }
}

/// Source of uniform integer draws for the collapse step
pub trait RandomSource {
    /// Uniform draw from `range`, bounds included
    fn draw(&mut self, range: DrawRange) -> u32;
}

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed (the form used on the command line)
    pub fn from_u64(seed: u64) -> Self {
        Self::warmed(seed.wrapping_mul(0x517cc1b727220a95) ^ 0x9e3779b97f4a7c15)
    }

    fn warmed(state: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = if state == 0 { 0x9e3779b97f4a7c15 } else { state };
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RandomSource for SeededRng {
    fn draw(&mut self, range: DrawRange) -> u32 {
        let value = range.low + (self.next_u64() % range.span()) as u32;
        log::trace!("draw {} from {}..={}", value, range.low, range.high);
        value
    }
}
