//! Seedable pseudo-random number generator (xorshift64).

use crate::components::color::Rgb;

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, so sessions replay identically under test.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound.max(1) as u64) as u32
    }

    /// Uniform random 24-bit color.
    pub fn next_color(&mut self) -> Rgb {
        Rgb((self.next_u64() >> 40) as u32 & 0xffffff)
    }
}
