// Copyright @yucwang 2026

use crate::math::constants::Float;

use std::time::{SystemTime, UNIX_EPOCH};

/// Seedable 64-bit linear congruential generator. A single instance is
/// injected wherever uniform draws are consumed, so tests can fix the seed.
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from the system clock. Successive runs of the binary produce
    /// different sample sets, matching the unseeded reference behavior.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E3779B97F4A7C15);
        Self::new(nanos)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }
}
