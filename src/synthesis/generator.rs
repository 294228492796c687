//! Deterministic seed-to-unit-interval generator
//!
//! Not a general purpose RNG: each draw is a pure function of `(seed, offset)`,
//! so the same postal code always yields the same weather.

/// Stateless hash generator keyed by a postal code seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededGenerator {
    seed: u32,
}

impl SeededGenerator {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Value in `[0, 1)` for the given draw offset
    #[must_use]
    pub fn unit(&self, offset: u32) -> f64 {
        let x = ((f64::from(self.seed) + f64::from(offset)) * 12.9898).sin() * 43_758.545_3;
        let fraction = x - x.floor();
        if fraction >= 1.0 { 0.0 } else { fraction }
    }

    /// Uniform value in `[base, base + span)` for the given draw offset
    #[must_use]
    pub fn uniform(&self, offset: u32, base: f64, span: f64) -> f64 {
        base + self.unit(offset) * span
    }
}
