//! Random boost sources.

use std::ops::Range;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::port::outbound::boost::BoostSource;

/// Uniform draw from `[min, max)` using the thread-local RNG.
#[derive(Debug, Clone)]
pub struct UniformBoost {
    range: Range<f64>,
}

impl UniformBoost {
    /// Create a source drawing from `range`.
    ///
    /// The range must be non-empty; configuration validation enforces this.
    #[must_use]
    pub fn new(range: Range<f64>) -> Self {
        Self { range }
    }
}

impl BoostSource for UniformBoost {
    fn multiplier(&self) -> f64 {
        rand::thread_rng().gen_range(self.range.clone())
    }
}

/// Uniform draw from `[min, max)` using a seeded RNG.
///
/// Draws are serialized behind a mutex, so a given seed reproduces the same
/// sequence of multipliers across runs.
#[derive(Debug)]
pub struct SeededBoost {
    range: Range<f64>,
    rng: Mutex<StdRng>,
}

impl SeededBoost {
    #[must_use]
    pub fn new(range: Range<f64>, seed: u64) -> Self {
        Self {
            range,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl BoostSource for SeededBoost {
    fn multiplier(&self) -> f64 {
        self.rng.lock().gen_range(self.range.clone())
    }
}
