//! Deterministic boost sources.

use parking_lot::Mutex;

use crate::port::outbound::boost::BoostSource;

/// Always returns the same multiplier.
#[derive(Debug, Clone, Copy)]
pub struct FixedBoost(pub f64);

impl BoostSource for FixedBoost {
    fn multiplier(&self) -> f64 {
        self.0
    }
}

/// Wraps another source and records every multiplier it hands out.
pub struct RecordingBoost<B> {
    inner: B,
    drawn: Mutex<Vec<f64>>,
}

impl<B: BoostSource> RecordingBoost<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            drawn: Mutex::new(Vec::new()),
        }
    }

    /// Multipliers drawn so far, in order.
    pub fn drawn(&self) -> Vec<f64> {
        self.drawn.lock().clone()
    }
}

impl<B: BoostSource> BoostSource for RecordingBoost<B> {
    fn multiplier(&self) -> f64 {
        let m = self.inner.multiplier();
        self.drawn.lock().push(m);
        m
    }
}
