//! Special-day boost configuration.

use std::sync::Arc;

use serde::Deserialize;

use crate::adapter::outbound::boost::{SeededBoost, UniformBoost};
use crate::port::outbound::boost::BoostSource;

/// Range of the special-day multiplier and optional RNG seed.
#[derive(Debug, Clone, Deserialize)]
pub struct BoostConfig {
    /// Inclusive lower bound (default 1.4).
    #[serde(default = "default_min")]
    pub min: f64,
    /// Exclusive upper bound (default 1.5).
    #[serde(default = "default_max")]
    pub max: f64,
    /// Seed for reproducible draws. Unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_min() -> f64 {
    1.4
}

fn default_max() -> f64 {
    1.5
}

impl BoostConfig {
    /// Build the configured boost source.
    #[must_use]
    pub fn source(&self) -> Arc<dyn BoostSource> {
        let range = self.min..self.max;
        match self.seed {
            Some(seed) => Arc::new(SeededBoost::new(range, seed)),
            None => Arc::new(UniformBoost::new(range)),
        }
    }
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            seed: None,
        }
    }
}
