//! Trivial regressors.

use crate::domain::schema::FeatureVector;
use crate::error::{ModelError, Result};
use crate::port::outbound::model::Regressor;

/// Returns the same value for every input.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRegressor(pub f64);

impl Regressor for ConstantRegressor {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn predict(&self, _features: &FeatureVector<'_>) -> Result<f64> {
        Ok(self.0)
    }
}

/// Fails every prediction.
#[derive(Debug, Clone, Copy)]
pub struct FailingRegressor;

impl Regressor for FailingRegressor {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn predict(&self, _features: &FeatureVector<'_>) -> Result<f64> {
        Err(ModelError::Invalid("model is unavailable".into()).into())
    }
}
