//! Linear regression artifact.

use serde::Deserialize;

use super::check_features;
use crate::domain::schema::FeatureVector;
use crate::error::{ModelError, Result};
use crate::port::outbound::model::Regressor;

/// `intercept + Σ coefficient[i] * x[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearModel {
    pub(super) fn validate(&self) -> Result<()> {
        if self.features.len() != self.coefficients.len() {
            return Err(ModelError::Invalid(format!(
                "linear model has {} features but {} coefficients",
                self.features.len(),
                self.coefficients.len()
            ))
            .into());
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Invalid("linear model has non-finite weights".into()).into());
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn feature_names(&self) -> Option<&[String]> {
        Some(&self.features)
    }

    fn predict(&self, features: &FeatureVector<'_>) -> Result<f64> {
        check_features(&self.features, features)?;
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.values())
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }
}
