//! Regression model port.
//!
//! The model is an opaque, pre-trained predictor. The engine only ever calls
//! [`Regressor::predict`] with a single-row feature vector.

use crate::domain::schema::FeatureVector;
use crate::error::Result;

/// Pre-trained regression model.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`). The model is shared
/// read-only across all concurrent requests, so `predict` must not mutate it.
pub trait Regressor: Send + Sync {
    /// Return the model kind for logging.
    fn name(&self) -> &'static str;

    /// Feature names the model was fitted on, if the artifact records them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Predict a raw quantity for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector does not match the model's features.
    fn predict(&self, features: &FeatureVector<'_>) -> Result<f64>;
}

