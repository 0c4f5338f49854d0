//! Model artifact adapters.
//!
//! Artifacts are JSON documents tagged by `kind`:
//!
//! - `linear` - [`LinearModel`], intercept plus one coefficient per feature
//! - `forest` - [`ForestModel`], mean of regression trees
//!
//! Both record the feature names they were fitted on and refuse to predict
//! on a vector whose columns differ by name or order.

mod forest;
mod linear;

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

pub use forest::{ForestModel, Node, Split, Tree};
pub use linear::LinearModel;

use crate::domain::schema::FeatureVector;
use crate::error::{ModelError, Result};
use crate::port::outbound::model::Regressor;

/// Serialized model artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    Linear(LinearModel),
    Forest(ForestModel),
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the artifact is
    /// structurally invalid.
    pub fn from_json(content: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(content).map_err(ModelError::Parse)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Linear(model) => model.validate(),
            Self::Forest(model) => model.validate(),
        }
    }

    /// Convert into a shareable [`Regressor`].
    #[must_use]
    pub fn into_regressor(self) -> Arc<dyn Regressor> {
        match self {
            Self::Linear(model) => Arc::new(model),
            Self::Forest(model) => Arc::new(model),
        }
    }
}

/// Load a model artifact from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_model(path: impl AsRef<Path>) -> Result<Arc<dyn Regressor>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(ModelArtifact::from_json(&content)?.into_regressor())
}

/// Check that `features` has exactly the columns in `expected`, in order.
fn check_features(expected: &[String], features: &FeatureVector<'_>) -> Result<()> {
    let actual = features.values().len();
    if expected.len() != actual {
        return Err(ModelError::FeatureCount {
            expected: expected.len(),
            actual,
        }
        .into());
    }
    for (position, (want, got)) in expected.iter().zip(features.names()).enumerate() {
        if want != got {
            return Err(ModelError::FeatureName {
                position,
                expected: want.clone(),
                actual: got.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::calendar::{CalendarFeatures, SpecialDates};
    use crate::domain::item::MenuItem;
    use crate::domain::schema::FeatureSchema;
    use crate::error::Error;

    fn schema() -> FeatureSchema {
        let items: BTreeSet<MenuItem> = ["Biryani", "Idli"].into_iter().map(MenuItem::from).collect();
        let weekdays: BTreeSet<String> = ["Friday".to_string(), "Monday".to_string()].into();
        FeatureSchema::new(vec![], &items, &weekdays).unwrap()
    }

    fn vector(schema: &FeatureSchema) -> FeatureVector<'_> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let calendar = CalendarFeatures::for_date(date, &SpecialDates::default());
        schema.assemble(&calendar, &MenuItem::new("Idli"), calendar.weekday_name(), &[])
    }

    #[test]
    fn parses_tagged_linear_artifact() {
        let json = r#"{
            "kind": "linear",
            "features": ["day_of_week", "veg_special", "nonveg_special", "item_name_Idli", "day_Monday"],
            "coefficients": [1.0, 10.0, 20.0, 5.0, 3.0],
            "intercept": 2.0
        }"#;

        let schema = schema();
        let model = ModelArtifact::from_json(json).unwrap().into_regressor();
        assert_eq!(model.name(), "linear");
        // Monday: day_of_week 0, Idli 1, day_Monday 1
        assert_eq!(model.predict(&vector(&schema)).unwrap(), 10.0);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = ModelArtifact::from_json(r#"{"kind": "svm"}"#).unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::Parse(_))));
    }

    #[test]
    fn mismatched_feature_order_is_rejected() {
        let json = r#"{
            "kind": "linear",
            "features": ["veg_special", "day_of_week", "nonveg_special", "item_name_Idli", "day_Monday"],
            "coefficients": [0.0, 0.0, 0.0, 0.0, 0.0],
            "intercept": 0.0
        }"#;

        let schema = schema();
        let model = ModelArtifact::from_json(json).unwrap().into_regressor();
        match model.predict(&vector(&schema)) {
            Err(Error::Model(ModelError::FeatureName { position, expected, actual })) => {
                assert_eq!(position, 0);
                assert_eq!(expected, "veg_special");
                assert_eq!(actual, "day_of_week");
            }
            other => panic!("expected feature mismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_artifact_file_fails_to_read() {
        let err = load_model("/nonexistent/model.json").err().unwrap();
        assert!(matches!(err, Error::Model(ModelError::ReadFile { .. })));
    }
}
