//! Process-wide, read-only service context.
//!
//! Built once at startup and shared behind an `Arc` by every request. Nothing
//! in here is mutated after construction.

use std::sync::Arc;

use crate::domain::calendar::SpecialDates;
use crate::domain::forecast::Forecast;
use crate::domain::schema::FeatureSchema;
use crate::domain::table::FeatureTable;
use crate::error::Result;
use crate::port::outbound::boost::BoostSource;
use crate::port::outbound::model::Regressor;

use super::predictor::PredictionEngine;

/// Everything a prediction needs: the feature table, the model, the special
/// dates and the boost source.
pub struct ServiceContext {
    table: FeatureTable,
    model: Arc<dyn Regressor>,
    special_dates: SpecialDates,
    boost: Arc<dyn BoostSource>,
    include_reference_item: bool,
}

impl ServiceContext {
    #[must_use]
    pub fn new(
        table: FeatureTable,
        model: Arc<dyn Regressor>,
        special_dates: SpecialDates,
        boost: Arc<dyn BoostSource>,
    ) -> Self {
        Self {
            table,
            model,
            special_dates,
            boost,
            include_reference_item: false,
        }
    }

    /// Also predict the one-hot reference item.
    #[must_use]
    pub fn with_reference_item(mut self, include: bool) -> Self {
        self.include_reference_item = include;
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &FeatureSchema {
        self.table.schema()
    }

    #[must_use]
    pub const fn table(&self) -> &FeatureTable {
        &self.table
    }

    #[must_use]
    pub fn model(&self) -> &dyn Regressor {
        self.model.as_ref()
    }

    #[must_use]
    pub const fn special_dates(&self) -> &SpecialDates {
        &self.special_dates
    }

    /// Borrow a prediction engine over this context.
    #[must_use]
    pub fn engine(&self) -> PredictionEngine<'_> {
        PredictionEngine::new(
            self.table.schema(),
            self.model.as_ref(),
            &self.special_dates,
            self.boost.as_ref(),
        )
        .with_reference_item(self.include_reference_item)
    }

    /// Predict every known item for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` cannot be parsed or the model fails.
    pub fn predict_all(&self, date: &str) -> Result<Forecast> {
        self.engine().predict_all(date)
    }

    /// Describe how the model's declared features differ from the schema.
    ///
    /// Returns `None` when they agree or the model declares no features.
    #[must_use]
    pub fn schema_mismatch(&self) -> Option<String> {
        let declared = self.model.feature_names()?;
        let schema = self.schema();
        if declared.len() != schema.len() {
            return Some(format!(
                "model declares {} features, schema has {}",
                declared.len(),
                schema.len()
            ));
        }
        declared
            .iter()
            .zip(schema.names())
            .position(|(want, got)| want != got)
            .map(|position| {
                format!(
                    "feature {position}: model declares '{}', schema has '{}'",
                    declared[position],
                    schema.columns()[position].name()
                )
            })
    }
}
