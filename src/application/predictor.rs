//! Per-item quantity prediction.
//!
//! For a target date the engine builds one feature vector per known item,
//! asks the model for a raw quantity, applies the special-day boost, and
//! rounds. Items are predicted independently and sequentially.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::calendar::{parse_date, CalendarFeatures, SpecialDates};
use crate::domain::forecast::Forecast;
use crate::domain::item::MenuItem;
use crate::domain::schema::FeatureSchema;
use crate::error::{ModelError, Result};
use crate::port::outbound::boost::BoostSource;
use crate::port::outbound::model::Regressor;

/// Round to the nearest integer, ties to even.
///
/// Negative values are kept; no clamping to zero is applied.
#[must_use]
pub fn round_quantity(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Borrowed view over the service context that performs predictions.
pub struct PredictionEngine<'a> {
    schema: &'a FeatureSchema,
    model: &'a dyn Regressor,
    special_dates: &'a SpecialDates,
    boost: &'a dyn BoostSource,
    include_reference_item: bool,
}

impl<'a> PredictionEngine<'a> {
    #[must_use]
    pub fn new(
        schema: &'a FeatureSchema,
        model: &'a dyn Regressor,
        special_dates: &'a SpecialDates,
        boost: &'a dyn BoostSource,
    ) -> Self {
        Self {
            schema,
            model,
            special_dates,
            boost,
            include_reference_item: false,
        }
    }

    /// Also predict the item encoded as the one-hot reference level.
    #[must_use]
    pub const fn with_reference_item(mut self, include: bool) -> Self {
        self.include_reference_item = include;
        self
    }

    /// Items that every forecast will contain.
    pub fn known_items(&self) -> impl Iterator<Item = &'a MenuItem> {
        let schema = self.schema;
        let reference = self
            .include_reference_item
            .then(|| schema.reference_item());
        reference.into_iter().chain(schema.items())
    }

    /// Parse `date` and predict every known item.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not a calendar date or the model fails.
    pub fn predict_all(&self, date: &str) -> Result<Forecast> {
        let date = parse_date(date)?;
        self.predict_date(date)
    }

    /// Predict every known item for an already parsed date.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails for any item.
    pub fn predict_date(&self, date: NaiveDate) -> Result<Forecast> {
        let calendar = CalendarFeatures::for_date(date, self.special_dates);
        let boosted = calendar.special.any();

        let mut forecast = Forecast::new();
        for item in self.known_items() {
            let mut quantity = self.raw_with(&calendar, item)?;
            if boosted {
                quantity *= self.boost.multiplier();
            }
            if !quantity.is_finite() {
                return Err(ModelError::NonFinite {
                    item: item.to_string(),
                    value: quantity,
                }
                .into());
            }
            forecast.insert(item.clone(), round_quantity(quantity));
        }

        debug!(
            %date,
            veg_special = calendar.special.veg,
            nonveg_special = calendar.special.nonveg,
            items = forecast.len(),
            "Predicted quantities"
        );
        Ok(forecast)
    }

    /// Unboosted, unrounded model output for one item on one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails.
    pub fn raw_prediction(&self, date: NaiveDate, item: &MenuItem) -> Result<f64> {
        let calendar = CalendarFeatures::for_date(date, self.special_dates);
        self.raw_with(&calendar, item)
    }

    fn raw_with(&self, calendar: &CalendarFeatures, item: &MenuItem) -> Result<f64> {
        let vector = self
            .schema
            .assemble(calendar, item, calendar.weekday_name(), &[]);
        self.model.predict(&vector)
    }
}
