//! Feature table construction.
//!
//! Runs once at startup. Encodes every historical record against a schema
//! derived from the same records; the schema is then frozen and reused for
//! every inference request.

use std::collections::BTreeSet;

use tracing::info;

use crate::domain::calendar::{CalendarFeatures, SpecialDates};
use crate::domain::item::MenuItem;
use crate::domain::record::HistoricalDataset;
use crate::domain::schema::FeatureSchema;
use crate::domain::table::{FeatureRow, FeatureTable};
use crate::error::{DatasetError, Result};

/// Builds the canonical schema and the historical feature table.
pub struct FeatureTableBuilder<'a> {
    special_dates: &'a SpecialDates,
}

impl<'a> FeatureTableBuilder<'a> {
    #[must_use]
    pub const fn new(special_dates: &'a SpecialDates) -> Self {
        Self { special_dates }
    }

    /// Derive the schema from `dataset` and encode each record.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty or a categorical column has
    /// no values.
    pub fn build(&self, dataset: &HistoricalDataset) -> Result<FeatureTable> {
        if dataset.is_empty() {
            return Err(DatasetError::Empty.into());
        }

        let items: BTreeSet<MenuItem> = dataset.records.iter().map(|r| r.item.clone()).collect();
        let weekdays: BTreeSet<String> = dataset.records.iter().map(|r| r.day.clone()).collect();
        let schema = FeatureSchema::new(dataset.passthrough_columns.clone(), &items, &weekdays)?;

        let rows = dataset
            .records
            .iter()
            .map(|record| {
                let calendar = CalendarFeatures::for_date(record.date, self.special_dates);
                let vector =
                    schema.assemble(&calendar, &record.item, &record.day, &record.passthrough);
                FeatureRow {
                    values: vector.into_values(),
                    quantities: record.quantities,
                }
            })
            .collect();

        info!(
            rows = dataset.len(),
            columns = schema.len(),
            items = items.len(),
            reference_item = %schema.reference_item(),
            "Built feature table"
        );

        Ok(FeatureTable::new(schema, rows))
    }
}
