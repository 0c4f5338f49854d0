//! Historical sales records.

use chrono::NaiveDate;

use super::item::MenuItem;

/// Outcome columns of a historical record; never used as predictors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quantities {
    pub made: f64,
    pub sold: f64,
    pub surplus: f64,
}

/// One row of the historical dataset: a (date, item) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    /// Weekday name as written in the dataset.
    pub day: String,
    pub item: MenuItem,
    pub establishment_id: String,
    pub quantities: Quantities,
    /// Values of the dataset's passthrough columns, aligned with
    /// [`HistoricalDataset::passthrough_columns`].
    pub passthrough: Vec<f64>,
}

/// The full historical dataset as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalDataset {
    /// Names of extra numeric columns, in file order.
    pub passthrough_columns: Vec<String>,
    pub records: Vec<SalesRecord>,
}

impl HistoricalDataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
