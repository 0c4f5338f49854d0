//! Historical feature table: the encoded training matrix.

use super::record::Quantities;
use super::schema::FeatureSchema;

/// One encoded historical record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Predictor values, aligned with the schema columns.
    pub values: Vec<f64>,
    pub quantities: Quantities,
}

/// The historical dataset encoded against its own schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    schema: FeatureSchema,
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    #[must_use]
    pub fn new(schema: FeatureSchema, rows: Vec<FeatureRow>) -> Self {
        Self { schema, rows }
    }

    #[must_use]
    pub const fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[must_use]
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
