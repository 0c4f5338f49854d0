//! Historical dataset port.

use crate::domain::record::HistoricalDataset;
use crate::error::Result;

/// Source of the historical sales dataset.
///
/// Read exactly once at startup; any error is fatal.
pub trait SalesHistory {
    /// Return a human-readable description of the source for logging.
    fn describe(&self) -> String;

    /// Load every record.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or malformed.
    fn load(&self) -> Result<HistoricalDataset>;
}
