//! Core forecasting types: calendar, menu items, schema, records, results.
//!
//! - [`calendar`] - Date parsing, weekday features and the special-date registry
//! - [`item`] - Menu item identifier
//! - [`schema`] - Canonical feature schema and feature vectors
//! - [`record`] - Historical sales records
//! - [`table`] - Encoded historical feature table
//! - [`forecast`] - Per-item prediction results
//! - [`error`] - Domain validation errors

pub mod calendar;
pub mod error;
pub mod forecast;
pub mod item;
pub mod record;
pub mod schema;
pub mod table;
