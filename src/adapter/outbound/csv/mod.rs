//! CSV adapters: historical dataset loading and feature-table export.

pub mod export;
pub mod history;

pub use export::write_feature_table;
pub use history::CsvHistory;
