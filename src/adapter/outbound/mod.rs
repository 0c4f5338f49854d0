//! Outbound adapters (driven side).

pub mod boost;
pub mod csv;
pub mod model;
