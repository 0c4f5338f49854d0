//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: HTTP endpoint and command-line interface
//! - [`outbound`] - Driven side: CSV dataset, model artifacts, boost sources

pub mod inbound;
pub mod outbound;
