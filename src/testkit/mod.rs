//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`boost`] Deterministic [`BoostSource`](crate::port::BoostSource) implementations.
//! - [`model`] Trivial [`Regressor`](crate::port::Regressor) implementations.
//! - [`fixture`] A small historical dataset and matching model artifacts.

pub mod boost;
pub mod fixture;
pub mod model;
