//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the dependencies of the prediction engine: the
//! historical dataset, the pre-trained model, and the source of randomness.

pub mod boost;
pub mod history;
pub mod model;
