//! Infrastructure configuration modules.

pub mod boost;
pub mod calendar;
pub mod logging;
pub mod server;
pub mod settings;
