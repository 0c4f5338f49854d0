//! Menucast - per-item restaurant demand forecasting.
//!
//! Given a calendar date, the service predicts how many portions of each menu
//! item will be needed. A pre-trained regression model is loaded once at
//! startup together with the historical sales dataset it was trained on; the
//! dataset fixes the feature schema and the set of predictable items.
//!
//! # Architecture
//!
//! - **`domain`** - Calendar features, special dates, feature schema, forecasts
//! - **`port`** - Traits for the dataset, the model and the boost source
//! - **`adapter`** - CSV dataset, JSON model artifacts, HTTP endpoint, CLI
//! - **`application`** - Feature table builder and prediction engine
//! - **`infrastructure`** - Configuration and startup wiring
//!
//! # Example
//!
//! ```no_run
//! use menucast::infrastructure::bootstrap::build_context;
//! use menucast::infrastructure::config::settings::Config;
//!
//! let config = Config::load("config.toml").unwrap();
//! let context = build_context(&config).unwrap();
//! let forecast = context.predict_all("2024-12-25").unwrap();
//! for (item, quantity) in &forecast {
//!     println!("{item}: {quantity}");
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
