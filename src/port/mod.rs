//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the historical dataset, the model artifact, the random source).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ History │            │  Regressor  │              │   Boost   │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`SalesHistory`] - Source of historical sales records
//! - [`Regressor`] - Opaque pre-trained model
//! - [`BoostSource`] - Random multiplier for special days

pub mod outbound;

pub use outbound::boost::BoostSource;
pub use outbound::history::SalesHistory;
pub use outbound::model::Regressor;
