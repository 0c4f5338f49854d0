//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Loads the historical dataset, builds the feature table, loads the model
//! artifact and assembles the [`ServiceContext`]. Every failure here is fatal:
//! the service must not start serving.

use tracing::{info, warn};

use crate::adapter::outbound::csv::CsvHistory;
use crate::adapter::outbound::model::load_model;
use crate::application::context::ServiceContext;
use crate::application::features::FeatureTableBuilder;
use crate::domain::table::FeatureTable;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::history::SalesHistory;

/// Load the historical dataset and encode it.
///
/// # Errors
///
/// Returns an error if the dataset is missing, malformed or empty, or the
/// calendar configuration is invalid.
pub fn build_feature_table(config: &Config) -> Result<FeatureTable> {
    let special_dates = config.calendar.special_dates()?;
    let history = CsvHistory::new(&config.data.history_path);
    info!(source = %history.describe(), "Loading historical dataset");
    let dataset = history.load()?;
    FeatureTableBuilder::new(&special_dates).build(&dataset)
}

/// Build the full service context from configuration.
///
/// # Errors
///
/// Returns an error if the dataset or model artifact cannot be loaded.
pub fn build_context(config: &Config) -> Result<ServiceContext> {
    let table = build_feature_table(config)?;

    info!(path = %config.model.path, "Loading model artifact");
    let model = load_model(&config.model.path)?;
    info!(kind = model.name(), "Model loaded");

    let context = ServiceContext::new(
        table,
        model,
        config.calendar.special_dates()?,
        config.boost.source(),
    )
    .with_reference_item(config.features.predict_reference_item);

    if let Some(mismatch) = context.schema_mismatch() {
        warn!(%mismatch, "Model features do not match the dataset schema; predictions will fail");
    }

    let items: Vec<&str> = context.engine().known_items().map(|i| i.as_str()).collect();
    info!(
        columns = context.schema().len(),
        items = ?items,
        boost_min = config.boost.min,
        boost_max = config.boost.max,
        seeded = config.boost.seed.is_some(),
        "Service context ready"
    );

    Ok(context)
}
