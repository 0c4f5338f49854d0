//! Command-line interface.
//!
//! - [`command`] - `clap` definitions
//! - [`serve`] - Run the HTTP endpoint
//! - [`predict`] - One-shot forecast for a date
//! - [`schema`] - Print the canonical feature schema
//! - [`export`] - Write the historical feature table as CSV

pub mod command;
pub mod export;
pub mod predict;
pub mod schema;
pub mod serve;

use std::path::Path;

use tracing::info;

use self::command::{Cli, Commands, DEFAULT_CONFIG_PATH};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load configuration, initialize logging, and dispatch the subcommand.
///
/// # Errors
///
/// Returns the first fatal error of the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.init_logging();

    match cli.command {
        Commands::Serve(args) => serve::execute(config, &args).await,
        Commands::Predict(args) => predict::execute(&config, &args),
        Commands::Schema => schema::execute(&config),
        Commands::ExportFeatures(args) => export::execute(&config, &args),
    }
}

/// Read the config file; a missing file at the default path means defaults.
fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
        return Ok(Config::default());
    }
    let config = Config::load(path)?;
    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}
