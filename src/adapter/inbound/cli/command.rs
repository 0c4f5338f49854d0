//! Command-line interface definitions.
//!
//! Defines the CLI structure for the menucast application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Per-item restaurant demand forecasting service
#[derive(Parser, Debug)]
#[command(name = "menucast")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the configured log level (e.g. debug, warn)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the menucast CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve POST /predict over HTTP
    Serve(ServeArgs),

    /// Print the forecast for one date as JSON
    Predict(PredictArgs),

    /// Print the canonical feature schema
    Schema,

    /// Write the encoded historical feature table as CSV
    ExportFeatures(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured listen port
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Target date, e.g. 2024-12-25
    #[arg(long)]
    pub date: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination CSV file
    #[arg(short, long)]
    pub output: PathBuf,
}
