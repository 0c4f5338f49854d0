use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while loading the historical sales dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open dataset '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read dataset headers: {0}")]
    Headers(#[source] csv::Error),

    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("dataset column '{column}' clashes with a generated indicator column")]
    ReservedColumn { column: String },

    #[error("failed to read dataset row {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid value in column '{column}' at line {line}: {reason}")]
    InvalidValue {
        line: u64,
        column: String,
        reason: String,
    },

    #[error("dataset contains no records")]
    Empty,
}

/// Model artifact loading and inference errors.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model artifact '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error("feature count mismatch: model expects {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("feature mismatch at position {position}: model expects '{expected}', got '{actual}'")]
    FeatureName {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("model produced a non-finite prediction ({value}) for item '{item}'")]
    NonFinite { item: String, value: f64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, Error>;
