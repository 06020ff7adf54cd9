//! Shared types, configuration and dataset loading for Pantai.
//!
//! The dataset is a labelled CSV of beach reviews. It is loaded once at
//! process start into an immutable [`Dataset`]; every other crate reads from
//! it without mutating it.

pub mod app_config;
pub mod config;
pub mod dataset;
pub mod review;
pub mod text;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{load_dataset, Dataset, REQUIRED_COLUMNS};
pub use review::{Review, Sentiment};
pub use text::normalize_text;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while reading the review dataset.
///
/// All of these are fatal: callers are expected to abort startup rather than
/// render a partial view.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
#[error("unknown sentiment label: '{0}'")]
pub struct UnknownSentiment(pub String);
