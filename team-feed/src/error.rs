//! Unified error types for the feed job
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Environment configuration errors
//! - `QiitaError`: Qiita API client errors
//! - `FeedError`: Mapping, rendering and persistence errors
//! - `AppError`: Application layer errors (wraps the above for `main`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Qiita API client errors
///
/// A non-200 status is not an error here: the caller inspects it.
#[derive(Debug, Error)]
pub enum QiitaError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid access token format")]
    InvalidToken,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Feed mapping and persistence errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid {field} timestamp {value:?}: {source}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to write feed to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Qiita error: {0}")]
    Qiita(#[from] QiitaError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}
