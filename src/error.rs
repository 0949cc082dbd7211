// src/error.rs
//! Error types for each stage of the pipeline.
//!
//! Fetch-side errors never reach the binary: the loader logs them and
//! collapses them into an empty result set. Export errors are real I/O
//! failures and do propagate.

use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to the results provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed provider payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No event matching {name:?} in the {year} season")]
    UnknownEvent { year: i32, name: String },

    #[error("No race results published for {year} round {round}")]
    NoSessionData { year: i32, round: u32 },
}

/// Why the loader produced no results.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Missing required columns {missing:?}. Available: {available:?}")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
}

/// Failure writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Failure loading user configuration (alias overrides, prediction files).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure installing the log subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type ExportResult<T> = Result<T, ExportError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
