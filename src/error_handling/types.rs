//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
///
/// These are the only errors that stop a run.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a single URL could not be scanned.
///
/// Every variant is handled the same way: the scan result for that URL is
/// marked failed with the error message, and the other URLs carry on.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input could not be parsed as a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL has a scheme other than http or https.
    #[error("unsupported scheme '{0}' (only http and https are scanned)")]
    UnsupportedScheme(String),

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("URL exceeds maximum length ({length} > {max})")]
    UrlTooLong {
        /// Length of the rejected input
        length: usize,
        /// Configured limit
        max: usize,
    },

    /// No response arrived within the request timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, connect, TLS, redirect or protocol failure.
    #[error("request failed: {0}")]
    Fetch(#[source] ReqwestError),

    /// The task scanning this URL panicked or was cancelled.
    #[error("scan task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
