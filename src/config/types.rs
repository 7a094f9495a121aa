//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, MAX_REDIRECTS, REQUEST_TIMEOUT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scanner configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library callers. Timeout, redirect limit and User-Agent are fixed for the
/// CLI and only adjustable programmatically.
///
/// # Examples
///
/// ```
/// use headscan::Config;
///
/// let config = Config {
///     urls: vec!["example.com".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(config.max_redirects, 5);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "headscan",
    version,
    about = "Checks URLs for recommended and deprecated HTTP security headers",
    long_about = None
)]
pub struct Config {
    /// URLs to scan (https:// is assumed when no scheme is given)
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout
    #[arg(skip = REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// Maximum redirect hops followed per request
    #[arg(skip = MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// HTTP User-Agent header value
    #[arg(skip = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout: REQUEST_TIMEOUT,
            max_redirects: MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
