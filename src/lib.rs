//! headscan library: security header scanning
//!
//! This library fetches URLs, checks their responses for the recommended
//! browser security headers, flags deprecated ones, and renders a summary
//! and a detail report.
//!
//! # Example
//!
//! ```no_run
//! use headscan::{render_summary, run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["example.com".to_string(), "https://example.org".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("{}", render_summary(&report.results));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod report;
pub mod security;
mod utils;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, SecurityHeader};
pub use error_handling::{InitializationError, ScanError};
pub use fetch::{fetch_url, scan_url, FetchedResponse};
pub use report::{render_details, render_summary};
pub use run::{run_scan, ScanReport};
pub use security::{classify, Classification, FoundHeader, Grade, ScanResult};

// Internal run module (fans URLs out to tasks and collects the results)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::future::join_all;
    use log::{info, warn};

    use crate::config::Config;
    use crate::error_handling::{describe_error, ScanError};
    use crate::fetch::scan_url;
    use crate::initialization::init_client;
    use crate::security::ScanResult;

    /// Results of a scanning run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// One result per input URL, in input order
        pub results: Vec<ScanResult>,
        /// Total number of URLs scanned
        pub total_urls: usize,
        /// Number of URLs fetched and classified
        pub successful: usize,
        /// Number of URLs that could not be fetched
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Scans every URL in `config.urls` concurrently.
    ///
    /// Each URL runs in its own Tokio task sharing one HTTP client. A failure
    /// (invalid URL, DNS, timeout, even a panicking task) only affects that
    /// URL's result. Results come back in input order once every task is done.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use headscan::{run_scan, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     urls: vec!["example.com".to_string()],
    ///     ..Default::default()
    /// };
    /// let report = run_scan(config).await?;
    /// println!("Scanned {} URLs", report.total_urls);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let start_time = Instant::now();

        info!(
            "Scanning {} URL{} (timeout {:?}, max {} redirects)",
            config.urls.len(),
            if config.urls.len() == 1 { "" } else { "s" },
            config.timeout,
            config.max_redirects
        );

        let handles: Vec<_> = config
            .urls
            .iter()
            .map(|raw_url| {
                let client = Arc::clone(&client);
                let raw_url = raw_url.clone();
                let timeout = config.timeout;
                tokio::spawn(async move { scan_url(&client, &raw_url, timeout).await })
            })
            .collect();

        let results: Vec<ScanResult> = join_all(handles)
            .await
            .into_iter()
            .zip(&config.urls)
            .map(|(joined, raw_url)| match joined {
                Ok(result) => result,
                Err(e) => {
                    let error = ScanError::from(e);
                    warn!("Scan task for {raw_url} did not complete: {error}");
                    ScanResult::failed(raw_url.trim().to_string(), describe_error(&error))
                }
            })
            .collect();

        let successful = results.iter().filter(|r| r.is_success()).count();
        let report = ScanReport {
            total_urls: results.len(),
            successful,
            failed: results.len() - successful,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            results,
        };

        info!(
            "Scan finished: {} succeeded, {} failed in {:.2}s",
            report.successful, report.failed, report.elapsed_seconds
        );

        Ok(report)
    }
}
