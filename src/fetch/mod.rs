//! Fetching a URL and turning its response headers into a scan result.
//!
//! One GET per URL, no retries. Non-2xx responses still carry headers worth
//! classifying, so only transport-level failures count as errors.

mod request;

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::HeaderMap;

use crate::app::validate_and_normalize_url;
use crate::error_handling::{categorize_reqwest_error, describe_error, ScanError};
use crate::security::{classify, ScanResult};
use request::RequestHeaders;

/// Status, final URL and headers captured from a response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code
    pub status: u16,
    /// URL after redirects
    pub final_url: String,
    /// Response headers
    pub headers: HeaderMap,
}

/// Issues a single GET and captures the response head.
///
/// The body is never read; dropping the response closes the connection.
///
/// # Errors
///
/// Returns `ScanError::Timeout` when the client timeout elapses and
/// `ScanError::Fetch` for DNS, connect, TLS and redirect-limit failures.
pub async fn fetch_url(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchedResponse, ScanError> {
    debug!("Fetching {url}");

    let response = RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await
        .map_err(|e| categorize_reqwest_error(e, timeout))?;

    let status = response.status();
    let final_url = response.url().to_string();
    if final_url != url {
        debug!("Final url after redirects: {final_url}");
    }
    debug!("{url} answered {status}");

    Ok(FetchedResponse {
        status: status.as_u16(),
        final_url,
        headers: response.headers().clone(),
    })
}

/// Normalizes, fetches and classifies one URL.
///
/// Never fails: any error becomes a failed `ScanResult` carrying its message.
pub async fn scan_url(client: &reqwest::Client, raw_url: &str, timeout: Duration) -> ScanResult {
    let url = match validate_and_normalize_url(raw_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Skipping {raw_url}: {e}");
            return ScanResult::failed(raw_url.trim().to_string(), describe_error(&e));
        }
    };

    match fetch_url(client, &url, timeout).await {
        Ok(response) => {
            let classification = classify(&response.headers);
            debug!(
                "{url}: {} found, {} missing, {} deprecated",
                classification.found.len(),
                classification.missing.len(),
                classification.deprecated.len()
            );
            ScanResult::from_response(url, response.status, response.final_url, classification)
        }
        Err(e) => {
            let reason = describe_error(&e);
            warn!("Failed to fetch {url}: {reason}");
            ScanResult::failed(url, reason)
        }
    }
}
