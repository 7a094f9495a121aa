//! Configuration constants.
//!
//! Timeouts, limits and display widths used throughout the scanner.

use std::time::Duration;

/// Per-request timeout in seconds.
/// Covers DNS, connect, TLS and reading the response headers.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout as a `Duration`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT_SECS);

// Redirect handling
/// Maximum number of redirect hops to follow before the fetch fails.
pub const MAX_REDIRECTS: usize = 5;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Some servers only send their full security header set to browsers, so the
/// scanner identifies as a current desktop Chrome.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Display limits
/// Maximum header value length shown in the detail view.
/// CSP values in particular can run to several kilobytes.
pub const MAX_HEADER_VALUE_DISPLAY_CHARS: usize = 80;

/// Maximum error message length (characters) carried in a failed scan result.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 200;

// Grade thresholds (score is a percentage of recommended headers found)
/// Minimum score for an A grade
pub const GRADE_A_MIN_SCORE: u8 = 90;
/// Minimum score for a B grade
pub const GRADE_B_MIN_SCORE: u8 = 80;
/// Minimum score for a C grade
pub const GRADE_C_MIN_SCORE: u8 = 70;
/// Minimum score for a D grade
pub const GRADE_D_MIN_SCORE: u8 = 60;
