//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`ScanError` per URL, `InitializationError` per run)
//! - Conversion of a `reqwest::Error` into a `ScanError`
//! - Rendering of an error chain into a single display message

mod types;

use std::error::Error as StdError;
use std::time::Duration;

pub use types::{InitializationError, ScanError};

use crate::config::MAX_ERROR_MESSAGE_LENGTH;
use crate::utils::sanitize::{sanitize_error_message, truncate_chars};

/// Shortest outer message worth keeping in front of the causes.
const MIN_HEAD_CHARS: usize = 20;

/// Converts a `reqwest::Error` into a `ScanError`.
///
/// Timeouts are surfaced as their own variant so the report says how long
/// the request was allowed to take.
pub fn categorize_reqwest_error(error: reqwest::Error, timeout: Duration) -> ScanError {
    if error.is_timeout() {
        ScanError::Timeout(timeout)
    } else {
        ScanError::Fetch(error)
    }
}

/// Renders an error and its source chain as one line.
///
/// reqwest wraps the interesting cause ("dns error", "connection refused",
/// "invalid peer certificate") several sources deep, so the chain is walked
/// and each new message appended. Sources whose text is already part of the
/// message are skipped.
///
/// The outer message usually embeds the full URL. When the line is too long
/// only that outer part is shortened, so the causes always survive.
pub fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let head = sanitize_error_message(&error.to_string());
    let mut seen = head.clone();
    let mut causes: Vec<String> = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = sanitize_error_message(&cause.to_string());
        if !text.is_empty() && !seen.contains(&text) {
            seen.push('\n');
            seen.push_str(&text);
            causes.push(text);
        }
        source = cause.source();
    }

    if causes.is_empty() {
        return truncate_chars(&head, MAX_ERROR_MESSAGE_LENGTH);
    }

    let tail = causes.join(": ");
    let head_budget = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(tail.chars().count() + 2);
    if head_budget < MIN_HEAD_CHARS {
        return truncate_chars(&tail, MAX_ERROR_MESSAGE_LENGTH);
    }
    format!("{}: {}", truncate_chars(&head, head_budget), tail)
}
