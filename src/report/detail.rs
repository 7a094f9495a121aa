//! Detail view: per URL, every catalog header and what was seen.

use std::fmt::Write;

use colored::*;
use strum_macros::Display;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::MAX_HEADER_VALUE_DISPLAY_CHARS;
use crate::security::ScanResult;
use crate::utils::sanitize::truncate_chars;

/// How a header row relates to the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HeaderState {
    /// Recommended and present
    Present,
    /// Recommended and absent
    Missing,
    /// Deprecated and present
    Deprecated,
}

/// One row of a URL's detail table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DetailRow {
    #[tabled(rename = "Header")]
    pub header: String,
    #[tabled(rename = "State")]
    pub state: HeaderState,
    /// Value for present headers, description otherwise
    #[tabled(rename = "Detail")]
    pub detail: String,
}

/// Builds the detail rows for one result: found, then missing, then deprecated.
///
/// Failed results have no rows.
pub fn detail_rows(result: &ScanResult) -> Vec<DetailRow> {
    let found = result.found().iter().map(|f| DetailRow {
        header: f.name().to_string(),
        state: HeaderState::Present,
        detail: display_value(&f.value),
    });
    let missing = result.missing().iter().map(|h| DetailRow {
        header: h.name.to_string(),
        state: HeaderState::Missing,
        detail: h.description.to_string(),
    });
    let deprecated = result.deprecated().iter().map(|f| DetailRow {
        header: f.name().to_string(),
        state: HeaderState::Deprecated,
        detail: f.header.description.to_string(),
    });
    found.chain(missing).chain(deprecated).collect()
}

fn display_value(value: &str) -> String {
    if value.trim().is_empty() {
        "(empty)".to_string()
    } else {
        truncate_chars(value, MAX_HEADER_VALUE_DISPLAY_CHARS)
    }
}

fn heading(result: &ScanResult) -> String {
    match (&result.error, result.status) {
        (None, Some(status)) => {
            let mut heading = format!(
                "{} [{}] grade {} ({}%)",
                result.url, status, result.grade, result.score
            );
            if let Some(final_url) = result.final_url.as_deref() {
                if final_url.trim_end_matches('/') != result.url.trim_end_matches('/') {
                    let _ = write!(heading, " -> {final_url}");
                }
            }
            heading
        }
        _ => result.url.clone(),
    }
}

/// Renders the detail view for all results, one section per URL.
pub fn render_details(results: &[ScanResult]) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", heading(result).bold());

        if let Some(reason) = &result.error {
            let _ = writeln!(out, "{} {}", "Error:".red(), reason);
            continue;
        }

        let mut table = Table::new(detail_rows(result));
        table.with(Style::modern());
        let _ = writeln!(out, "{table}");
    }
    out
}
