//! Summary table: one row per scanned URL.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::security::ScanResult;

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "URL")]
    pub url: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Found")]
    pub found: String,
    #[tabled(rename = "Missing")]
    pub missing: String,
    #[tabled(rename = "Deprecated")]
    pub deprecated: String,
    #[tabled(rename = "Score")]
    pub score: String,
    #[tabled(rename = "Grade")]
    pub grade: String,
}

impl From<&ScanResult> for SummaryRow {
    fn from(result: &ScanResult) -> Self {
        let (status, found, missing, deprecated) = match &result.error {
            Some(reason) => (
                format!("Error: {reason}"),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
            ),
            None => (
                result
                    .status
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                result.found().len().to_string(),
                result.missing().len().to_string(),
                result.deprecated().len().to_string(),
            ),
        };

        Self {
            url: result.url.clone(),
            status,
            found,
            missing,
            deprecated,
            score: format!("{}%", result.score),
            grade: result.grade.to_string(),
        }
    }
}

/// Projects results into summary rows, preserving order.
pub fn summary_rows(results: &[ScanResult]) -> Vec<SummaryRow> {
    results.iter().map(SummaryRow::from).collect()
}

/// Renders the summary table.
pub fn render_summary(results: &[ScanResult]) -> String {
    let mut table = Table::new(summary_rows(results));
    table.with(Style::modern());
    table.to_string()
}
