//! Report rendering.
//!
//! Projects scan results into two views:
//! - a summary table with one row per URL
//! - a detail view listing every header per URL
//!
//! Purely formatting; all classification happens in `security`.

mod detail;
mod summary;

pub use detail::{detail_rows, render_details, DetailRow, HeaderState};
pub use summary::{render_summary, summary_rows, SummaryRow};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::{classify, ScanResult};
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    fn result_with(url: &str, pairs: &[(&str, &str)]) -> ScanResult {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        ScanResult::from_response(url.to_string(), 200, url.to_string(), classify(&headers))
    }

    fn all_headers() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Content-Security-Policy", "default-src 'self'"),
            ("Strict-Transport-Security", "max-age=63072000"),
            ("X-Frame-Options", "DENY"),
            ("X-Content-Type-Options", "nosniff"),
            ("Referrer-Policy", "no-referrer"),
            ("Permissions-Policy", "camera=()"),
        ]
    }

    #[test]
    fn test_summary_rows_good_and_failed() {
        let results = vec![
            result_with("https://good.example", &all_headers()),
            ScanResult::failed(
                "https://bad.example".to_string(),
                "request timed out after 10s".to_string(),
            ),
        ];
        let rows = summary_rows(&results);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].url, "https://good.example");
        assert_eq!(rows[0].status, "200");
        assert_eq!(rows[0].found, "6");
        assert_eq!(rows[0].missing, "0");
        assert_eq!(rows[0].deprecated, "0");
        assert_eq!(rows[0].score, "100%");
        assert_eq!(rows[0].grade, "A");

        assert_eq!(rows[1].status, "Error: request timed out after 10s");
        assert_eq!(rows[1].found, "-");
        assert_eq!(rows[1].score, "0%");
        assert_eq!(rows[1].grade, "F");
    }

    #[test]
    fn test_render_summary_contains_headers_and_rows() {
        let results = vec![result_with(
            "https://partial.example",
            &[("X-Frame-Options", "DENY"), ("X-XSS-Protection", "0")],
        )];
        let table = render_summary(&results);
        for column in ["URL", "Status", "Found", "Missing", "Deprecated", "Score", "Grade"] {
            assert!(table.contains(column), "missing column {column}");
        }
        assert!(table.contains("https://partial.example"));
        assert!(table.contains("17%"));
    }

    #[test]
    fn test_detail_rows_order_and_content() {
        let result = result_with(
            "https://partial.example",
            &[
                ("x-content-type-options", "nosniff"),
                ("x-xss-protection", "1; mode=block"),
            ],
        );
        let rows = detail_rows(&result);
        assert_eq!(rows.len(), 1 + 5 + 1);

        assert_eq!(rows[0].header, "X-Content-Type-Options");
        assert_eq!(rows[0].state, HeaderState::Present);
        assert_eq!(rows[0].detail, "nosniff");

        assert_eq!(rows[1].header, "Content-Security-Policy");
        assert_eq!(rows[1].state, HeaderState::Missing);
        assert_eq!(rows[1].detail, "Prevents XSS attacks");

        let last = rows.last().unwrap();
        assert_eq!(last.header, "X-XSS-Protection");
        assert_eq!(last.state, HeaderState::Deprecated);
    }

    #[test]
    fn test_detail_rows_truncate_long_values() {
        let long_csp = format!("default-src 'self' {}", "https://cdn.example ".repeat(20));
        let result = result_with(
            "https://csp.example",
            &[("Content-Security-Policy", long_csp.as_str())],
        );
        let rows = detail_rows(&result);
        assert!(rows[0].detail.ends_with("..."));
        assert_eq!(
            rows[0].detail.chars().count(),
            crate::config::MAX_HEADER_VALUE_DISPLAY_CHARS
        );
    }

    #[test]
    fn test_render_details_failed_scan_shows_error() {
        let results = vec![ScanResult::failed(
            "https://bad.example".to_string(),
            "request failed: dns error".to_string(),
        )];
        let out = render_details(&results);
        assert!(out.contains("https://bad.example"));
        assert!(out.contains("request failed: dns error"));
        assert!(!out.contains("Header"));
    }

    #[test]
    fn test_render_details_lists_every_header() {
        let results = vec![result_with("https://good.example", &all_headers())];
        let out = render_details(&results);
        for (name, value) in all_headers() {
            assert!(out.contains(name), "missing {name}");
            assert!(out.contains(value), "missing value {value}");
        }
        assert!(out.contains("grade A"));
    }
}
