//! URL validation and normalization utilities.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ScanError;

/// Returns `true` if `input` starts with `<scheme>://`.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`,
/// so a `://` later in a path or query string does not count.
fn has_scheme(input: &str) -> bool {
    input.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Validates and normalizes a URL.
///
/// Trims surrounding whitespace and adds an `https://` prefix when the input
/// carries no scheme, then checks that the result parses and uses http or
/// https. Inputs longer than `MAX_URL_LENGTH` are rejected before parsing.
///
/// # Errors
///
/// Returns `ScanError::UrlTooLong`, `ScanError::InvalidUrl` or
/// `ScanError::UnsupportedScheme`.
pub fn validate_and_normalize_url(url: &str) -> Result<String, ScanError> {
    let trimmed = url.trim();

    let normalized = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    // Checked after normalization since the https:// prefix can push it over
    if normalized.len() > MAX_URL_LENGTH {
        return Err(ScanError::UrlTooLong {
            length: normalized.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(&normalized)?;
    match parsed.scheme() {
        "http" | "https" => Ok(normalized),
        other => Err(ScanError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_https() {
        let result = validate_and_normalize_url("https://example.com").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        let result = validate_and_normalize_url("http://example.com").unwrap();
        assert_eq!(result, "http://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_trims_whitespace() {
        let result = validate_and_normalize_url("  example.com\n").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        let result =
            validate_and_normalize_url("example.com:8080/path?query=value").unwrap();
        assert_eq!(result, "https://example.com:8080/path?query=value");
    }

    #[test]
    fn test_validate_and_normalize_url_nested_url_in_query() {
        let result =
            validate_and_normalize_url("example.com/login?next=https://example.com/home").unwrap();
        assert_eq!(result, "https://example.com/login?next=https://example.com/home");
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("svn+ssh://example.com"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("example.com/redirect?to=http://other.example"));
        assert!(!has_scheme("://example.com"));
        assert!(!has_scheme("1http://example.com"));
    }

    #[test]
    fn test_validate_and_normalize_url_ipv6() {
        let result = validate_and_normalize_url("[2001:db8::1]").unwrap();
        assert_eq!(result, "https://[2001:db8::1]");
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        let result = validate_and_normalize_url("ftp://example.com");
        assert!(matches!(result, Err(ScanError::UnsupportedScheme(s)) if s == "ftp"));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        let result = validate_and_normalize_url("not a valid url!!!");
        assert!(matches!(result, Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_empty() {
        let result = validate_and_normalize_url("   ");
        assert!(matches!(result, Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let result = validate_and_normalize_url(&long);
        assert!(matches!(result, Err(ScanError::UrlTooLong { .. })));
    }
}
