//! Security header catalogs.
//!
//! This module defines the recommended and deprecated security headers the
//! scanner looks for, each with a short human-readable description.
//! To add/remove headers, modify these arrays.

/// A security header name paired with what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecurityHeader {
    /// Canonical header name (matched case-insensitively)
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

// Recommended security header names
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";

// Deprecated security header names
/// X-XSS-Protection header (XSS auditor removed from browsers)
pub const HEADER_X_XSS_PROTECTION: &str = "X-XSS-Protection";
/// HTTP Public Key Pinning header
pub const HEADER_PUBLIC_KEY_PINS: &str = "Public-Key-Pins";
/// HTTP Public Key Pinning report-only header
pub const HEADER_PUBLIC_KEY_PINS_REPORT_ONLY: &str = "Public-Key-Pins-Report-Only";
/// Expect-CT header
pub const HEADER_EXPECT_CT: &str = "Expect-CT";
/// Feature-Policy header (renamed to Permissions-Policy)
pub const HEADER_FEATURE_POLICY: &str = "Feature-Policy";
/// Pre-standard CSP header used by old Firefox and IE
pub const HEADER_X_CONTENT_SECURITY_POLICY: &str = "X-Content-Security-Policy";
/// Pre-standard CSP header used by old WebKit
pub const HEADER_X_WEBKIT_CSP: &str = "X-WebKit-CSP";

/// Headers every modern site should send.
/// The score is the percentage of these present in a response.
pub const RECOMMENDED_HEADERS: &[SecurityHeader] = &[
    SecurityHeader {
        name: HEADER_CONTENT_SECURITY_POLICY,
        description: "Prevents XSS attacks",
    },
    SecurityHeader {
        name: HEADER_STRICT_TRANSPORT_SECURITY,
        description: "Enforces HTTPS",
    },
    SecurityHeader {
        name: HEADER_X_FRAME_OPTIONS,
        description: "Prevents clickjacking",
    },
    SecurityHeader {
        name: HEADER_X_CONTENT_TYPE_OPTIONS,
        description: "Prevents MIME sniffing",
    },
    SecurityHeader {
        name: HEADER_REFERRER_POLICY,
        description: "Controls referrer information",
    },
    SecurityHeader {
        name: HEADER_PERMISSIONS_POLICY,
        description: "Controls browser features",
    },
];

/// Headers that were once recommended but are superseded or ignored by
/// modern browsers. Their presence is reported but does not affect the score.
pub const DEPRECATED_HEADERS: &[SecurityHeader] = &[
    SecurityHeader {
        name: HEADER_X_XSS_PROTECTION,
        description: "Legacy XSS protection, removed from modern browsers",
    },
    SecurityHeader {
        name: HEADER_PUBLIC_KEY_PINS,
        description: "HTTP Public Key Pinning, no longer supported",
    },
    SecurityHeader {
        name: HEADER_PUBLIC_KEY_PINS_REPORT_ONLY,
        description: "HTTP Public Key Pinning reporting, no longer supported",
    },
    SecurityHeader {
        name: HEADER_EXPECT_CT,
        description: "Certificate Transparency is now enforced by default",
    },
    SecurityHeader {
        name: HEADER_FEATURE_POLICY,
        description: "Superseded by Permissions-Policy",
    },
    SecurityHeader {
        name: HEADER_X_CONTENT_SECURITY_POLICY,
        description: "Prefixed CSP, superseded by Content-Security-Policy",
    },
    SecurityHeader {
        name: HEADER_X_WEBKIT_CSP,
        description: "Prefixed CSP, superseded by Content-Security-Policy",
    },
];
