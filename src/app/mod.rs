//! Application-level helpers shared by the scan pipeline.

pub mod url;

pub use url::validate_and_normalize_url;
