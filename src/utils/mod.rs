//! Utility functions.
//!
//! This module provides:
//! - String sanitization and truncation for table output

pub mod sanitize;
