//! Security header analysis.
//!
//! Partitions the recommended security headers into found/missing for a
//! response, flags deprecated headers, and scores the result:
//! - `score` is the rounded percentage of recommended headers present
//! - `grade` buckets the score into A/B/C/D/F

mod analysis;
mod types;

pub use analysis::{classify, compute_score};
pub use types::{Classification, FoundHeader, Grade, ScanResult};
