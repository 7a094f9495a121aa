//! Scan result types.

use strum_macros::{Display, EnumIter};

use crate::config::{
    SecurityHeader, GRADE_A_MIN_SCORE, GRADE_B_MIN_SCORE, GRADE_C_MIN_SCORE, GRADE_D_MIN_SCORE,
};

/// Letter grade derived from the percentage of recommended headers present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Grade {
    /// 90 and above
    A,
    /// 80-89
    B,
    /// 70-79
    C,
    /// 60-69
    D,
    /// Below 60, or the scan failed
    F,
}

impl Grade {
    /// Maps a 0-100 score onto the linear grade bands.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= GRADE_A_MIN_SCORE => Grade::A,
            s if s >= GRADE_B_MIN_SCORE => Grade::B,
            s if s >= GRADE_C_MIN_SCORE => Grade::C,
            s if s >= GRADE_D_MIN_SCORE => Grade::D,
            _ => Grade::F,
        }
    }
}

/// A catalog header that was present in a response, with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundHeader {
    /// Catalog entry that matched
    pub header: &'static SecurityHeader,
    /// Response value (lossy UTF-8)
    pub value: String,
}

impl FoundHeader {
    /// Canonical header name
    pub fn name(&self) -> &'static str {
        self.header.name
    }
}

/// Outcome of classifying one set of response headers against the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    /// Recommended headers present, in catalog order
    pub found: Vec<FoundHeader>,
    /// Recommended headers absent, in catalog order
    pub missing: Vec<&'static SecurityHeader>,
    /// Deprecated headers present, in catalog order
    pub deprecated: Vec<FoundHeader>,
}

/// Everything learned about one URL.
///
/// Built once per URL by the scan pipeline and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// URL as scanned (normalized), or as given when normalization failed
    pub url: String,
    /// HTTP status code, `None` when the fetch failed
    pub status: Option<u16>,
    /// URL after following redirects
    pub final_url: Option<String>,
    /// Recommended/missing/deprecated breakdown
    pub classification: Classification,
    /// Percentage of recommended headers present (0-100)
    pub score: u8,
    /// Letter grade for `score`
    pub grade: Grade,
    /// Why the scan failed, if it did
    pub error: Option<String>,
}

impl ScanResult {
    /// Builds a result for a URL whose headers were fetched and classified.
    pub fn from_response(
        url: String,
        status: u16,
        final_url: String,
        classification: Classification,
    ) -> Self {
        let score = super::analysis::compute_score(&classification);
        Self {
            url,
            status: Some(status),
            final_url: Some(final_url),
            classification,
            score,
            grade: Grade::from_score(score),
            error: None,
        }
    }

    /// Builds a result for a URL that could not be fetched.
    ///
    /// No headers are classified; the score is zero and the grade F.
    pub fn failed(url: String, reason: String) -> Self {
        Self {
            url,
            status: None,
            final_url: None,
            classification: Classification::default(),
            score: 0,
            grade: Grade::F,
            error: Some(reason),
        }
    }

    /// Returns `true` if the URL was fetched and classified.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Recommended headers present
    pub fn found(&self) -> &[FoundHeader] {
        &self.classification.found
    }

    /// Recommended headers absent
    pub fn missing(&self) -> &[&'static SecurityHeader] {
        &self.classification.missing
    }

    /// Deprecated headers present
    pub fn deprecated(&self) -> &[FoundHeader] {
        &self.classification.deprecated
    }
}
