//! Header classification and scoring.

use reqwest::header::HeaderMap;

use super::types::{Classification, FoundHeader};
use crate::config::{SecurityHeader, DEPRECATED_HEADERS, RECOMMENDED_HEADERS};

/// Looks up each catalog header in `headers`.
///
/// `HeaderMap` stores names in lowercase and lowercases lookup keys, so
/// matching is case-insensitive. When a header repeats, the first value wins.
fn lookup<'a>(
    headers: &'a HeaderMap,
    catalog: &'static [SecurityHeader],
) -> impl Iterator<Item = (&'static SecurityHeader, Option<String>)> + 'a {
    catalog.iter().map(move |header| {
        let value = headers
            .get(header.name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        (header, value)
    })
}

/// Classifies response headers against the recommended and deprecated catalogs.
///
/// Every recommended header lands in exactly one of `found` or `missing`.
/// Deprecated headers are only listed when present.
pub fn classify(headers: &HeaderMap) -> Classification {
    let mut classification = Classification::default();

    for (header, value) in lookup(headers, RECOMMENDED_HEADERS) {
        match value {
            Some(value) => classification.found.push(FoundHeader { header, value }),
            None => classification.missing.push(header),
        }
    }

    classification.deprecated = lookup(headers, DEPRECATED_HEADERS)
        .filter_map(|(header, value)| value.map(|value| FoundHeader { header, value }))
        .collect();

    classification
}

/// Computes `round(100 * found / recommended)`.
pub fn compute_score(classification: &Classification) -> u8 {
    let total = classification.found.len() + classification.missing.len();
    if total == 0 {
        return 0;
    }
    // Integer rounding: (2 * 100 * found + total) / (2 * total)
    let score = (200 * classification.found.len() + total) / (2 * total);
    u8::try_from(score.min(100)).unwrap_or(100)
}
