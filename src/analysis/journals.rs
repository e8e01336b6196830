//! Journal-name harvesting from reference-style citations.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::Detected;

/// A short run of text sandwiched between a sentence-ending period and a
/// `volume(issue)` suffix, the shape a journal name takes in an APA-style
/// reference entry: `. Journal of Finance, 75(2), 1-30.`
static JOURNAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+([^.\n]{5,100}),\s+\d+\(\d+\)").unwrap());

/// Collect deduplicated, sorted journal-name candidates.
///
/// Candidates whose lowercased text starts with "doi" are dropped; a DOI
/// sitting directly after the title period matches the same shape.
pub fn extract_journals(text: &str) -> Detected<BTreeSet<String>> {
    let candidates: BTreeSet<String> = JOURNAL_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|candidate| !candidate.to_lowercase().starts_with("doi"))
        .collect();
    if candidates.is_empty() {
        Detected::NotFound
    } else {
        Detected::Found(candidates)
    }
}
