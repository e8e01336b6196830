//! Key-findings extraction from the abstract.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::sections::extract_abstract;
use crate::analysis::Detected;

/// Sentence boundary: terminal punctuation followed by whitespace. The
/// punctuation stays with the preceding sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Cap on reported findings, in abstract order.
const MAX_FINDINGS: usize = 5;

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation class is single-byte, so +1 lands on a char edge.
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Pull up to five finding-bearing sentences from the document's abstract.
///
/// A sentence qualifies when it contains any indicator phrase,
/// case-insensitively. Sentences keep their original order and text.
/// `NotFound` covers both a missing abstract and an abstract with no
/// qualifying sentence.
pub fn extract_findings(text: &str, lexicon: &Lexicon) -> Detected<Vec<String>> {
    let Some(section) = extract_abstract(text) else {
        return Detected::NotFound;
    };
    let findings: Vec<String> = split_sentences(&section)
        .into_iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            lexicon
                .finding_indicators
                .iter()
                .any(|indicator| lowered.contains(indicator))
        })
        .take(MAX_FINDINGS)
        .map(|sentence| sentence.trim().to_string())
        .collect();
    if findings.is_empty() {
        Detected::NotFound
    } else {
        Detected::Found(findings)
    }
}
