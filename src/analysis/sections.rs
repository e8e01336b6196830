//! Abstract section location.

use std::sync::LazyLock;

use regex::Regex;

/// Span from an "abstract" token to the next heading that looks like the
/// start of the introduction: the word "introduction", "1.", or "I." at a
/// line start, optionally preceded by section numbering digits.
static ABSTRACT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)abstract(.*?)\n\s*\d*\s*(?:introduction|1\.|i\.)").unwrap()
});

/// Extract the abstract section from full document text.
///
/// Returns `None` when no "abstract" token exists, and also when one exists
/// but no terminating heading follows it: an unterminated span would swallow
/// the rest of the paper, so a trailing abstract without an introduction
/// heading is treated as not found rather than misreported as the whole body.
pub fn extract_abstract(text: &str) -> Option<String> {
    ABSTRACT_REGEX
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}
