//! Writing-style screening by stock-phrase frequency.
//!
//! Counts generic academic filler phrases; a pile of them reads as
//! template-generated prose. This is a frequency proxy, not a detector,
//! and the verdict is advisory everywhere it surfaces.

use serde::Serialize;

use crate::analysis::lexicon::Lexicon;

/// Outcome of the style check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WritingStyle {
    /// Stock-phrase density at or above the threshold.
    Flagged,
    Natural,
}

/// Style verdict plus the raw count that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleVerdict {
    pub style: WritingStyle,
    pub phrase_count: usize,
}

/// Cumulative phrase occurrences at which text gets flagged.
const FLAG_THRESHOLD: usize = 5;

/// Count stock phrases, case-insensitively and non-overlapping, and flag
/// the text when the cumulative total across all phrases reaches five.
pub fn detect_ai_style(text: &str, lexicon: &Lexicon) -> StyleVerdict {
    let haystack = text.to_lowercase();
    let phrase_count: usize = lexicon
        .ai_phrases
        .iter()
        .map(|phrase| haystack.matches(*phrase).count())
        .sum();
    let style = if phrase_count >= FLAG_THRESHOLD {
        WritingStyle::Flagged
    } else {
        WritingStyle::Natural
    };
    StyleVerdict { style, phrase_count }
}
