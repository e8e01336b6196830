//! Heuristic text analyzers.
//!
//! Each analyzer is a pure function of already-extracted document text and
//! independent of the others; the pipeline can run them in any order. All
//! matching is case-insensitive substring or pattern work, tuned for
//! business/accounting manuscripts.

pub mod data_type;
pub mod findings;
pub mod journals;
pub mod keywords;
pub mod lexicon;
pub mod sections;
pub mod style;
pub mod years;

use serde::Serialize;

/// Presence-tagged analyzer result.
///
/// Replaces in-band sentinel strings ("Not Found" sitting inside a result
/// collection): callers must match on the tag, so placeholder text can only
/// come from a display layer and never leaks into exported data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Detected<T> {
    Found(T),
    NotFound,
}

impl<T> Detected<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Detected::Found(_))
    }

    /// Borrow the inner value when present.
    pub fn found(&self) -> Option<&T> {
        match self {
            Detected::Found(value) => Some(value),
            Detected::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_exposes_the_inner_value() {
        let detected = Detected::Found(3);
        assert!(detected.is_found());
        assert_eq!(detected.found(), Some(&3));
    }

    #[test]
    fn not_found_has_no_value() {
        let detected: Detected<Vec<String>> = Detected::NotFound;
        assert!(!detected.is_found());
        assert_eq!(detected.found(), None);
    }
}
