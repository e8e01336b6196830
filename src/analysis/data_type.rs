//! Data-type classification from indicator terms.

use serde::Serialize;

use crate::analysis::lexicon::Lexicon;

/// Kind of data a study draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    Secondary,
    Primary,
    NotClear,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Secondary => "Secondary",
            DataType::Primary => "Primary",
            DataType::NotClear => "Not Clear",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the study's data type from indicator terms, case-insensitively.
///
/// Secondary indicators take precedence: a text mentioning both families
/// classifies as `Secondary`.
pub fn classify_data_type(text: &str, lexicon: &Lexicon) -> DataType {
    let haystack = text.to_lowercase();
    if lexicon.secondary_data.iter().any(|term| haystack.contains(term)) {
        return DataType::Secondary;
    }
    if lexicon.primary_data.iter().any(|term| haystack.contains(term)) {
        return DataType::Primary;
    }
    DataType::NotClear
}
