//! Aggregated evaluation records.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::analysis::data_type::DataType;
use crate::analysis::style::StyleVerdict;
use crate::analysis::Detected;

/// One result per analysis domain, immutable once aggregated.
///
/// Field order here is the section order of every rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    /// Methodology terms present in the text, in catalog order.
    pub methodology: Vec<String>,
    pub data_type: DataType,
    /// Statistical packages and estimators mentioned, in catalog order.
    pub analysis_tools: Vec<String>,
    /// Named theories and models mentioned, in catalog order.
    pub frameworks: Vec<String>,
    /// Sorted journal-name candidates harvested from the references.
    pub journals: Detected<BTreeSet<String>>,
    /// Mention counts per year inside the trailing five-year window.
    pub recent_references: BTreeMap<i32, usize>,
    /// Finding-bearing abstract sentences, at most five, in reading order.
    pub key_findings: Detected<Vec<String>>,
}

/// Complete outcome of evaluating one document: the exportable summary plus
/// the writing-style verdict. The verdict is shown to the user but never
/// included in generated reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub summary: EvaluationSummary,
    pub writing_style: StyleVerdict,
}
