//! Report generation for evaluation summaries.
//!
//! Three artifacts: a Word document, a PDF, and a journals CSV. The two
//! document generators consume the same flattened field model, so their
//! section structure and empty-value wording cannot drift apart.

pub mod csv;
pub mod docx;
pub mod pdf;

use crate::analysis::Detected;
use crate::summary::EvaluationSummary;

/// Title paragraph of both document artifacts.
pub const REPORT_TITLE: &str = "Research Paper Evaluation Summary";

/// Fixed artifact file names.
pub const DOCX_FILE_NAME: &str = "Evaluation_Summary.docx";
pub const PDF_FILE_NAME: &str = "Evaluation_Summary.pdf";
pub const CSV_FILE_NAME: &str = "journals_list.csv";

/// MIME types for servers handing the artifacts out as downloads.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PDF_MIME: &str = "application/pdf";
pub const CSV_MIME: &str = "text/csv";

/// Line rendered for an empty item list.
pub const EMPTY_ITEMS_PLACEHOLDER: &str = "Not Found";
/// Line rendered for an empty year histogram.
pub const EMPTY_COUNTS_PLACEHOLDER: &str = "None";
/// Line rendered when no findings were detected.
pub const NO_FINDINGS_PLACEHOLDER: &str = "Not clearly mentioned";

/// Value shapes a report section can hold. The set is closed: a section
/// that fits none of these shapes cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Single plain-text line.
    Text(String),
    /// Bulleted list of strings.
    Items(Vec<String>),
    /// Bulleted `label: count` pairs, already ordered for display.
    Counts(Vec<(String, String)>),
}

/// One titled section of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub title: &'static str,
    pub value: FieldValue,
}

/// Flatten a summary into titled sections, in fixed report order.
///
/// This is where sentinel wording for absent journals and findings enters:
/// on the presentation side of the [`Detected`] boundary, never in the
/// summary itself. Recent references are listed newest year first.
pub fn summary_fields(summary: &EvaluationSummary) -> Vec<ReportField> {
    let journals = match &summary.journals {
        Detected::Found(set) => set.iter().cloned().collect(),
        Detected::NotFound => vec![EMPTY_ITEMS_PLACEHOLDER.to_string()],
    };
    let findings = match &summary.key_findings {
        Detected::Found(list) => list.clone(),
        Detected::NotFound => vec![NO_FINDINGS_PLACEHOLDER.to_string()],
    };
    let references: Vec<(String, String)> = summary
        .recent_references
        .iter()
        .rev()
        .map(|(year, count)| (year.to_string(), count.to_string()))
        .collect();

    vec![
        ReportField {
            title: "Methodology",
            value: FieldValue::Items(summary.methodology.clone()),
        },
        ReportField {
            title: "Data Type",
            value: FieldValue::Text(summary.data_type.as_str().to_string()),
        },
        ReportField {
            title: "Data Analysis Tools",
            value: FieldValue::Items(summary.analysis_tools.clone()),
        },
        ReportField {
            title: "Theoretical Frameworks",
            value: FieldValue::Items(summary.frameworks.clone()),
        },
        ReportField {
            title: "Journals Used",
            value: FieldValue::Items(journals),
        },
        ReportField {
            title: "Recent References",
            value: FieldValue::Counts(references),
        },
        ReportField {
            title: "Key Findings",
            value: FieldValue::Items(findings),
        },
    ]
}

/// Bullet lines for an item list, with the unified empty placeholder.
pub(crate) fn items_lines(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        vec![EMPTY_ITEMS_PLACEHOLDER.to_string()]
    } else {
        items.to_vec()
    }
}

/// Bullet lines for label/count pairs, with the unified empty placeholder.
pub(crate) fn counts_lines(counts: &[(String, String)]) -> Vec<String> {
    if counts.is_empty() {
        vec![EMPTY_COUNTS_PLACEHOLDER.to_string()]
    } else {
        counts
            .iter()
            .map(|(label, count)| format!("{label}: {count}"))
            .collect()
    }
}

/// Canned summaries shared by the generator tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::{BTreeMap, BTreeSet};

    use crate::analysis::data_type::DataType;
    use crate::analysis::Detected;
    use crate::summary::EvaluationSummary;

    pub(crate) fn sample_summary() -> EvaluationSummary {
        let mut journals = BTreeSet::new();
        journals.insert("Journal of Finance".to_string());
        journals.insert("Accounting Review".to_string());
        let mut references = BTreeMap::new();
        references.insert(2021, 1);
        references.insert(2023, 4);
        EvaluationSummary {
            methodology: vec!["quantitative".to_string()],
            data_type: DataType::Secondary,
            analysis_tools: vec!["SPSS".to_string(), "regression".to_string()],
            frameworks: vec!["agency theory".to_string()],
            journals: Detected::Found(journals),
            recent_references: references,
            key_findings: Detected::Found(vec![
                "Our findings show buffers reduce risk.".to_string(),
            ]),
        }
    }

    pub(crate) fn empty_summary() -> EvaluationSummary {
        EvaluationSummary {
            methodology: Vec::new(),
            data_type: DataType::NotClear,
            analysis_tools: Vec::new(),
            frameworks: Vec::new(),
            journals: Detected::NotFound,
            recent_references: BTreeMap::new(),
            key_findings: Detected::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{empty_summary, sample_summary};
    use super::*;

    #[test]
    fn fields_keep_report_order() {
        let titles: Vec<&str> = summary_fields(&sample_summary())
            .iter()
            .map(|field| field.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Methodology",
                "Data Type",
                "Data Analysis Tools",
                "Theoretical Frameworks",
                "Journals Used",
                "Recent References",
                "Key Findings",
            ]
        );
    }

    #[test]
    fn references_render_newest_year_first() {
        let fields = summary_fields(&sample_summary());
        let FieldValue::Counts(counts) = &fields[5].value else {
            panic!("recent references must be counts");
        };
        assert_eq!(
            counts,
            &vec![
                ("2023".to_string(), "4".to_string()),
                ("2021".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn absent_journals_and_findings_use_sentinel_wording() {
        let fields = summary_fields(&empty_summary());
        assert_eq!(
            fields[4].value,
            FieldValue::Items(vec![EMPTY_ITEMS_PLACEHOLDER.to_string()])
        );
        assert_eq!(
            fields[6].value,
            FieldValue::Items(vec![NO_FINDINGS_PLACEHOLDER.to_string()])
        );
    }

    #[test]
    fn empty_lists_fall_back_to_placeholders() {
        assert_eq!(items_lines(&[]), vec![EMPTY_ITEMS_PLACEHOLDER.to_string()]);
        assert_eq!(counts_lines(&[]), vec![EMPTY_COUNTS_PLACEHOLDER.to_string()]);
        let lines = counts_lines(&[("2023".to_string(), "4".to_string())]);
        assert_eq!(lines, vec!["2023: 4".to_string()]);
    }
}
