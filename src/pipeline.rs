//! End-to-end evaluation pipeline.
//!
//! Extracted text feeds a set of independent analyzers whose results are
//! aggregated into an [`Evaluation`]. Everything here is synchronous and,
//! past decoding the input bytes, pure.

use crate::analysis::data_type::classify_data_type;
use crate::analysis::findings::extract_findings;
use crate::analysis::journals::extract_journals;
use crate::analysis::keywords::find_keywords;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::style::detect_ai_style;
use crate::analysis::years::recent_year_histogram;
use crate::error::EvalError;
use crate::extract::{extract_text, DocumentFormat};
use crate::summary::{Evaluation, EvaluationSummary};

/// Run every analyzer over already-extracted text and aggregate the results.
///
/// Total over any input: an empty string evaluates to empty collections,
/// `NotClear` data, and absent journals/findings, never an error.
pub fn evaluate_text(text: &str, lexicon: &Lexicon, current_year: i32) -> Evaluation {
    let summary = EvaluationSummary {
        methodology: find_keywords(text, lexicon.methodology),
        data_type: classify_data_type(text, lexicon),
        analysis_tools: find_keywords(text, lexicon.analysis_tools),
        frameworks: find_keywords(text, lexicon.frameworks),
        journals: extract_journals(text),
        recent_references: recent_year_histogram(text, current_year),
        key_findings: extract_findings(text, lexicon),
    };
    Evaluation {
        summary,
        writing_style: detect_ai_style(text, lexicon),
    }
}

/// Decode a document and evaluate its text.
pub fn evaluate_document(
    bytes: &[u8],
    format: DocumentFormat,
    lexicon: &Lexicon,
    current_year: i32,
) -> Result<Evaluation, EvalError> {
    let text = extract_text(bytes, format)?;
    Ok(evaluate_text(&text, lexicon, current_year))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;
    use crate::analysis::data_type::DataType;
    use crate::analysis::style::WritingStyle;
    use crate::analysis::Detected;

    const SAMPLE_PAPER: &str = "\
Capital Buffers and Bank Risk\n\
Abstract\n\
We examine capital buffers using panel data from 1,200 banks. \
Our findings show that larger buffers reduce insolvency risk. \
Results indicate the effect is strongest for small lenders.\n\
1. Introduction\n\
Agency theory motivates our quantitative design. Estimation uses \
regression and 2SLS in Stata alongside SPSS robustness checks.\n\
References\n\
Berger, A. (2021). Bank capital. Journal of Banking and Finance, 121(4), 1-22.\n\
Boyd, J. (2023). Risk shifting. Review of Financial Studies, 36(2), 15-40.\n\
Boyd, J. (2023). More risk. Review of Financial Studies, 36(3), 41-60.\n";

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn paragraphs_xml(text: &str) -> String {
        let body: String = text
            .lines()
            .map(|line| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", html_escape::encode_text(line)))
            .collect();
        format!(
            "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        )
    }

    #[test]
    fn full_docx_evaluation_covers_every_domain() {
        let bytes = docx_bytes(&paragraphs_xml(SAMPLE_PAPER));
        let evaluation =
            evaluate_document(&bytes, DocumentFormat::Docx, &Lexicon::STANDARD, 2024).unwrap();
        let summary = &evaluation.summary;

        assert_eq!(summary.methodology, vec!["quantitative"]);
        assert_eq!(summary.data_type, DataType::Secondary);
        assert_eq!(summary.analysis_tools, vec!["SPSS", "Stata ", "regression", "2SLS"]);
        assert_eq!(summary.frameworks, vec!["agency theory"]);

        let journals = summary.journals.found().expect("journals expected");
        assert!(journals.contains("Journal of Banking and Finance"));
        assert!(journals.contains("Review of Financial Studies"));
        assert_eq!(journals.len(), 2);

        assert_eq!(summary.recent_references.get(&2021), Some(&1));
        assert_eq!(summary.recent_references.get(&2023), Some(&2));

        let findings = summary.key_findings.found().expect("findings expected");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].starts_with("Our findings show"));

        assert_eq!(evaluation.writing_style.style, WritingStyle::Natural);
    }

    #[test]
    fn empty_text_evaluates_to_absences_not_errors() {
        let evaluation = evaluate_text("", &Lexicon::STANDARD, 2024);
        let summary = &evaluation.summary;
        assert!(summary.methodology.is_empty());
        assert_eq!(summary.data_type, DataType::NotClear);
        assert!(summary.analysis_tools.is_empty());
        assert!(summary.frameworks.is_empty());
        assert_eq!(summary.journals, Detected::NotFound);
        assert!(summary.recent_references.is_empty());
        assert_eq!(summary.key_findings, Detected::NotFound);
        assert_eq!(evaluation.writing_style.phrase_count, 0);
    }

    #[test]
    fn evaluation_serializes_with_tagged_absences() {
        let evaluation = evaluate_text("", &Lexicon::STANDARD, 2024);
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["summary"]["journals"], serde_json::json!("NotFound"));
        assert_eq!(json["summary"]["data_type"], serde_json::json!("NotClear"));
    }

    #[test]
    fn corrupt_document_surfaces_an_extraction_error() {
        let result =
            evaluate_document(b"not a zip", DocumentFormat::Docx, &Lexicon::STANDARD, 2024);
        assert!(matches!(result, Err(EvalError::Extraction { .. })));
    }
}
