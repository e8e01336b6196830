//! Word (.docx) report generator.
//!
//! Assembles a minimal WordprocessingML package by hand: four XML parts in
//! a zip container. Paragraph styling rides on named styles (`Title`,
//! `Heading2`, `ListBullet`) so any Word-compatible reader renders the
//! sections, and the plain run text survives round-tripping through the
//! docx text extractor.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::EvalError;
use crate::report::{counts_lines, items_lines, summary_fields, FieldValue, REPORT_TITLE};
use crate::summary::EvaluationSummary;

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

const DOCUMENT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    r#"</Relationships>"#,
);

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:rPr><w:b/><w:sz w:val="56"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:pPr><w:ind w:left="720"/></w:pPr></w:style>"#,
    r#"</w:styles>"#,
);

/// Render the summary as a complete .docx package.
pub fn render_docx(summary: &EvaluationSummary) -> Result<Vec<u8>, EvalError> {
    let docx_err = |message: String| EvalError::Serialization {
        format: "docx",
        message,
    };

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
        ("word/styles.xml", STYLES_XML.to_string()),
        ("word/document.xml", document_xml(summary)),
    ];
    for (name, content) in parts {
        writer
            .start_file(name, options)
            .map_err(|e| docx_err(format!("could not start part {name}: {e}")))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| docx_err(format!("could not write part {name}: {e}")))?;
    }
    let cursor = writer
        .finish()
        .map_err(|e| docx_err(format!("could not finish package: {e}")))?;
    Ok(cursor.into_inner())
}

/// The main document part: title, then one heading plus body per field.
fn document_xml(summary: &EvaluationSummary) -> String {
    let mut body = String::new();
    body.push_str(&styled_paragraph("Title", REPORT_TITLE));
    for field in summary_fields(summary) {
        body.push_str(&styled_paragraph("Heading2", field.title));
        match &field.value {
            FieldValue::Text(text) => body.push_str(&plain_paragraph(text)),
            FieldValue::Items(items) => {
                for line in items_lines(items) {
                    body.push_str(&styled_paragraph("ListBullet", &line));
                }
            }
            FieldValue::Counts(counts) => {
                for line in counts_lines(counts) {
                    body.push_str(&styled_paragraph("ListBullet", &line));
                }
            }
        }
    }
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            r#"<w:body>{body}<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body>"#,
            r#"</w:document>"#,
        ),
        body = body
    )
}

fn styled_paragraph(style_id: &str, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="{style_id}"/></w:pPr>{run}</w:p>"#,
        run = text_run(text)
    )
}

fn plain_paragraph(text: &str) -> String {
    format!("<w:p>{run}</w:p>", run = text_run(text))
}

/// One literal-text run. `xml:space="preserve"` keeps the leading and
/// trailing spaces that padded catalog entries such as `" SEM "` carry.
fn text_run(text: &str) -> String {
    format!(
        r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
        html_escape::encode_text(text)
    )
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::analysis::Detected;
    use crate::extract::{extract_text, DocumentFormat};
    use crate::report::fixtures::{empty_summary, sample_summary};

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn package_carries_all_four_parts() {
        let bytes = render_docx(&sample_summary()).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/document.xml",
        ] {
            assert!(!part(&bytes, name).is_empty(), "missing part {name}");
        }
    }

    #[test]
    fn rendered_text_round_trips_through_the_extractor() {
        let bytes = render_docx(&sample_summary()).unwrap();
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        let expected = "\
Research Paper Evaluation Summary\n\
Methodology\n\
quantitative\n\
Data Type\n\
Secondary\n\
Data Analysis Tools\n\
SPSS\n\
regression\n\
Theoretical Frameworks\n\
agency theory\n\
Journals Used\n\
Accounting Review\n\
Journal of Finance\n\
Recent References\n\
2023: 4\n\
2021: 1\n\
Key Findings\n\
Our findings show buffers reduce risk.";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_summary_renders_placeholder_bullets() {
        let bytes = render_docx(&empty_summary()).unwrap();
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert!(text.contains("Methodology\nNot Found"));
        assert!(text.contains("Data Type\nNot Clear"));
        assert!(text.contains("Recent References\nNone"));
        assert!(text.contains("Key Findings\nNot clearly mentioned"));
    }

    #[test]
    fn reserved_xml_characters_are_escaped() {
        let mut summary = sample_summary();
        summary.key_findings = Detected::Found(vec![
            "Findings reveal that R&D <spending> improves \"quality\".".to_string(),
        ]);
        let bytes = render_docx(&summary).unwrap();

        let document = part(&bytes, "word/document.xml");
        assert!(document.contains("R&amp;D"));
        assert!(!document.contains("<spending>"));

        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert!(text.contains("Findings reveal that R&D <spending> improves \"quality\"."));
    }

    #[test]
    fn headings_use_named_styles() {
        let bytes = render_docx(&sample_summary()).unwrap();
        let document = part(&bytes, "word/document.xml");
        assert!(document.contains(r#"<w:pStyle w:val="Title"/>"#));
        assert!(document.contains(r#"<w:pStyle w:val="Heading2"/>"#));
        assert!(document.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
    }
}
