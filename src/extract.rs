//! Document text extraction.
//!
//! Converts an uploaded binary document into plain text, dispatching on a
//! closed format tag. Everything downstream of this module sees only the
//! extracted string.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::EvalError;

/// Supported document formats.
///
/// The format is declared by the file name's final extension, not sniffed
/// from content; a `.pdf` that is really a zip archive fails later with an
/// extraction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Resolve a format tag from a path's final extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, EvalError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            _ => Err(EvalError::UnsupportedFormat { extension }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract plain text from document bytes.
///
/// The match below is the complete extractor table: adding a format variant
/// without wiring an extraction path is a compile error.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, EvalError> {
    match format {
        DocumentFormat::Docx => extract_text_from_docx(bytes),
        DocumentFormat::Pdf => extract_text_from_pdf(bytes),
    }
}

/// One `<w:p>` element, with or without runs. Self-closing paragraphs carry
/// no text but still count as a line.
static PARAGRAPH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:p(?: [^>]*)?>.*?</w:p>|<w:p\s*/>").unwrap());

/// A single `<w:t>` text run inside a paragraph.
static RUN_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:t[^>]*>(.*?)</w:t>").unwrap());

/// Read `word/document.xml` out of the docx zip container and join every
/// paragraph's run text with newlines, in document order.
fn extract_text_from_docx(bytes: &[u8]) -> Result<String, EvalError> {
    let docx_err = |message: String| EvalError::Extraction {
        format: DocumentFormat::Docx,
        message,
    };

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| docx_err(format!("not a docx container: {e}")))?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| docx_err(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| docx_err(format!("unreadable word/document.xml: {e}")))?;

    let paragraphs: Vec<String> = PARAGRAPH_REGEX
        .find_iter(&document_xml)
        .map(|p| paragraph_text(p.as_str()))
        .collect();
    Ok(paragraphs.join("\n"))
}

/// Concatenated run text of one paragraph, XML entities decoded.
fn paragraph_text(paragraph_xml: &str) -> String {
    RUN_TEXT_REGEX
        .captures_iter(paragraph_xml)
        .map(|c| html_escape::decode_html_entities(&c[1]).into_owned())
        .collect::<Vec<_>>()
        .concat()
}

/// pdf-extract walks pages in document order; a page without a text layer
/// contributes nothing instead of failing the whole document.
fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, EvalError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| EvalError::Extraction {
        format: DocumentFormat::Pdf,
        message: e.to_string(),
    })
}
