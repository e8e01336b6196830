//! PDF report generator.
//!
//! Builds the document object-by-object with lopdf: a page tree, two
//! base-14 Helvetica fonts, and one content stream per page. Base-14 fonts
//! need no embedded font program, so rendering depends only on the bytes
//! produced here, never on fonts installed on the host.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::EvalError;
use crate::report::{counts_lines, items_lines, summary_fields, FieldValue, REPORT_TITLE};
use crate::summary::EvaluationSummary;

// A4 in points, with the text frame the composer writes into.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN_X: i64 = 48;
const TOP_Y: i64 = 794;
const BOTTOM_Y: i64 = 48;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";
const TITLE_SIZE: i64 = 16;
const HEADING_SIZE: i64 = 14;
const BODY_SIZE: i64 = 11;

/// Column count that keeps 11pt Helvetica inside the text frame.
const WRAP_COLUMNS: usize = 90;

/// Render the summary as a complete PDF document.
pub fn render_pdf(summary: &EvaluationSummary) -> Result<Vec<u8>, EvalError> {
    let pdf_err = |message: String| EvalError::Serialization {
        format: "pdf",
        message,
    };

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in compose(summary) {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| pdf_err(format!("could not encode content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| pdf_err(format!("could not write document: {e}")))?;
    Ok(bytes)
}

/// Lay the report out as per-page operation lists.
fn compose(summary: &EvaluationSummary) -> Vec<Vec<Operation>> {
    let mut composer = PageComposer::new();
    composer.text_line(BOLD_FONT, TITLE_SIZE, centered_x(REPORT_TITLE, TITLE_SIZE), REPORT_TITLE);
    composer.gap(10);
    for field in summary_fields(summary) {
        composer.gap(6);
        composer.text_line(BOLD_FONT, HEADING_SIZE, MARGIN_X, &field.title.to_uppercase());
        match &field.value {
            FieldValue::Text(text) => {
                for line in wrap_line(text, WRAP_COLUMNS) {
                    composer.text_line(REGULAR_FONT, BODY_SIZE, MARGIN_X, &line);
                }
            }
            FieldValue::Items(items) => {
                for item in items_lines(items) {
                    bullet(&mut composer, &item);
                }
            }
            FieldValue::Counts(counts) => {
                for line in counts_lines(counts) {
                    bullet(&mut composer, &line);
                }
            }
        }
    }
    composer.finish()
}

fn bullet(composer: &mut PageComposer, text: &str) {
    let mut first = true;
    for line in wrap_line(text, WRAP_COLUMNS - 2) {
        let rendered = if first {
            format!("- {line}")
        } else {
            format!("  {line}")
        };
        composer.text_line(REGULAR_FONT, BODY_SIZE, MARGIN_X, &rendered);
        first = false;
    }
}

/// Accumulates text operations and breaks pages when the frame runs out.
struct PageComposer {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: i64,
}

impl PageComposer {
    fn new() -> Self {
        PageComposer {
            pages: Vec::new(),
            current: Vec::new(),
            y: TOP_Y,
        }
    }

    fn text_line(&mut self, font: &str, size: i64, x: i64, text: &str) {
        let advance = size + size / 3;
        if self.y - advance < BOTTOM_Y {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = TOP_Y;
        }
        self.y -= advance;
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), self.y.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(latin1_bytes(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    fn gap(&mut self, amount: i64) {
        self.y -= amount;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Rough centering from Helvetica's ~0.5em average glyph width.
fn centered_x(text: &str, size: i64) -> i64 {
    let estimated = text.chars().count() as i64 * size / 2;
    ((PAGE_WIDTH - estimated) / 2).max(MARGIN_X)
}

/// WinAnsi output bytes; anything past Latin-1 becomes `?`.
fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

/// Greedy word wrap at the column limit. Words longer than the limit
/// (URLs, DOIs) get hard-split.
fn wrap_line(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > columns {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > columns {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(columns) {
                if chunk.len() == columns {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
