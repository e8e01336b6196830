//! Heuristic screening of research papers.
//!
//! Extracts plain text from a .docx or PDF manuscript and runs a set of
//! independent analyzers over it: methodology terms, data type, analysis
//! tooling, theoretical frameworks, cited journals, reference recency, key
//! findings, and a stock-phrase writing-style check. Results aggregate into
//! an [`Evaluation`] that renders to Word, PDF, and CSV artifacts.
//!
//! The analyzers are substring and pattern heuristics with no semantic
//! understanding. They answer "worth a closer look?", not "is this paper
//! sound?".

pub mod analysis;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod summary;

pub use analysis::lexicon::Lexicon;
pub use error::EvalError;
pub use extract::{extract_text, DocumentFormat};
pub use pipeline::{evaluate_document, evaluate_text};
pub use summary::{Evaluation, EvaluationSummary};
