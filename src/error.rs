//! Error types for the evaluation pipeline.
//!
//! Analyzers are total over extracted text and never fail; errors exist only
//! at the document boundaries: format dispatch, decoding, and report
//! serialization. Absence of a match is a value (`Detected::NotFound`, an
//! empty list, an empty map), never an error.

use crate::extract::DocumentFormat;

/// Top-level error type for the paperlens library.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The input file's extension is not one of the supported formats.
    #[error("unsupported file format: \"{extension}\" (expected docx or pdf)")]
    UnsupportedFormat { extension: String },

    /// The underlying document decode failed (corrupt or misnamed file).
    #[error("could not extract text from {format} document: {message}")]
    Extraction {
        format: DocumentFormat,
        message: String,
    },

    /// A report generator failed while encoding the evaluation summary.
    /// With a well-formed summary this indicates an internal invariant
    /// violation in the writer, not a user mistake.
    #[error("could not serialize {format} report: {message}")]
    Serialization {
        format: &'static str,
        message: String,
    },
}
