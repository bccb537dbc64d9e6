//! Error types for the docbatch-core library.

use std::fmt;

use thiserror::Error;

use crate::batch::LineKind;

/// Main error type for the docbatch library.
#[derive(Error, Debug)]
pub enum DocbatchError {
    /// Batch parsing or validation error.
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// The line source could not be read.
    #[error("cannot read file content: {0}")]
    Read(#[source] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors produced while turning lines into a batch of documents.
///
/// Line-level variants carry the 0-based index of the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The line does not start with a known record marker.
    #[error("invalid data format, unknown line (line index: {line_index})")]
    UnrecognizedLine { line_index: usize },

    /// A header or item line could not be decoded.
    #[error("error during parsing document {kind} line (line index: {line_index}): {source}")]
    FieldDecode {
        line_index: usize,
        kind: LineKind,
        #[source]
        source: FieldError,
    },

    /// The input contained no documents at all.
    #[error("no documents present")]
    EmptyBatch,

    /// One or more documents were sealed without any items.
    #[error("documents without items: {}", DocumentNumbers(.document_numbers))]
    EmptyDocuments { document_numbers: Vec<i64> },
}

impl BatchError {
    /// Index of the offending line, for line-level failures.
    pub fn line_index(&self) -> Option<usize> {
        match self {
            BatchError::UnrecognizedLine { line_index }
            | BatchError::FieldDecode { line_index, .. } => Some(*line_index),
            BatchError::EmptyBatch | BatchError::EmptyDocuments { .. } => None,
        }
    }
}

/// Reasons a single record failed to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Wrong number of fields after the record marker.
    #[error("expected {expected} fields, found {found}")]
    Count { expected: usize, found: usize },

    /// Integer field did not parse.
    #[error("invalid integer for {field}: '{value}'")]
    Integer { field: &'static str, value: String },

    /// Decimal field did not parse.
    #[error("invalid decimal for {field}: '{value}'")]
    Decimal { field: &'static str, value: String },

    /// Date field did not match the configured pattern.
    #[error("invalid date for {field}: '{value}' (expected format {format})")]
    Date {
        field: &'static str,
        value: String,
        format: String,
    },
}

struct DocumentNumbers<'a>(&'a [i64]);

impl fmt::Display for DocumentNumbers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}

/// Result type for the docbatch library.
pub type Result<T> = std::result::Result<T, DocbatchError>;
