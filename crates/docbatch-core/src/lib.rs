//! Core library for commercial document batch processing.
//!
//! This crate provides:
//! - Line classification for the `H,` / `B,` / `C,` record format
//! - Field decoding with fixed-point amounts and fixed date patterns
//! - Document assembly and whole-batch validation
//! - Batch summaries and a small line-reading adapter

pub mod aggregate;
pub mod batch;
pub mod error;
pub mod models;
pub mod source;
pub mod summary;

pub use aggregate::{collect_all, partition_results};
pub use batch::{DocumentDataParser, DocumentParser, LineKind, classify};
pub use error::{BatchError, DocbatchError, FieldError, Result};
pub use models::config::{DocbatchConfig, ParserConfig, SummaryConfig};
pub use models::document::{Batch, Document, DocumentHeader, DocumentItem};
pub use source::{read_lines, read_lines_from_path};
pub use summary::BatchSummary;
