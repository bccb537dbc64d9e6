//! Line-sequence parser producing a validated batch.

use tracing::{debug, trace, warn};

use crate::error::BatchError;
use crate::models::config::ParserConfig;
use crate::models::document::Batch;

use super::assembler::{DocumentAssembler, ItemPlacement};
use super::classifier::{LineKind, classify};
use super::fields::FieldDecoder;

/// Trait for batch parsers.
pub trait DocumentDataParser {
    /// Parse an ordered sequence of lines into a validated batch.
    fn parse_document_data(&self, lines: &[String]) -> Result<Batch, BatchError>;
}

/// Default parser for the `H,` / `B,` / `C,` record format.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    decoder: FieldDecoder,
}

impl DocumentParser {
    /// Create a parser with the default date format.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            decoder: FieldDecoder::from_config(config),
        }
    }

    /// Set the chrono pattern used for date fields.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.decoder = self.decoder.with_date_format(format);
        self
    }

    /// Parse lines into a batch.
    ///
    /// Stops at the first unknown or undecodable line. Once every line is
    /// consumed, the batch must hold at least one document and every
    /// document at least one item. Nothing is returned on failure.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Batch, BatchError> {
        let mut assembler = DocumentAssembler::new();

        for (line_index, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            match classify(line) {
                LineKind::Header => {
                    let header = self.decoder.decode_header(line, line_index)?;
                    assembler.open(header);
                }
                LineKind::Item => {
                    let item = self.decoder.decode_item(line, line_index)?;
                    if assembler.push_item(item) == ItemPlacement::Dropped {
                        warn!(line_index, "item line before any header, dropping it");
                    }
                }
                LineKind::Comment => {
                    trace!(line_index, "skipping comment line");
                }
                LineKind::Unknown => {
                    return Err(BatchError::UnrecognizedLine { line_index });
                }
            }
        }

        let documents = assembler.finish();
        let batch = Batch::new(documents)?;

        debug!(
            lines = lines.len(),
            documents = batch.len(),
            "parsed document batch"
        );

        Ok(batch)
    }
}

impl DocumentDataParser for DocumentParser {
    fn parse_document_data(&self, lines: &[String]) -> Result<Batch, BatchError> {
        self.parse(lines)
    }
}
