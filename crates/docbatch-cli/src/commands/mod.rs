//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use docbatch_core::{Batch, BatchSummary, DocbatchConfig, DocumentParser, read_lines_from_path};

/// Parsed documents of one file together with their summary.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub documents: Batch,
    pub summary: BatchSummary,
}

/// Load the config file given on the command line, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocbatchConfig> {
    match config_path {
        Some(path) => DocbatchConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Ok(DocbatchConfig::default()),
    }
}

/// Read, parse and summarize one batch file.
pub fn parse_file(path: &Path, parser: &DocumentParser, x: usize) -> anyhow::Result<FileReport> {
    let lines = read_lines_from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let documents = parser
        .parse(&lines)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let summary = BatchSummary::compute(&lines, &documents, x);
    debug!(
        "Parsed {} documents from {}",
        documents.len(),
        path.display()
    );

    Ok(FileReport { documents, summary })
}
