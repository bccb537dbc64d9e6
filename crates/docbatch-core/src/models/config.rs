//! Configuration structures for batch parsing.

use serde::{Deserialize, Serialize};

use crate::error::{DocbatchError, Result};

/// Default pattern for header date fields (`01-01-2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Main configuration for docbatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocbatchConfig {
    /// Line parser configuration.
    pub parser: ParserConfig,

    /// Batch summary configuration.
    pub summary: SummaryConfig,
}

/// Line parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// chrono pattern used for every date field.
    pub date_format: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Batch summary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Documents with more items than this are counted in the summary.
    pub item_threshold: usize,
}

impl DocbatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(DocbatchError::Read)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| DocbatchError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DocbatchError::Config(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| DocbatchError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Reject settings the parser cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.parser.date_format.trim().is_empty() {
            return Err(DocbatchError::Config(
                "parser.date_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
