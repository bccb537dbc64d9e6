//! Aggregate figures computed over a parsed batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::document::Batch;

/// Summary of one input file and the batch parsed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of input lines.
    pub line_count: usize,

    /// Number of characters over all input lines, terminators excluded.
    pub char_count: usize,

    /// Sum of header gross amounts.
    pub sum: Decimal,

    /// Item threshold used for `x_count`.
    pub x: usize,

    /// Number of documents with more than `x` items.
    pub x_count: usize,

    /// Largest item net value in the batch.
    pub max_net_value: Decimal,

    /// Product name of the item with the largest net value.
    pub product_with_max_net_value: String,
}

impl BatchSummary {
    /// Compute the summary for `batch`, parsed from `lines`.
    pub fn compute<S: AsRef<str>>(lines: &[S], batch: &Batch, x: usize) -> Self {
        let char_count = lines.iter().map(|l| l.as_ref().chars().count()).sum();
        let sum = batch.iter().map(|d| d.header().gross).sum();
        let x_count = batch.iter().filter(|d| d.items().len() > x).count();

        // First item wins on ties; a validated batch always has one.
        let mut max_item: Option<(Decimal, &str)> = None;
        for item in batch.items() {
            if max_item.is_none_or(|(value, _)| item.net_value > value) {
                max_item = Some((item.net_value, item.product_name.as_str()));
            }
        }
        let (max_net_value, product) = max_item.unwrap_or((Decimal::ZERO, ""));

        Self {
            line_count: lines.len(),
            char_count,
            sum,
            x,
            x_count,
            max_net_value,
            product_with_max_net_value: product.to_string(),
        }
    }
}
