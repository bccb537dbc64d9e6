//! Commercial document data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BatchError;

/// Header record opening a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// Branch code (kod BA).
    pub branch_code: String,

    /// Document type code, e.g. `FV`.
    pub type_code: String,

    /// Document number, used as the document identifier.
    pub document_number: i64,

    /// Operation date.
    pub operation_date: NaiveDate,

    /// Sequence number of the document within its day.
    pub day_sequence_number: i64,

    /// Counterparty code.
    pub counterparty_code: String,

    /// Counterparty name.
    pub counterparty_name: String,

    /// External document number. Not numeric, may contain any characters.
    pub external_document_number: String,

    /// External document date.
    pub external_document_date: NaiveDate,

    /// Net total.
    pub net: Decimal,

    /// VAT total.
    pub vat: Decimal,

    /// Gross total.
    pub gross: Decimal,

    pub f1: Decimal,
    pub f2: Decimal,
    pub f3: Decimal,
}

/// A single line item of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    /// Product code.
    pub product_code: String,

    /// Product name.
    pub product_name: String,

    /// Quantity.
    pub quantity: Decimal,

    /// Unit price (net).
    pub unit_net_price: Decimal,

    /// Net value of the line.
    pub net_value: Decimal,

    /// VAT amount of the line.
    pub vat: Decimal,

    /// Stock quantity before the operation.
    pub quantity_before: Decimal,

    /// Average price before the operation.
    pub average_price_before: Decimal,

    /// Stock quantity after the operation.
    pub quantity_after: Decimal,

    /// Average price after the operation.
    pub average_price_after: Decimal,

    /// Product group code.
    pub group_code: String,
}

/// A sealed document: one header and its items in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    header: DocumentHeader,
    items: Vec<DocumentItem>,
}

impl Document {
    pub fn new(header: DocumentHeader, items: Vec<DocumentItem>) -> Self {
        Self { header, items }
    }

    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    pub fn items(&self) -> &[DocumentItem] {
        &self.items
    }

    /// Document number from the header.
    pub fn number(&self) -> i64 {
        self.header.document_number
    }

    /// Sum of item net values.
    pub fn items_net_total(&self) -> Decimal {
        self.items.iter().map(|i| i.net_value).sum()
    }
}

/// All documents parsed from one input, in file order.
///
/// A `Batch` is only built through [`Batch::new`], which rejects an empty
/// document list and documents without items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Batch {
    documents: Vec<Document>,
}

impl Batch {
    /// Validate the sealed documents and wrap them into a batch.
    pub fn new(documents: Vec<Document>) -> Result<Self, BatchError> {
        if documents.is_empty() {
            return Err(BatchError::EmptyBatch);
        }

        let document_numbers: Vec<i64> = documents
            .iter()
            .filter(|d| d.items.is_empty())
            .map(Document::number)
            .collect();

        if !document_numbers.is_empty() {
            return Err(BatchError::EmptyDocuments { document_numbers });
        }

        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false for a validated batch.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Iterate over every item of every document, in file order.
    pub fn items(&self) -> impl Iterator<Item = &DocumentItem> {
        self.documents.iter().flat_map(|d| d.items.iter())
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn header(number: i64) -> DocumentHeader {
        DocumentHeader {
            branch_code: "BA1".to_string(),
            type_code: "FV".to_string(),
            document_number: number,
            operation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            day_sequence_number: 1,
            counterparty_code: "K1".to_string(),
            counterparty_name: "Kontrahent".to_string(),
            external_document_number: "EXT1".to_string(),
            external_document_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            net: Decimal::new(1000, 2),
            vat: Decimal::new(230, 2),
            gross: Decimal::new(1230, 2),
            f1: Decimal::ZERO,
            f2: Decimal::ZERO,
            f3: Decimal::ZERO,
        }
    }

    pub fn item(name: &str, net_value: Decimal) -> DocumentItem {
        DocumentItem {
            product_code: "P1".to_string(),
            product_name: name.to_string(),
            quantity: Decimal::ONE,
            unit_net_price: net_value,
            net_value,
            vat: Decimal::ZERO,
            quantity_before: Decimal::ZERO,
            average_price_before: Decimal::ZERO,
            quantity_after: Decimal::ZERO,
            average_price_after: Decimal::ZERO,
            group_code: "GRP".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{header, item};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_batch_rejects_empty() {
        assert_eq!(Batch::new(Vec::new()), Err(BatchError::EmptyBatch));
    }

    #[test]
    fn test_batch_reports_all_itemless_documents() {
        let documents = vec![
            Document::new(header(1), Vec::new()),
            Document::new(header(2), vec![item("A", Decimal::ONE)]),
            Document::new(header(3), Vec::new()),
        ];

        assert_eq!(
            Batch::new(documents),
            Err(BatchError::EmptyDocuments {
                document_numbers: vec![1, 3]
            })
        );
    }

    #[test]
    fn test_batch_items_in_file_order() {
        let batch = Batch::new(vec![
            Document::new(header(1), vec![item("A", Decimal::ONE), item("B", Decimal::TWO)]),
            Document::new(header(2), vec![item("C", Decimal::TEN)]),
        ])
        .unwrap();

        let names: Vec<&str> = batch.items().map(|i| i.product_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_items_net_total() {
        let doc = Document::new(
            header(1),
            vec![item("A", Decimal::new(150, 2)), item("B", Decimal::new(250, 2))],
        );
        assert_eq!(doc.items_net_total(), Decimal::new(400, 2));
    }
}
