//! Folding decoded records into documents.

use tracing::debug;

use crate::models::document::{Document, DocumentHeader, DocumentItem};

/// Assembly state between two lines.
#[derive(Debug, Default)]
enum State {
    #[default]
    NoOpenDocument,
    OpenDocument {
        header: DocumentHeader,
        items: Vec<DocumentItem>,
    },
}

/// Groups headers and their trailing items into sealed documents.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    sealed: Vec<Document>,
    state: State,
}

/// What happened to an item passed to [`DocumentAssembler::push_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPlacement {
    /// Appended to the open document.
    Appended,
    /// No document was open; the item was discarded.
    Dropped,
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seal the open document, if any, and open a new one.
    pub fn open(&mut self, header: DocumentHeader) {
        self.seal();
        self.state = State::OpenDocument {
            header,
            items: Vec::new(),
        };
    }

    /// Append an item to the open document.
    pub fn push_item(&mut self, item: DocumentItem) -> ItemPlacement {
        match &mut self.state {
            State::OpenDocument { items, .. } => {
                items.push(item);
                ItemPlacement::Appended
            }
            State::NoOpenDocument => ItemPlacement::Dropped,
        }
    }

    /// Seal the open document and return every document in input order.
    ///
    /// Documents without items are returned as well; rejecting them is
    /// left to batch validation.
    pub fn finish(mut self) -> Vec<Document> {
        self.seal();
        self.sealed
    }

    fn seal(&mut self) {
        if let State::OpenDocument { header, items } = std::mem::take(&mut self.state) {
            debug!(
                document_number = header.document_number,
                items = items.len(),
                "sealed document"
            );
            self.sealed.push(Document::new(header, items));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::fixtures::{header, item};
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_assembler() {
        assert!(DocumentAssembler::new().finish().is_empty());
    }

    #[test]
    fn test_items_follow_latest_header() {
        let mut assembler = DocumentAssembler::new();
        assembler.open(header(1));
        assert_eq!(assembler.push_item(item("A", Decimal::ONE)), ItemPlacement::Appended);
        assembler.open(header(2));
        assembler.push_item(item("B", Decimal::ONE));
        assembler.push_item(item("C", Decimal::ONE));

        let documents = assembler.finish();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].number(), 1);
        assert_eq!(documents[0].items().len(), 1);
        assert_eq!(documents[1].number(), 2);
        assert_eq!(documents[1].items()[1].product_name, "C");
    }

    #[test]
    fn test_item_without_header_is_dropped() {
        let mut assembler = DocumentAssembler::new();
        assert_eq!(assembler.push_item(item("A", Decimal::ONE)), ItemPlacement::Dropped);
        assembler.open(header(1));

        let documents = assembler.finish();
        assert_eq!(documents.len(), 1);
        assert!(documents[0].items().is_empty());
    }

    #[test]
    fn test_consecutive_headers_seal_empty_documents() {
        let mut assembler = DocumentAssembler::new();
        assembler.open(header(1));
        assembler.open(header(2));

        let numbers: Vec<i64> = assembler.finish().iter().map(Document::number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
