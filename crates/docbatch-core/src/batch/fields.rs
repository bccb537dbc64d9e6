//! Field-level decoding of header and item records.
//!
//! A record line is split on `,`, every field is trimmed and the first token
//! (the record marker) is dropped. The remaining fields are mapped by position.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{BatchError, FieldError};
use crate::models::config::{DEFAULT_DATE_FORMAT, ParserConfig};
use crate::models::document::{DocumentHeader, DocumentItem};

use super::classifier::LineKind;

/// Number of fields after the marker in a header record.
pub const HEADER_FIELD_COUNT: usize = 15;
/// Number of fields after the marker in an item record.
pub const ITEM_FIELD_COUNT: usize = 11;

/// Decodes classified record lines into typed records.
#[derive(Debug, Clone)]
pub struct FieldDecoder {
    date_format: String,
}

impl FieldDecoder {
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new().with_date_format(config.date_format.clone())
    }

    /// Set the chrono pattern used for date fields.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Decode a header line (`H,...`).
    pub fn decode_header(&self, line: &str, line_index: usize) -> Result<DocumentHeader, BatchError> {
        self.read_header(line).map_err(|source| BatchError::FieldDecode {
            line_index,
            kind: LineKind::Header,
            source,
        })
    }

    /// Decode an item line (`B,...`).
    pub fn decode_item(&self, line: &str, line_index: usize) -> Result<DocumentItem, BatchError> {
        self.read_item(line).map_err(|source| BatchError::FieldDecode {
            line_index,
            kind: LineKind::Item,
            source,
        })
    }

    fn read_header(&self, line: &str) -> Result<DocumentHeader, FieldError> {
        let mut fields = FieldReader::new(line, HEADER_FIELD_COUNT, &self.date_format)?;

        Ok(DocumentHeader {
            branch_code: fields.text(),
            type_code: fields.text(),
            document_number: fields.integer("document_number")?,
            operation_date: fields.date("operation_date")?,
            day_sequence_number: fields.integer("day_sequence_number")?,
            counterparty_code: fields.text(),
            counterparty_name: fields.text(),
            external_document_number: fields.text(),
            external_document_date: fields.date("external_document_date")?,
            net: fields.decimal("net")?,
            vat: fields.decimal("vat")?,
            gross: fields.decimal("gross")?,
            f1: fields.decimal("f1")?,
            f2: fields.decimal("f2")?,
            f3: fields.decimal("f3")?,
        })
    }

    fn read_item(&self, line: &str) -> Result<DocumentItem, FieldError> {
        let mut fields = FieldReader::new(line, ITEM_FIELD_COUNT, &self.date_format)?;

        Ok(DocumentItem {
            product_code: fields.text(),
            product_name: fields.text(),
            quantity: fields.decimal("quantity")?,
            unit_net_price: fields.decimal("unit_net_price")?,
            net_value: fields.decimal("net_value")?,
            vat: fields.decimal("vat")?,
            quantity_before: fields.decimal("quantity_before")?,
            average_price_before: fields.decimal("average_price_before")?,
            quantity_after: fields.decimal("quantity_after")?,
            average_price_after: fields.decimal("average_price_after")?,
            group_code: fields.text(),
        })
    }
}

impl Default for FieldDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Positional reader over the trimmed fields of one record.
struct FieldReader<'a> {
    fields: std::vec::IntoIter<&'a str>,
    date_format: &'a str,
}

impl<'a> FieldReader<'a> {
    fn new(line: &'a str, expected: usize, date_format: &'a str) -> Result<Self, FieldError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).skip(1).collect();

        if fields.len() != expected {
            return Err(FieldError::Count {
                expected,
                found: fields.len(),
            });
        }

        Ok(Self {
            fields: fields.into_iter(),
            date_format,
        })
    }

    // The field count is checked up front, so the iterator never runs dry.
    fn take(&mut self) -> &'a str {
        self.fields.next().unwrap_or_default()
    }

    fn text(&mut self) -> String {
        self.take().to_string()
    }

    fn integer(&mut self, field: &'static str) -> Result<i64, FieldError> {
        let value = self.take();
        value.parse::<i64>().map_err(|_| FieldError::Integer {
            field,
            value: value.to_string(),
        })
    }

    fn decimal(&mut self, field: &'static str) -> Result<Decimal, FieldError> {
        let value = self.take();
        let invalid = || FieldError::Decimal {
            field,
            value: value.to_string(),
        };

        if !is_plain_decimal(value) {
            return Err(invalid());
        }
        Decimal::from_str(value).map_err(|_| invalid())
    }

    // The value must render back to itself, so `1-1-2024` fails `%d-%m-%Y`.
    fn date(&mut self, field: &'static str) -> Result<NaiveDate, FieldError> {
        let value = self.take();
        NaiveDate::parse_from_str(value, self.date_format)
            .ok()
            .filter(|date| date.format(self.date_format).to_string() == value)
            .ok_or_else(|| FieldError::Date {
                field,
                value: value.to_string(),
                format: self.date_format.to_string(),
            })
    }
}

/// Optional sign, digits, then optionally `.` and more digits.
fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(['-', '+'])
        .unwrap_or(value);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    !integer.is_empty()
        && all_digits(integer)
        && fraction.is_none_or(|f| !f.is_empty() && all_digits(f))
}
