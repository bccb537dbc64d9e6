//! Document batch parsing: line classification, field decoding and
//! document assembly.

mod assembler;
mod classifier;
mod fields;
mod parser;

pub use assembler::{DocumentAssembler, ItemPlacement};
pub use classifier::{COMMENT_PREFIX, HEADER_PREFIX, ITEM_PREFIX, LineKind, classify};
pub use fields::{FieldDecoder, HEADER_FIELD_COUNT, ITEM_FIELD_COUNT};
pub use parser::{DocumentDataParser, DocumentParser};
