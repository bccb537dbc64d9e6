//! Record marker recognition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker opening a header line.
pub const HEADER_PREFIX: &str = "H,";
/// Marker opening an item (body) line.
pub const ITEM_PREFIX: &str = "B,";
/// Marker opening a comment line.
pub const COMMENT_PREFIX: &str = "C,";

/// Kind of a raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Header,
    Item,
    Comment,
    Unknown,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Header => "header",
            LineKind::Item => "item",
            LineKind::Comment => "comment",
            LineKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Classify a line by its literal marker. Leading whitespace is not skipped.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(HEADER_PREFIX) {
        LineKind::Header
    } else if line.starts_with(ITEM_PREFIX) {
        LineKind::Item
    } else if line.starts_with(COMMENT_PREFIX) {
        LineKind::Comment
    } else {
        LineKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(classify("H,BA1,FV"), LineKind::Header);
        assert_eq!(classify("B,P1,Produkt"), LineKind::Item);
        assert_eq!(classify("C,anything goes here"), LineKind::Comment);
        assert_eq!(classify("C,"), LineKind::Comment);
    }

    #[test]
    fn test_unknown_lines() {
        assert_eq!(classify(""), LineKind::Unknown);
        assert_eq!(classify("   "), LineKind::Unknown);
        assert_eq!(classify("X,bad"), LineKind::Unknown);
        assert_eq!(classify("H"), LineKind::Unknown);
        assert_eq!(classify("h,lowercase"), LineKind::Unknown);
        assert_eq!(classify(" H,leading space"), LineKind::Unknown);
        assert_eq!(classify("H;semicolon"), LineKind::Unknown);
    }

    #[test]
    fn test_bare_markers() {
        assert_eq!(classify(HEADER_PREFIX), LineKind::Header);
        assert_eq!(classify(ITEM_PREFIX), LineKind::Item);
        assert_eq!(classify(COMMENT_PREFIX), LineKind::Comment);
    }
}
