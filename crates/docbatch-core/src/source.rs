//! Reading text sources into line sequences.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{DocbatchError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read all lines of a UTF-8 text source.
///
/// `\n`, `\r\n` and a lone `\r` all end a line; a terminator at the very end
/// adds no empty line. A leading byte-order mark is dropped. Any I/O or
/// encoding failure is reported as [`DocbatchError::Read`].
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut content = String::new();
    BufReader::new(reader)
        .read_to_string(&mut content)
        .map_err(DocbatchError::Read)?;

    let text = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&content);
    Ok(split_lines(text))
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(rest[..pos].to_string());
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}

/// Read all lines of the file at `path`.
pub fn read_lines_from_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(DocbatchError::Read)?;
    let lines = read_lines(file)?;
    debug!(path = %path.display(), lines = lines.len(), "read input file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_lines() {
        let input = "H,a\nB,b\r\nC,c";
        let lines = read_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["H,a", "B,b", "C,c"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let lines = read_lines("H,a\rB,b\rC,c".as_bytes()).unwrap();
        assert_eq!(lines, vec!["H,a", "B,b", "C,c"]);
    }

    #[test]
    fn test_mixed_line_endings() {
        let lines = read_lines("H,a\r\nB,b\rB,c\nC,d\r".as_bytes()).unwrap();
        assert_eq!(lines, vec!["H,a", "B,b", "B,c", "C,d"]);
    }

    #[test]
    fn test_consecutive_carriage_returns_keep_blank_line() {
        let lines = read_lines("H,a\r\rB,b".as_bytes()).unwrap();
        assert_eq!(lines, vec!["H,a", "", "B,b"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let lines = read_lines("H,a\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["H,a"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines = read_lines("H,a\n\nB,b\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["H,a", "", "B,b"]);
    }

    #[test]
    fn test_byte_order_mark_dropped() {
        let lines = read_lines("\u{feff}H,a\nB,b".as_bytes()).unwrap();
        assert_eq!(lines[0], "H,a");
    }

    #[test]
    fn test_empty_source() {
        assert!(read_lines("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: &[u8] = &[b'H', b',', 0xff, 0xfe, b'\n'];
        let err = read_lines(bytes).unwrap_err();
        assert!(matches!(err, DocbatchError::Read(_)));
        assert!(err.to_string().starts_with("cannot read file content"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines_from_path(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, DocbatchError::Read(_)));
    }

    #[test]
    fn test_read_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.txt");
        std::fs::write(&path, "C,one\nC,two\n").unwrap();

        assert_eq!(read_lines_from_path(&path).unwrap(), vec!["C,one", "C,two"]);
    }
}
