//! Fragment scanner for raw table documents
//!
//! Locates the value of a top-level key by walking the document text byte by
//! byte, tracking nesting depth on a fixed stack. Nothing is decoded: the
//! result is a borrowed slice of the original text, which matters for the
//! `data` section of large tables.
//!
//! Keys are found by their first literal `"key":` occurrence, so the scanner
//! relies on top-level keys appearing before any nested key of the same name
//! (as BIOM writers emit them).

mod stack;

use alloc::format;
use alloc::string::ToString;
use core::ops::Range;

use crate::format::constants::MAX_NESTING_DEPTH;
use crate::{Result, SliceError};
use stack::{DepthStack, Token};

/// The value of one key, borrowed from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pair: &'a str,
    value: &'a str,
    offset: usize,
}

impl<'a> Fragment<'a> {
    /// The value text alone, e.g. `[14, 9]`
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// The `"key": value` text, ready to be spliced into another document
    pub fn as_pair(&self) -> &'a str {
        self.pair
    }

    /// Byte range of [`Fragment::as_pair`] within the document
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.pair.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    /// The previous byte was a backslash inside a string
    Escaped,
}

/// Locate the value of `key` in `document`
///
/// Returns `Ok(None)` when the key does not occur. A returned fragment is
/// always complete: a document that ends before the value closes is a
/// [`SliceError::Truncated`] error.
pub fn locate<'a>(document: &'a str, key: &str) -> Result<Option<Fragment<'a>>> {
    let needle = format!("\"{key}\":");
    let Some(base) = document.find(needle.as_str()) else {
        return Ok(None);
    };

    let bytes = document.as_bytes();
    let mut cursor = base + needle.len();
    while cursor < bytes.len() && !is_value_start(bytes[cursor]) {
        cursor += 1;
    }
    if cursor == bytes.len() {
        return Err(truncated(key));
    }

    let start = cursor;
    let end = match Token::opened_by(bytes[start]) {
        Some(Token::Quote) => scan_string(bytes, start, key)?,
        Some(opener) => scan_container(bytes, start, opener, key)?,
        None => scan_scalar(bytes, start, key)?,
    };

    let value = document[start..end].trim_end();
    Ok(Some(Fragment {
        pair: &document[base..start + value.len()],
        value,
        offset: base,
    }))
}

/// Locate a key that the document must contain
pub fn require<'a>(document: &'a str, key: &'static str) -> Result<Fragment<'a>> {
    locate(document, key)?.ok_or(SliceError::MissingKey(key))
}

const fn is_value_start(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'-' | b'[' | b'{' | b'"' | b't' | b'f' | b'n')
}

/// Bare scalar: runs until the next structural delimiter
fn scan_scalar(bytes: &[u8], start: usize, key: &str) -> Result<usize> {
    bytes[start..]
        .iter()
        .position(|b| matches!(b, b',' | b'{' | b'}' | b']'))
        .map(|len| start + len)
        .ok_or_else(|| truncated(key))
}

/// Quoted scalar: runs through the closing quote
fn scan_string(bytes: &[u8], start: usize, key: &str) -> Result<usize> {
    let mut cursor = start + 1;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' => cursor += 2,
            b'"' => return Ok(cursor + 1),
            _ => cursor += 1,
        }
    }
    Err(truncated(key))
}

/// Array or object: runs until the opener's matching closer
fn scan_container(bytes: &[u8], start: usize, opener: Token, key: &str) -> Result<usize> {
    let mut stack = DepthStack::new();
    let pushed = stack.try_push(opener);
    debug_assert!(pushed);

    let mut state = ScanState::Scanning;
    for (cursor, &byte) in bytes.iter().enumerate().skip(start + 1) {
        if state == ScanState::Escaped {
            state = ScanState::Scanning;
            continue;
        }

        if stack.top() == Some(Token::Quote) {
            match byte {
                b'\\' => state = ScanState::Escaped,
                b'"' => {
                    stack.pop();
                }
                _ => {}
            }
            continue;
        }

        if let Some(token) = Token::opened_by(byte) {
            if !stack.try_push(token) {
                return Err(SliceError::NestingTooDeep {
                    key: key.to_string(),
                    limit: MAX_NESTING_DEPTH,
                });
            }
        } else if let Some(closer) = Token::closed_by(byte) {
            // The stack cannot be empty here: the scan returns as soon as the
            // opener is closed, so the enclosing container's closer is never read
            match stack.pop() {
                Some(open) if open == closer => {
                    if stack.is_empty() {
                        return Ok(cursor + 1);
                    }
                }
                _ => {
                    return Err(SliceError::malformed(
                        key,
                        format!("mismatched `{}` at byte {cursor}", byte as char),
                    ));
                }
            }
        }
    }

    Err(truncated(key))
}

fn truncated(key: &str) -> SliceError {
    SliceError::Truncated {
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    const TABLE: &str = include_str!("../../../testdata/otu_table_14x9.biom");

    fn value_of<'a>(document: &'a str, key: &str) -> &'a str {
        locate(document, key).unwrap().unwrap().value()
    }

    #[test]
    fn test_locate_table_keys() {
        assert_eq!(value_of(TABLE, "shape"), "[14, 9]");
        assert_eq!(value_of(TABLE, "matrix_type"), "\"sparse\"");
        assert_eq!(value_of(TABLE, "id"), "\"None\"");
        assert_eq!(value_of(TABLE, "format_url"), "\"http://biom-format.org\"");

        let data = value_of(TABLE, "data");
        assert!(data.starts_with("[[0,0,20],[0,1,18]"));
        assert!(data.ends_with("[13,1,4],[13,2,4]]"));

        let columns = value_of(TABLE, "columns");
        assert!(columns.starts_with("[{\"id\": \"f2\""));
        assert!(columns.ends_with("{\"id\": \"t2\", \"metadata\": null}]"));
    }

    #[test]
    fn test_pair_and_span() {
        let fragment = locate(TABLE, "shape").unwrap().unwrap();
        assert_eq!(fragment.as_pair(), "\"shape\": [14, 9]");
        assert_eq!(&TABLE[fragment.span()], fragment.as_pair());
    }

    #[test]
    fn test_absent_key() {
        assert_eq!(locate(TABLE, "missing"), Ok(None));
        assert_eq!(
            require(TABLE, "nothing_here"),
            Err(SliceError::MissingKey("nothing_here"))
        );
    }

    #[test]
    fn test_bare_scalars() {
        assert_eq!(value_of(r#"{"n": 42, "m": 1}"#, "n"), "42");
        assert_eq!(value_of(r#"{"n": 42}"#, "n"), "42");
        assert_eq!(value_of("{\"n\": 42 \n}", "n"), "42");
        assert_eq!(value_of(r#"{"v": -3.5, "m": 1}"#, "v"), "-3.5");
        assert_eq!(value_of(r#"{"m": null}"#, "m"), "null");
        assert_eq!(value_of(r#"{"b": true, "c": false}"#, "c"), "false");
    }

    #[test]
    fn test_string_scalar_with_delimiters() {
        let doc = r#"{"a": "x,]y}", "b": 1}"#;
        assert_eq!(value_of(doc, "a"), r#""x,]y}""#);

        let escaped = r#"{"a": "say \"hi\", ok", "b": 1}"#;
        assert_eq!(value_of(escaped, "a"), r#""say \"hi\", ok""#);
    }

    #[test]
    fn test_brackets_inside_strings_are_ignored() {
        let doc = r#"{"rows": [{"id": "a]b", "metadata": {"x": "}{"}}], "z": 1}"#;
        assert_eq!(
            value_of(doc, "rows"),
            r#"[{"id": "a]b", "metadata": {"x": "}{"}}]"#
        );

        let escaped = r#"{"k": ["a\"]", "b"], "z": 1}"#;
        assert_eq!(value_of(escaped, "k"), r#"["a\"]", "b"]"#);
    }

    #[test]
    fn test_truncated_input_is_an_error() {
        let err = Err(SliceError::Truncated { key: "data".into() });
        assert_eq!(locate(r#"{"data": [[0,0,1],[1,1"#, "data"), err);
        assert_eq!(locate(r#"{"data": "abc"#, "data"), err);
        assert_eq!(locate(r#"{"data": 42"#, "data"), err);
        assert_eq!(locate(r#"{"data":   "#, "data"), err);
        assert_eq!(locate(r#"{"data": ["x]"#, "data"), err);
    }

    #[test]
    fn test_mismatched_closer() {
        let result = locate(r#"{"k": [1, 2}, "z": 1}"#, "k");
        assert!(matches!(result, Err(SliceError::Malformed { .. })));
    }

    #[test]
    fn test_value_ends_at_its_own_closer() {
        let doc = r#"{"a": {"k": [1, [2]]}, "z": 1}"#;
        let fragment = locate(doc, "k").unwrap().unwrap();
        assert_eq!(fragment.value(), "[1, [2]]");
        assert_eq!(&doc[fragment.span()], r#""k": [1, [2]]"#);

        let doc = r#"{"a": {"k": {"x": [1]}}}"#;
        assert_eq!(value_of(doc, "k"), r#"{"x": [1]}"#);
    }

    #[test]
    fn test_nesting_limit() {
        let mut deep = String::from("{\"k\": ");
        for _ in 0..=MAX_NESTING_DEPTH {
            deep.push('[');
        }
        assert_eq!(
            locate(&deep, "k"),
            Err(SliceError::NestingTooDeep {
                key: "k".into(),
                limit: MAX_NESTING_DEPTH
            })
        );

        let mut ok = String::from("{\"k\": ");
        for _ in 0..MAX_NESTING_DEPTH {
            ok.push('[');
        }
        for _ in 0..MAX_NESTING_DEPTH {
            ok.push(']');
        }
        ok.push('}');
        assert_eq!(value_of(&ok, "k").len(), MAX_NESTING_DEPTH * 2);
    }

    #[test]
    fn test_whitespace_before_value() {
        let doc = "{\"shape\":\n\t [2,\n 3],\"x\": 0}";
        assert_eq!(value_of(doc, "shape"), "[2,\n 3]");
    }
}
