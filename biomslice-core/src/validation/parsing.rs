//! Parsing of index requests given as text
//!
//! Command-line callers describe index selections as comma-separated lists
//! of single indices and `start:end` ranges, e.g. `0,3,5:8`.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Result, SliceError};

/// Parse a half-open range in the format "start:end"
pub fn parse_range(range_str: &str) -> Result<Range<usize>> {
    let invalid = || SliceError::InvalidIndexList(range_str.to_string());

    let (start_str, end_str) = range_str.split_once(':').ok_or_else(invalid)?;
    let start = parse_usize(start_str.trim()).ok_or_else(invalid)?;
    let end = parse_usize(end_str.trim()).ok_or_else(invalid)?;

    if start > end {
        return Err(invalid());
    }

    Ok(start..end)
}

/// One item of an index list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexItem {
    /// A single index, signed so negative requests reach the bounds check
    Single(i64),
    /// A half-open `start:end` range, kept unexpanded
    Range(Range<usize>),
}

/// Parse a list such as `0,3,5:8` into its items
///
/// Ranges are not expanded here: their extent is only known to be sane
/// once it has been checked against the axis length, see
/// [`KeepSet::from_items`](crate::KeepSet::from_items).
pub fn parse_index_list(list: &str) -> Result<Vec<IndexItem>> {
    let mut items = Vec::new();

    for item in list.split(',').map(str::trim) {
        if item.is_empty() {
            return Err(SliceError::InvalidIndexList(list.to_string()));
        }

        if item.contains(':') {
            items.push(IndexItem::Range(parse_range(item)?));
        } else {
            let index = item
                .parse::<i64>()
                .map_err(|_| SliceError::InvalidIndexList(item.to_string()))?;
            items.push(IndexItem::Single(index));
        }
    }

    Ok(items)
}

/// Digits only; no sign, no whitespace
fn parse_usize(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0:10"), Ok(0..10));
        assert_eq!(parse_range("5:15"), Ok(5..15));
        assert_eq!(parse_range("3:3"), Ok(3..3));

        let invalid =
            |s: &str| -> Result<Range<usize>> { Err(SliceError::InvalidIndexList(s.to_string())) };
        assert_eq!(parse_range(""), invalid(""));
        assert_eq!(parse_range("10:5"), invalid("10:5"));
        assert_eq!(parse_range("abc:def"), invalid("abc:def"));
        assert_eq!(parse_range("10"), invalid("10"));
        assert_eq!(parse_range("10:"), invalid("10:"));
        assert_eq!(parse_range(":10"), invalid(":10"));
        assert_eq!(parse_range("-1:3"), invalid("-1:3"));
    }

    #[test]
    fn test_parse_index_list() {
        use IndexItem::{Range, Single};

        assert_eq!(parse_index_list("3,0"), Ok(vec![Single(3), Single(0)]));
        assert_eq!(
            parse_index_list("0, 2:5 ,9"),
            Ok(vec![Single(0), Range(2..5), Single(9)])
        );
        assert_eq!(parse_index_list("-1"), Ok(vec![Single(-1)]));

        assert!(parse_index_list("").is_err());
        assert!(parse_index_list("1,,2").is_err());
        assert!(parse_index_list("x").is_err());
        assert!(parse_index_list("4:2").is_err());
    }

    #[test]
    fn test_huge_range_is_not_expanded() {
        assert_eq!(
            parse_index_list("0:4000000000"),
            Ok(vec![IndexItem::Range(0..4_000_000_000)])
        );
    }
}
