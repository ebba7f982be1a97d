//! Text-level handling of `[row,col,value]` triples
//!
//! Triples are split on [`TRIPLE_SEPARATOR`] instead of being parsed as a
//! JSON array. This only holds for the sparse layout, where a triple has no
//! nested structure and its value never contains `],`.

use crate::format::constants::{keys, TRIPLE_SEPARATOR, TRIPLE_TRIM};
use crate::format::Axis;
use crate::{Result, SliceError};

/// One triple as three borrowed tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTriple<'a> {
    pub row: &'a str,
    pub col: &'a str,
    pub value: &'a str,
}

impl<'a> RawTriple<'a> {
    /// Split one separator-delimited chunk into its tokens
    pub fn parse(chunk: &'a str) -> Result<Self> {
        let mut tokens = chunk
            .trim_matches(TRIPLE_TRIM)
            .split(',')
            .map(|token| token.trim_matches(TRIPLE_TRIM));

        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(row), Some(col), Some(value), None) => Ok(Self { row, col, value }),
            _ => Err(SliceError::malformed(
                keys::DATA,
                alloc::format!("`{}` is not a [row, col, value] triple", chunk.trim()),
            )),
        }
    }

    /// The triple's index on `axis`
    pub fn index(&self, axis: Axis) -> Result<usize> {
        let token = match axis {
            Axis::Observation => self.row,
            Axis::Sample => self.col,
        };
        token.parse::<usize>().map_err(|_| {
            SliceError::malformed(
                keys::DATA,
                alloc::format!("`{token}` is not a valid {axis} index"),
            )
        })
    }
}

/// Strip the outer `[` `]` of the `data` value
pub fn strip_outer_array(data: &str) -> Result<&str> {
    data.trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
        .ok_or_else(|| SliceError::malformed(keys::DATA, "expected an array of triples"))
}

/// Iterate the raw triple chunks of an array body
///
/// An empty body yields nothing.
pub fn split_triples(body: &str) -> impl Iterator<Item = &str> {
    (!body.is_empty())
        .then(|| body.split(TRIPLE_SEPARATOR))
        .into_iter()
        .flatten()
}
