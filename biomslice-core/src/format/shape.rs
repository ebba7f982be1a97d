//! Table dimensions as declared by the `shape` key

use super::constants::keys;
use super::Axis;
use crate::{Result, SliceError};

/// Declared table dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub n_rows: usize,
    pub n_cols: usize,
}

impl Shape {
    pub const fn new(n_rows: usize, n_cols: usize) -> Self {
        Self { n_rows, n_cols }
    }

    /// Parse the value of the `shape` key, e.g. `[14, 9]`
    pub fn parse(value: &str) -> Result<Self> {
        let inner = value
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| SliceError::malformed(keys::SHAPE, "expected `[n_rows, n_cols]`"))?;

        let mut parts = inner.split(',');
        let n_rows = parse_dimension(parts.next())?;
        let n_cols = parse_dimension(parts.next())?;
        if parts.next().is_some() {
            return Err(SliceError::malformed(keys::SHAPE, "more than two dimensions"));
        }

        Ok(Self { n_rows, n_cols })
    }

    /// Length of the given axis
    pub const fn axis_len(self, axis: Axis) -> usize {
        match axis {
            Axis::Observation => self.n_rows,
            Axis::Sample => self.n_cols,
        }
    }

    /// Copy of this shape with one axis resized
    pub const fn with_axis_len(self, axis: Axis, len: usize) -> Self {
        match axis {
            Axis::Observation => Self::new(len, self.n_cols),
            Axis::Sample => Self::new(self.n_rows, len),
        }
    }
}

fn parse_dimension(part: Option<&str>) -> Result<usize> {
    let part = part
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| SliceError::malformed(keys::SHAPE, "expected two dimensions"))?;
    part.parse::<usize>().map_err(|_| {
        SliceError::malformed(keys::SHAPE, alloc::format!("`{part}` is not a dimension"))
    })
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {}]", self.n_rows, self.n_cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_shape() {
        assert_eq!(Shape::parse("[14, 9]"), Ok(Shape::new(14, 9)));
        assert_eq!(Shape::parse("[14,9]"), Ok(Shape::new(14, 9)));
        assert_eq!(Shape::parse(" [ 0 , 3 ] "), Ok(Shape::new(0, 3)));

        assert!(Shape::parse("14, 9").is_err());
        assert!(Shape::parse("[14]").is_err());
        assert!(Shape::parse("[14, 9, 2]").is_err());
        assert!(Shape::parse("[-1, 9]").is_err());
        assert!(Shape::parse("[a, 9]").is_err());
    }

    #[test]
    fn test_axis_len() {
        let shape = Shape::new(14, 9);
        assert_eq!(shape.axis_len(Axis::Observation), 14);
        assert_eq!(shape.axis_len(Axis::Sample), 9);
        assert_eq!(shape.with_axis_len(Axis::Sample, 2), Shape::new(14, 2));
        assert_eq!(shape.with_axis_len(Axis::Observation, 3), Shape::new(3, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(14, 2).to_string(), "[14, 2]");
    }
}
