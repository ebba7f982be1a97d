//! Format vocabulary for JSON BIOM tables
//!
//! Pure definitions of the keys, axes and header values a sparse table
//! document carries. Nothing here reads the `data` section.

pub mod axis;
pub mod constants;
pub mod element;
pub mod shape;

pub use axis::Axis;
pub use element::{ElementType, ElementValue, MatrixType};
pub use shape::Shape;

use crate::scanner;
use crate::Result;
use constants::keys;

/// Strip one pair of surrounding double quotes, if present
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// Header values needed before the data section can be sliced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    pub shape: Shape,
    pub matrix_type: MatrixType,
    pub element_type: ElementType,
}

impl TableHeader {
    /// Locate and parse `shape`, `matrix_type` and `matrix_element_type`
    pub fn read(document: &str) -> Result<Self> {
        let shape = Shape::parse(scanner::require(document, keys::SHAPE)?.value())?;
        let matrix_type =
            MatrixType::from_name(unquote(scanner::require(document, keys::MATRIX_TYPE)?.value()))?;
        let element_type = ElementType::from_name(unquote(
            scanner::require(document, keys::MATRIX_ELEMENT_TYPE)?.value(),
        ))?;

        Ok(Self {
            shape,
            matrix_type,
            element_type,
        })
    }
}
