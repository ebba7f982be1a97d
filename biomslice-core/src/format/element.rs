//! Matrix layout and element type enumerations
//!
//! Both are declared as quoted strings in the document header
//! (`"matrix_type": "sparse"`, `"matrix_element_type": "int"`).

use alloc::string::ToString;

use crate::{Result, SliceError};

/// Storage layout declared by `matrix_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixType {
    /// `data` holds `[row, col, value]` triples
    Sparse,
    /// `data` holds one array per row
    Dense,
}

impl MatrixType {
    /// Parse an unquoted layout name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "sparse" => Ok(MatrixType::Sparse),
            "dense" => Ok(MatrixType::Dense),
            other => Err(SliceError::UnsupportedMatrixType(other.to_string())),
        }
    }
}

impl core::fmt::Display for MatrixType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixType::Sparse => write!(f, "sparse"),
            MatrixType::Dense => write!(f, "dense"),
        }
    }
}

/// Value type declared by `matrix_element_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Int,
    Float,
    Unicode,
}

/// A single parsed matrix value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl ElementType {
    /// Parse an unquoted element type name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "int" => Ok(ElementType::Int),
            "float" => Ok(ElementType::Float),
            "unicode" => Ok(ElementType::Unicode),
            other => Err(SliceError::UnknownElementType(other.to_string())),
        }
    }

    /// Parse one value token as this element type
    ///
    /// Integer tables written by float-producing tools carry values such as
    /// `20.0`; those are accepted as integers when they have no fraction.
    pub fn parse_value(self, token: &str) -> Result<ElementValue<'_>> {
        match self {
            ElementType::Int => parse_int(token).map(ElementValue::Int),
            ElementType::Float => token
                .parse::<f64>()
                .map(ElementValue::Float)
                .map_err(|_| invalid_value(token, self)),
            ElementType::Unicode => Ok(ElementValue::Text(super::unquote(token))),
        }
    }
}

fn parse_int(token: &str) -> Result<i64> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }
    let value = token
        .parse::<f64>()
        .map_err(|_| invalid_value(token, ElementType::Int))?;
    let truncated = value as i64;
    if value.is_finite() && truncated as f64 == value {
        Ok(truncated)
    } else {
        Err(invalid_value(token, ElementType::Int))
    }
}

fn invalid_value(token: &str, element_type: ElementType) -> SliceError {
    SliceError::malformed(
        crate::format::constants::keys::DATA,
        alloc::format!("`{token}` is not a valid {element_type} value"),
    )
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ElementType::Int => write!(f, "int"),
            ElementType::Float => write!(f, "float"),
            ElementType::Unicode => write!(f, "unicode"),
        }
    }
}
