//! Error types for table slicing operations

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::Axis;

/// Errors that can occur while slicing a serialized table
///
/// Every error aborts the slicing request as a whole. No variant is ever
/// paired with partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    /// A required top-level key is not present in the document
    #[error("required key `{0}` is missing, document does not look like a BIOM table")]
    MissingKey(&'static str),

    /// The document ended while the value of a key was still open
    #[error("document ended before the value of `{key}` was closed")]
    Truncated { key: String },

    /// A value nests deeper than the scanner's fixed stack allows
    #[error("value of `{key}` nests deeper than {limit} levels")]
    NestingTooDeep { key: String, limit: usize },

    /// A located value could not be interpreted
    #[error("malformed `{key}` value: {reason}")]
    Malformed { key: String, reason: String },

    /// The table stores a matrix layout that cannot be sliced as text
    #[error("matrix type `{0}` cannot be sliced, only sparse tables are supported")]
    UnsupportedMatrixType(String),

    /// The declared element type is not one of `int`, `float`, `unicode`
    #[error("unknown matrix element type `{0}`")]
    UnknownElementType(String),

    /// The axis name is neither `observation` nor `sample`
    #[error("unknown axis `{0}`, expected `observation` or `sample`")]
    UnknownAxis(String),

    /// A requested ordinal index lies outside the axis
    #[error("index {index} is out of range for the {axis} axis of length {len}")]
    IndexOutOfRange { axis: Axis, index: i64, len: usize },

    /// The request selects nothing on the axis
    #[error("no {0} indices were requested")]
    EmptySelection(Axis),

    /// Requested identifiers are absent from the axis records
    #[error("ids not found on the {axis} axis: {}", .missing.join(", "))]
    IdNotFound { axis: Axis, missing: Vec<String> },

    /// An index list supplied as text could not be parsed
    #[error("invalid index list `{0}`")]
    InvalidIndexList(String),
}

/// Broad classification of [`SliceError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The document is missing keys or cannot be scanned
    Format,
    /// The axis argument was not recognised
    UnknownAxis,
    /// The selection is empty or reaches past the axis
    IndexOutOfRange,
    /// Requested identifiers do not exist
    IdNotFound,
    /// The request itself could not be parsed
    InvalidRequest,
}

impl SliceError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SliceError::MissingKey(_)
            | SliceError::Truncated { .. }
            | SliceError::NestingTooDeep { .. }
            | SliceError::Malformed { .. }
            | SliceError::UnsupportedMatrixType(_)
            | SliceError::UnknownElementType(_) => ErrorCategory::Format,
            SliceError::UnknownAxis(_) => ErrorCategory::UnknownAxis,
            SliceError::IndexOutOfRange { .. } | SliceError::EmptySelection(_) => {
                ErrorCategory::IndexOutOfRange
            }
            SliceError::IdNotFound { .. } => ErrorCategory::IdNotFound,
            SliceError::InvalidIndexList(_) => ErrorCategory::InvalidRequest,
        }
    }

    pub(crate) fn malformed(key: &str, reason: impl Into<String>) -> Self {
        SliceError::Malformed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for slicing operations
pub type Result<T> = core::result::Result<T, SliceError>;
