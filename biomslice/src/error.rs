//! Error type for document-level operations

use std::path::PathBuf;

use biomslice_core::SliceError;

/// Errors from reading, budgeting or subsetting table documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Slicing the document text failed
    #[error(transparent)]
    Slice(#[from] SliceError),

    /// The document file could not be opened, read or mapped
    #[error("failed to read table document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document file is not UTF-8 text
    #[error("table document {0} is not valid UTF-8")]
    NotUtf8(PathBuf),

    /// The document exceeds the configured size budget
    #[error("document of {size} bytes exceeds the configured limit of {limit} bytes")]
    DocumentTooLarge { size: usize, limit: usize },

    /// The worker pool for batch subsetting could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl Error {
    /// The underlying slicing error, if this is one
    pub fn as_slice_error(&self) -> Option<&SliceError> {
        match self {
            Error::Slice(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for document-level operations
pub type Result<T> = std::result::Result<T, Error>;
