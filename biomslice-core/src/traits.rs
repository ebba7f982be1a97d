//! Abstract document access
//!
//! Slicing only needs the document as one contiguous string. Where that
//! string lives (an owned buffer, a memory-mapped file) is up to the
//! implementation crate.

use alloc::string::String;

/// Anything that can expose a whole table document as text
pub trait DocumentSource {
    /// The complete document text
    fn document_text(&self) -> &str;

    /// Size of the document in bytes
    fn size(&self) -> usize {
        self.document_text().len()
    }
}

impl DocumentSource for str {
    fn document_text(&self) -> &str {
        self
    }
}

impl DocumentSource for String {
    fn document_text(&self) -> &str {
        self.as_str()
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn document_text(&self) -> &str {
        (**self).document_text()
    }
}
