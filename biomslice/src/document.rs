//! Table document sources
//!
//! A [`TableDocument`] holds the complete text of one table, either in an
//! owned buffer or as a read-only memory map of the file. UTF-8 is checked
//! once when the document is created.

use std::path::{Path, PathBuf};

use biomslice_core::DocumentSource;
#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};

use crate::{Error, Result, SubsetConfig};

/// The text of one table document
pub struct TableDocument {
    inner: Inner,
}

enum Inner {
    Owned(String),
    #[cfg(feature = "mmap")]
    Mapped { mmap: Mmap, path: PathBuf },
}

impl TableDocument {
    /// Wrap text that is already in memory
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            inner: Inner::Owned(text.into()),
        }
    }

    /// Read a document file into memory
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_with_config(path, &SubsetConfig::default())
    }

    /// Read a document file, rejecting it before reading if it exceeds the
    /// configured size budget
    pub fn read_with_config<P: AsRef<Path>>(path: P, config: &SubsetConfig) -> Result<Self> {
        let path = path.as_ref();
        check_file_size(path, config)?;
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| Error::NotUtf8(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read table document");
        Ok(Self::from_string(text))
    }

    /// Memory-map a document file
    #[cfg(feature = "mmap")]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &SubsetConfig::default())
    }

    /// Memory-map a document file, rejecting it before mapping if it exceeds
    /// the configured size budget
    #[cfg(feature = "mmap")]
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &SubsetConfig) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path).map_err(io_error)?;
        let size = file.metadata().map_err(io_error)?.len();
        config.check_document_size(usize::try_from(size).unwrap_or(usize::MAX))?;

        // SAFETY: the mapping is read-only and lives as long as this document.
        // Modifying the file while it is mapped is outside what this type
        // guards against, as with any memory-mapped reader.
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(io_error)?;

        std::str::from_utf8(&mmap).map_err(|_| Error::NotUtf8(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), bytes = mmap.len(), "mapped table document");

        Ok(Self {
            inner: Inner::Mapped {
                mmap,
                path: path.to_path_buf(),
            },
        })
    }

    /// File the document was mapped from, if any
    pub fn path(&self) -> Option<&Path> {
        match &self.inner {
            Inner::Owned(_) => None,
            #[cfg(feature = "mmap")]
            Inner::Mapped { path, .. } => Some(path),
        }
    }

    /// Document text
    pub fn as_str(&self) -> &str {
        match &self.inner {
            Inner::Owned(text) => text,
            // SAFETY: validated as UTF-8 in `open`; the mapping is read-only.
            #[cfg(feature = "mmap")]
            Inner::Mapped { mmap, .. } => unsafe { std::str::from_utf8_unchecked(mmap) },
        }
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_file_size(path: &Path, config: &SubsetConfig) -> Result<()> {
    if config.max_document_bytes.is_none() {
        return Ok(());
    }
    let size = std::fs::metadata(path)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    config.check_document_size(usize::try_from(size).unwrap_or(usize::MAX))
}

impl DocumentSource for TableDocument {
    fn document_text(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Debug for TableDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableDocument")
            .field("path", &self.path())
            .field("bytes", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TABLE: &str = include_str!("../../testdata/otu_table_14x9.biom");

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("biomslice-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_from_string() {
        let doc = TableDocument::from_string(TABLE);
        assert_eq!(doc.document_text(), TABLE);
        assert_eq!(doc.size(), TABLE.len());
        assert!(doc.path().is_none());
    }

    #[test]
    fn test_read_file() {
        let path = temp_file("read.biom", TABLE.as_bytes());
        let doc = TableDocument::read(&path).unwrap();
        assert_eq!(doc.as_str(), TABLE);
        std::fs::remove_file(path).unwrap();
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_open_mapped() {
        let path = temp_file("mapped.biom", TABLE.as_bytes());
        let doc = TableDocument::open(&path).unwrap();
        assert_eq!(doc.as_str(), TABLE);
        assert_eq!(doc.path(), Some(path.as_path()));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let missing = std::env::temp_dir().join("biomslice-does-not-exist.biom");
        assert!(matches!(TableDocument::read(&missing), Err(Error::Io { .. })));
    }

    #[test]
    fn test_budget_is_checked_before_reading() {
        // Not UTF-8, so getting past the size check would fail differently
        let path = temp_file("oversized.biom", &[0xff; 256]);
        let config = SubsetConfig::default().with_max_document_bytes(128);

        assert!(matches!(
            TableDocument::read_with_config(&path, &config),
            Err(Error::DocumentTooLarge {
                size: 256,
                limit: 128
            })
        ));
        #[cfg(feature = "mmap")]
        assert!(matches!(
            TableDocument::open_with_config(&path, &config),
            Err(Error::DocumentTooLarge {
                size: 256,
                limit: 128
            })
        ));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_within_budget() {
        let path = temp_file("budget.biom", TABLE.as_bytes());
        let config = SubsetConfig::default().with_max_document_bytes(TABLE.len());
        let doc = TableDocument::read_with_config(&path, &config).unwrap();
        assert_eq!(doc.len(), TABLE.len());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_invalid_utf8() {
        let path = temp_file("binary.biom", &[0xff, 0xfe, 0x00]);
        assert!(matches!(TableDocument::read(&path), Err(Error::NotUtf8(_))));
        #[cfg(feature = "mmap")]
        assert!(matches!(TableDocument::open(&path), Err(Error::NotUtf8(_))));
        std::fs::remove_file(path).unwrap();
    }
}
