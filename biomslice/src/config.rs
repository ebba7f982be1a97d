//! Configuration for document subsetting

/// Limits and parallelism for [`TableSubsetter`](crate::TableSubsetter)
#[derive(Debug, Clone, Default)]
pub struct SubsetConfig {
    /// Largest document, in bytes, a request may scan
    pub max_document_bytes: Option<usize>,
    /// Worker threads for batch subsetting; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl SubsetConfig {
    /// Config that rejects documents above `limit` bytes
    pub fn with_max_document_bytes(mut self, limit: usize) -> Self {
        self.max_document_bytes = Some(limit);
        self
    }

    /// Run batch subsetting on a dedicated pool of `threads` workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    /// Check a document size against the budget
    pub fn check_document_size(&self, size: usize) -> crate::Result<()> {
        match self.max_document_bytes {
            Some(limit) if size > limit => Err(crate::Error::DocumentTooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}
