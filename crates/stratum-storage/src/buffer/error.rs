//! Buffer pool errors.

use stratum_common::types::PageId;
use thiserror::Error;

use crate::disk::DiskError;

/// Result type for buffer pool operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer pool operations.
#[derive(Debug, Error)]
#[allow(missing_docs)] // Fields are documented by variant docs
pub enum BufferError {
    /// Every frame is pinned; nothing can be evicted.
    #[error("no free frames available, all pages are pinned")]
    NoFreeFrames,

    /// Page not resident in the buffer pool.
    #[error("page {page_id} not found in buffer pool")]
    PageNotFound { page_id: PageId },

    /// Page is pinned and cannot be deleted.
    #[error("page {page_id} is pinned")]
    PagePinned { page_id: PageId },

    /// Invalid page ID.
    #[error("invalid page ID: {page_id}")]
    InvalidPageId { page_id: PageId },

    /// The replacer is already tracking its capacity of frames.
    #[error("replacer at capacity, cannot track frame {frame_id}")]
    ReplacerOverflow { frame_id: usize },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Disk I/O error.
    #[error("disk I/O error: {0}")]
    Disk(#[from] DiskError),
}

impl BufferError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a page not found error.
    pub fn page_not_found(page_id: PageId) -> Self {
        Self::PageNotFound { page_id }
    }

    /// Returns true if this is a transient error that can be retried.
    ///
    /// Capacity exhaustion clears once some caller unpins a page; the
    /// other kinds do not resolve on their own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoFreeFrames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BufferError::page_not_found(PageId::new(42));
        assert!(matches!(
            err,
            BufferError::PageNotFound {
                page_id
            } if page_id == PageId::new(42)
        ));
    }

    #[test]
    fn test_is_retryable() {
        assert!(BufferError::NoFreeFrames.is_retryable());
        assert!(!BufferError::page_not_found(PageId::new(1)).is_retryable());
        assert!(!BufferError::config("bad").is_retryable());
    }
}
