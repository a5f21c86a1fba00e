//! Disk manager trait.

use stratum_common::types::PageId;

use super::error::DiskResult;

/// Interface between the buffer pool and the backing store.
///
/// All operations are synchronous and page-granular: a buffer passed to
/// [`read_page`](DiskManager::read_page) or
/// [`write_page`](DiskManager::write_page) is exactly
/// [`PAGE_SIZE`](stratum_common::constants::PAGE_SIZE) bytes.
///
/// Reading a page that was never written must succeed and yield zeroed
/// bytes; the pool relies on this for pages that were allocated but not
/// yet flushed.
pub trait DiskManager: Send + Sync {
    /// Reads the page into `buf`.
    fn read_page(&self, page_id: PageId, buf: &mut [u8]) -> DiskResult<()>;

    /// Writes `buf` as the page's new contents.
    fn write_page(&self, page_id: PageId, buf: &[u8]) -> DiskResult<()>;

    /// Syncs all written data to stable storage.
    fn sync(&self) -> DiskResult<()>;
}
