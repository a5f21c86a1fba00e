//! In-memory disk manager for tests.

use std::collections::HashMap;

use parking_lot::Mutex;
use stratum_common::constants::PAGE_SIZE;
use stratum_common::types::PageId;

use super::error::DiskResult;
use super::manager::DiskManager;

/// Disk manager that keeps every page in a HashMap.
///
/// Reads of pages that were never written yield zeroed bytes, like the
/// file-backed manager. Intended for tests and examples; nothing is
/// persisted.
#[derive(Default)]
pub struct MemoryDiskManager {
    pages: Mutex<HashMap<PageId, Vec<u8>>>,
}

impl MemoryDiskManager {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pages that have been written.
    pub fn len(&self) -> usize {
        self.pages.lock().len()
    }

    /// Returns true if no page has been written.
    pub fn is_empty(&self) -> bool {
        self.pages.lock().is_empty()
    }
}

impl DiskManager for MemoryDiskManager {
    fn read_page(&self, page_id: PageId, buf: &mut [u8]) -> DiskResult<()> {
        debug_assert_eq!(buf.len(), PAGE_SIZE);

        match self.pages.lock().get(&page_id) {
            Some(page) => buf.copy_from_slice(page),
            None => buf.fill(0),
        }
        Ok(())
    }

    fn write_page(&self, page_id: PageId, buf: &[u8]) -> DiskResult<()> {
        debug_assert_eq!(buf.len(), PAGE_SIZE);

        self.pages.lock().insert(page_id, buf.to_vec());
        Ok(())
    }

    fn sync(&self) -> DiskResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for MemoryDiskManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDiskManager")
            .field("pages", &self.len())
            .finish()
    }
}
