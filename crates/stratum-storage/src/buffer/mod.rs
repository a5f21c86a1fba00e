//! Buffer pool for the Stratum storage engine.
//!
//! The buffer pool manages a fixed-size pool of in-memory page frames,
//! providing cached access to the backing store with the following
//! pieces:
//!
//! - **Page Caching**: a page table mapping resident pages to frames
//! - **Pin/Unpin**: reference counting that keeps in-use pages resident
//! - **Dirty Tracking**: modified pages are written back before reuse
//! - **Eviction Policy**: LRU-K replacement over unpinned frames
//! - **Page Guards**: RAII handles that latch and unpin automatically
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       BufferPool                          │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │         Page Table: HashMap<PageId, FrameId>        │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            │                              │
//! │                            ▼                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │                    Frame Array                      │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐  ┌─────────┐   │  │
//! │  │  │ Frame 0 │ │ Frame 1 │ │ Frame 2 │… │ Frame N │   │  │
//! │  │  │ data[]  │ │ data[]  │ │ data[]  │  │ data[]  │   │  │
//! │  │  │ page_id │ │ page_id │ │ page_id │  │ page_id │   │  │
//! │  │  │ pin_cnt │ │ pin_cnt │ │ pin_cnt │  │ pin_cnt │   │  │
//! │  │  │ dirty   │ │ dirty   │ │ dirty   │  │ dirty   │   │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘  └─────────┘   │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            │                              │
//! │                            ▼                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │       LRU-K Replacer (eviction candidates)          │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stratum_storage::buffer::{BufferPool, BufferPoolConfig};
//! use stratum_storage::disk::FileDiskManager;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let disk = Arc::new(FileDiskManager::open("data.db")?);
//!     let pool = BufferPool::new(BufferPoolConfig::new(1024), disk)?;
//!
//!     // Create and populate a page.
//!     let page_id = {
//!         let mut guard = pool.new_page()?;
//!         guard.data_mut()[0..5].copy_from_slice(b"hello");
//!         guard.page_id()
//!     }; // guard drops here, unpinning the page
//!
//!     // Read it back under a shared latch.
//!     let guard = pool.fetch_page_read(page_id)?;
//!     assert_eq!(&guard[0..5], b"hello");
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod eviction;
mod frame;
mod latch;
mod pool;

pub use config::BufferPoolConfig;
pub use error::{BufferError, BufferResult};
pub use eviction::LruKReplacer;
pub use frame::FrameId;
pub use latch::{BasicPageGuard, ReadPageGuard, WritePageGuard};
pub use pool::BufferPool;

/// Statistics for buffer pool monitoring.
#[derive(Debug, Clone, Default)]
pub struct BufferPoolStats {
    /// Total number of page fetches.
    pub fetches: u64,
    /// Number of fetches served from memory.
    pub hits: u64,
    /// Number of fetches that required a disk read.
    pub misses: u64,
    /// Number of pages evicted.
    pub evictions: u64,
    /// Number of pages written out by flushes.
    pub flushes: u64,
    /// Current number of resident pages.
    pub resident_pages: usize,
    /// Current number of unoccupied frames.
    pub free_frames: usize,
    /// Current number of pinned frames.
    pub pinned_frames: usize,
    /// Current number of dirty frames.
    pub dirty_frames: usize,
}

impl BufferPoolStats {
    /// Returns the cache hit ratio (0.0 to 1.0).
    pub fn hit_ratio(&self) -> f64 {
        if self.fetches == 0 {
            0.0
        } else {
            self.hits as f64 / self.fetches as f64
        }
    }
}
