//! Synchronous disk adapter for the buffer pool.
//!
//! The buffer pool talks to the backing store through the narrow
//! [`DiskManager`] trait: read one page, write one page, sync. Two
//! backends are provided:
//!
//! - [`FileDiskManager`]: positioned I/O over a single data file
//! - [`MemoryDiskManager`]: a HashMap-backed store for tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use stratum_storage::disk::{DiskManager, FileDiskManager};
//! use stratum_common::constants::PAGE_SIZE;
//! use stratum_common::types::PageId;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let disk = FileDiskManager::open("data.db")?;
//!
//!     let mut buf = vec![0u8; PAGE_SIZE];
//!     disk.read_page(PageId::new(0), &mut buf)?;
//!
//!     buf[0] = 1;
//!     disk.write_page(PageId::new(0), &buf)?;
//!     disk.sync()?;
//!     Ok(())
//! }
//! ```

mod error;
mod file;
mod manager;
mod memory;

pub use error::{DiskError, DiskResult};
pub use file::FileDiskManager;
pub use manager::DiskManager;
pub use memory::MemoryDiskManager;
