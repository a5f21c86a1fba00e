//! # stratum-storage
//!
//! Storage engine core for Stratum.
//!
//! This crate implements the page cache that sits between the engine
//! and the backing store:
//!
//! - A fixed-size buffer pool with LRU-K page replacement
//! - RAII page guards for latched, pinned access to page bytes
//! - A narrow synchronous disk adapter

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Buffer pool, replacement policy, and page guards
pub mod buffer;

/// Disk adapter and I/O backends
pub mod disk;
