//! Page guards: pinned, optionally latched handles to a page.
//!
//! A guard keeps its page pinned (and therefore resident) for as long
//! as it lives, and unpins exactly once when released or dropped. The
//! read and write variants additionally hold the frame's page latch in
//! shared or exclusive mode for their whole lifetime.

use std::ops::{Deref, DerefMut};

use parking_lot::lock_api::{ArcRwLockReadGuard, ArcRwLockWriteGuard};
use parking_lot::{RawRwLock, RwLockReadGuard, RwLockWriteGuard};
use stratum_common::types::PageId;

use super::frame::{FrameId, PageBuf};
use super::pool::BufferPool;

/// Pinned handle to a page, without a page latch.
///
/// The guard carries a dirty hint: touching the bytes through
/// [`data_mut`](BasicPageGuard::data_mut) (or calling
/// [`mark_dirty`](BasicPageGuard::mark_dirty)) makes the eventual unpin
/// report the page as dirty.
///
/// Byte access through a basic guard takes the page latch only for the
/// duration of the borrow. Use [`upgrade_read`](BasicPageGuard::upgrade_read)
/// or [`upgrade_write`](BasicPageGuard::upgrade_write) to hold the
/// latch across an extended critical section.
///
/// Guards are movable but not copyable; dropping (or explicitly
/// releasing) a guard unpins its page exactly once.
pub struct BasicPageGuard<'a> {
    pool: &'a BufferPool,
    page_id: PageId,
    frame_id: FrameId,
    dirty: bool,
    active: bool,
}

impl<'a> BasicPageGuard<'a> {
    /// Creates a guard over a page the pool has already pinned.
    pub(crate) fn new(pool: &'a BufferPool, page_id: PageId, frame_id: FrameId) -> Self {
        Self {
            pool,
            page_id,
            frame_id,
            dirty: false,
            active: true,
        }
    }

    /// Returns the page ID.
    #[inline]
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    /// Returns the frame ID.
    #[inline]
    pub fn frame_id(&self) -> FrameId {
        self.frame_id
    }

    /// Returns a read-only view of the page bytes.
    ///
    /// Holds the page latch in shared mode while the view is borrowed.
    #[inline]
    pub fn data(&self) -> impl Deref<Target = [u8]> + '_ {
        PageDataRef {
            guard: self.pool.frame_data(self.frame_id).read(),
        }
    }

    /// Returns a mutable view of the page bytes and marks the guard
    /// dirty.
    ///
    /// Holds the page latch in exclusive mode while the view is
    /// borrowed.
    #[inline]
    pub fn data_mut(&mut self) -> impl DerefMut<Target = [u8]> + '_ {
        self.dirty = true;
        PageDataMut {
            guard: self.pool.frame_data(self.frame_id).write(),
        }
    }

    /// Marks the page as modified without touching the bytes.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Unpins the page now instead of at end of scope.
    pub fn release(mut self) {
        self.release_inner();
    }

    /// Acquires the page latch in shared mode, consuming this guard.
    pub fn upgrade_read(self) -> ReadPageGuard<'a> {
        let latch = self.pool.frame_data(self.frame_id).read_arc();
        ReadPageGuard { latch, guard: self }
    }

    /// Acquires the page latch in exclusive mode, consuming this guard.
    pub fn upgrade_write(self) -> WritePageGuard<'a> {
        let latch = self.pool.frame_data(self.frame_id).write_arc();
        WritePageGuard { latch, guard: self }
    }

    fn release_inner(&mut self) {
        if self.active {
            self.active = false;
            self.pool.unpin_page(self.page_id, self.dirty);
        }
    }
}

impl Drop for BasicPageGuard<'_> {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl std::fmt::Debug for BasicPageGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicPageGuard")
            .field("page_id", &self.page_id)
            .field("frame_id", &self.frame_id)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Helper struct providing `Deref` for transient page data access.
struct PageDataRef<'a> {
    guard: RwLockReadGuard<'a, PageBuf>,
}

impl Deref for PageDataRef<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Helper struct providing `DerefMut` for transient page data access.
struct PageDataMut<'a> {
    guard: RwLockWriteGuard<'a, PageBuf>,
}

impl Deref for PageDataMut<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl DerefMut for PageDataMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

/// Pinned handle holding the page latch in shared mode.
///
/// Other readers may hold the same page concurrently; writers are
/// excluded until every read guard is released. Dereferences to the
/// page bytes.
pub struct ReadPageGuard<'a> {
    // Declared before the pin so drop order releases the page latch
    // first; the unpin below it takes the pool latch.
    latch: ArcRwLockReadGuard<RawRwLock, PageBuf>,
    guard: BasicPageGuard<'a>,
}

impl ReadPageGuard<'_> {
    /// Returns the page ID.
    #[inline]
    pub fn page_id(&self) -> PageId {
        self.guard.page_id()
    }

    /// Returns the frame ID.
    #[inline]
    pub fn frame_id(&self) -> FrameId {
        self.guard.frame_id()
    }

    /// Returns the page bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.latch
    }

    /// Unlatches and unpins now instead of at end of scope.
    pub fn release(self) {}
}

impl Deref for ReadPageGuard<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.latch
    }
}

impl std::fmt::Debug for ReadPageGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadPageGuard")
            .field("page_id", &self.page_id())
            .field("frame_id", &self.frame_id())
            .finish()
    }
}

/// Pinned handle holding the page latch in exclusive mode.
///
/// Grants sole byte-level access to the page. Mutable access marks the
/// page dirty so the eventual unpin reports the modification.
pub struct WritePageGuard<'a> {
    // Same drop-order constraint as ReadPageGuard.
    latch: ArcRwLockWriteGuard<RawRwLock, PageBuf>,
    guard: BasicPageGuard<'a>,
}

impl WritePageGuard<'_> {
    /// Returns the page ID.
    #[inline]
    pub fn page_id(&self) -> PageId {
        self.guard.page_id()
    }

    /// Returns the frame ID.
    #[inline]
    pub fn frame_id(&self) -> FrameId {
        self.guard.frame_id()
    }

    /// Returns the page bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.latch
    }

    /// Returns the page bytes mutably and marks the page dirty.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.guard.dirty = true;
        &mut self.latch
    }

    /// Marks the page as modified without touching the bytes.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.guard.mark_dirty();
    }

    /// Unlatches and unpins now instead of at end of scope.
    pub fn release(self) {}
}

impl Deref for WritePageGuard<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.latch
    }
}

impl DerefMut for WritePageGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.guard.dirty = true;
        &mut self.latch
    }
}

impl std::fmt::Debug for WritePageGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WritePageGuard")
            .field("page_id", &self.page_id())
            .field("frame_id", &self.frame_id())
            .finish()
    }
}
