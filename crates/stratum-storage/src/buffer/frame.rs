//! Buffer frame - a slot in the buffer pool that holds a page.

use std::sync::Arc;

use parking_lot::RwLock;
use stratum_common::constants::PAGE_SIZE;
use stratum_common::types::PageId;

/// Frame identifier - index into the buffer pool's frame array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Creates a new frame ID.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for FrameId {
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<FrameId> for usize {
    fn from(id: FrameId) -> Self {
        id.0
    }
}

/// The page buffer held by a frame.
pub(crate) type PageBuf = Vec<u8>;

/// A buffer frame holds a single page's bytes.
///
/// The bytes sit behind the frame's page latch, a shared/exclusive
/// `RwLock` that guards byte-level access. Everything else about the
/// frame (which page is resident, the pin count, the dirty flag) lives
/// in [`FrameMeta`] under the pool latch; splitting the two keeps the
/// locking story one-directional: the pool latch is never taken while
/// a page latch is held.
pub(crate) struct Frame {
    /// Frame ID (index in the frame array).
    id: FrameId,
    /// Page data, behind the page latch.
    ///
    /// The `Arc` lets a guard own the latch for its whole lifetime
    /// without borrowing the frame.
    data: Arc<RwLock<PageBuf>>,
}

impl Frame {
    /// Creates a new zeroed frame.
    pub(crate) fn new(id: FrameId) -> Self {
        Self {
            id,
            data: Arc::new(RwLock::new(vec![0u8; PAGE_SIZE])),
        }
    }

    /// Returns the frame ID.
    #[inline]
    pub(crate) fn id(&self) -> FrameId {
        self.id
    }

    /// Returns the page latch around this frame's bytes.
    #[inline]
    pub(crate) fn data(&self) -> &Arc<RwLock<PageBuf>> {
        &self.data
    }
}

/// Per-frame bookkeeping, protected by the pool latch.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameMeta {
    /// Page currently resident, or [`PageId::INVALID`] if unused.
    pub(crate) page_id: PageId,
    /// Number of outstanding handles to the page.
    pub(crate) pin_count: u32,
    /// Whether the bytes differ from the backing store.
    pub(crate) dirty: bool,
}

impl FrameMeta {
    /// Creates metadata for an unused frame.
    pub(crate) fn new() -> Self {
        Self {
            page_id: PageId::INVALID,
            pin_count: 0,
            dirty: false,
        }
    }

    /// Returns true if the frame has outstanding handles.
    #[inline]
    pub(crate) fn is_pinned(&self) -> bool {
        self.pin_count > 0
    }

    /// Resets the metadata to the unused state.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let frame = Frame::new(FrameId::new(3));
        assert_eq!(frame.id().index(), 3);
        assert_eq!(frame.data().read().len(), PAGE_SIZE);
        assert!(frame.data().read().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_meta_lifecycle() {
        let mut meta = FrameMeta::new();
        assert!(!meta.page_id.is_valid());
        assert!(!meta.is_pinned());
        assert!(!meta.dirty);

        meta.page_id = PageId::new(42);
        meta.pin_count = 2;
        meta.dirty = true;
        assert!(meta.is_pinned());

        meta.reset();
        assert!(!meta.page_id.is_valid());
        assert_eq!(meta.pin_count, 0);
        assert!(!meta.dirty);
    }

    #[test]
    fn test_frame_id_conversions() {
        let id = FrameId::from(7usize);
        assert_eq!(id.index(), 7);
        assert_eq!(usize::from(id), 7);
    }
}
