//! LRU-K eviction policy for the buffer pool.
//!
//! LRU-K selects the victim with the largest backward K-distance: the
//! time since the K-th most recent access. Frames with fewer than K
//! recorded accesses have infinite backward K-distance and are evicted
//! first, in classical LRU order among themselves. This distinguishes
//! frames that are genuinely hot from frames touched a few times in a
//! burst, which plain LRU cannot do.
//!
//! The replacer tracks frames by ID only; it never holds a reference
//! into the frame array.

use std::collections::{HashMap, VecDeque};

use hashlink::LinkedHashSet;

use super::error::{BufferError, BufferResult};
use super::frame::FrameId;

/// Per-frame access record.
struct LruKNode {
    /// Last K access timestamps, oldest first.
    history: VecDeque<u64>,
    /// Whether the frame may be chosen as a victim.
    evictable: bool,
}

/// LRU-K replacement policy.
///
/// Tracked frames are partitioned across two recency-ordered sets:
///
/// - `cold`: frames with fewer than K recorded accesses. These have
///   infinite backward K-distance and are always victimized first.
/// - `hot`: frames with at least K recorded accesses.
///
/// Both sets keep the most recently accessed frame at the back, so a
/// front-to-back scan visits candidates from stalest to freshest.
/// [`evict`](LruKReplacer::evict) returns the first evictable frame in
/// that order, cold set first.
///
/// All operations are O(1) except `evict`, which is O(N) in the worst
/// case (it may have to skip every non-evictable frame).
pub struct LruKReplacer {
    /// Maximum number of frames the replacer will track.
    capacity: usize,
    /// The K of LRU-K.
    k: usize,
    /// Logical clock, incremented on every recorded access.
    current_timestamp: u64,
    /// Number of tracked frames currently marked evictable.
    evictable_count: usize,
    /// Access records for every tracked frame.
    nodes: HashMap<FrameId, LruKNode>,
    /// Frames with fewer than K accesses, most recent at the back.
    cold: LinkedHashSet<FrameId>,
    /// Frames with at least K accesses, most recent at the back.
    hot: LinkedHashSet<FrameId>,
}

impl LruKReplacer {
    /// Creates a replacer that tracks up to `capacity` frames.
    pub fn new(capacity: usize, k: usize) -> Self {
        debug_assert!(k >= 1, "LRU-K requires k >= 1");
        Self {
            capacity,
            k,
            current_timestamp: 0,
            evictable_count: 0,
            nodes: HashMap::with_capacity(capacity),
            cold: LinkedHashSet::new(),
            hot: LinkedHashSet::new(),
        }
    }

    /// Records an access to a frame at the current logical time.
    ///
    /// A frame seen for the first time becomes tracked and starts out
    /// non-evictable. Fails with [`BufferError::ReplacerOverflow`] if
    /// the replacer is already tracking `capacity` frames.
    pub fn record_access(&mut self, frame_id: FrameId) -> BufferResult<()> {
        self.current_timestamp += 1;
        let now = self.current_timestamp;

        match self.nodes.get_mut(&frame_id) {
            Some(node) => {
                node.history.push_back(now);
                if node.history.len() > self.k {
                    node.history.pop_front();
                }
                if node.history.len() >= self.k {
                    // Crossed the K-th access, or refreshed within hot.
                    self.cold.remove(&frame_id);
                    self.hot.remove(&frame_id);
                    self.hot.insert(frame_id);
                } else {
                    self.cold.remove(&frame_id);
                    self.cold.insert(frame_id);
                }
            }
            None => {
                if self.nodes.len() >= self.capacity {
                    return Err(BufferError::ReplacerOverflow {
                        frame_id: frame_id.index(),
                    });
                }
                let mut history = VecDeque::with_capacity(self.k);
                history.push_back(now);
                let node = LruKNode {
                    history,
                    evictable: false,
                };
                if node.history.len() >= self.k {
                    self.hot.insert(frame_id);
                } else {
                    self.cold.insert(frame_id);
                }
                self.nodes.insert(frame_id, node);
            }
        }
        Ok(())
    }

    /// Sets whether a frame may be chosen as a victim.
    ///
    /// Idempotent when the flag already matches; untracked frames are
    /// ignored.
    pub fn set_evictable(&mut self, frame_id: FrameId, evictable: bool) {
        let Some(node) = self.nodes.get_mut(&frame_id) else {
            return;
        };
        if node.evictable != evictable {
            node.evictable = evictable;
            if evictable {
                self.evictable_count += 1;
            } else {
                self.evictable_count -= 1;
            }
        }
    }

    /// Selects and removes the frame with the largest backward
    /// K-distance among evictable frames.
    ///
    /// Frames with fewer than K accesses are considered first, least
    /// recently accessed first; then frames with K accesses in the same
    /// order. Returns `None` when no tracked frame is evictable.
    pub fn evict(&mut self) -> Option<FrameId> {
        if self.evictable_count == 0 {
            return None;
        }
        let victim = self
            .cold
            .iter()
            .chain(self.hot.iter())
            .copied()
            .find(|id| self.nodes.get(id).map_or(false, |n| n.evictable))?;
        self.remove_node(victim);
        Some(victim)
    }

    /// Drops a frame's access record entirely.
    ///
    /// Untracked frames are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the frame is tracked but not evictable. That state can
    /// only be reached by removing a frame that some caller still has
    /// pinned, which is a caller bug.
    pub fn remove(&mut self, frame_id: FrameId) {
        let Some(node) = self.nodes.get(&frame_id) else {
            return;
        };
        assert!(
            node.evictable,
            "removed non-evictable frame {} from replacer",
            frame_id.index()
        );
        self.remove_node(frame_id);
    }

    /// Returns the number of evictable frames.
    pub fn size(&self) -> usize {
        self.evictable_count
    }

    /// Returns the number of tracked frames, evictable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no frame is tracked.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes an evictable frame from all bookkeeping.
    fn remove_node(&mut self, frame_id: FrameId) {
        if !self.cold.remove(&frame_id) {
            self.hot.remove(&frame_id);
        }
        self.nodes.remove(&frame_id);
        self.evictable_count -= 1;
    }
}

impl std::fmt::Debug for LruKReplacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruKReplacer")
            .field("capacity", &self.capacity)
            .field("k", &self.k)
            .field("tracked", &self.nodes.len())
            .field("evictable", &self.evictable_count)
            .finish()
    }
}
