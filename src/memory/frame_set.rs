//! FrameSet - the fixed pool of physical frames.
//!
//! A [`FrameSet`] is an ordered sequence of [`Slot`]s. Each slot is either
//! empty or holds one resident page. Slots fill lowest-index first and never
//! revert to empty, so once the set is full it stays full.

use std::fmt;

use crate::common::{Error, FrameId, PageId, Result};

/// One physical frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// No page loaded yet.
    #[default]
    Empty,
    /// Holds a resident page.
    Occupied(PageId),
}

impl Slot {
    /// The resident page, if any.
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(page) => Some(*page),
        }
    }

    /// Check if the slot is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => f.pad(""),
            Slot::Occupied(page) => fmt::Display::fmt(page, f),
        }
    }
}

/// Fixed-capacity set of frames.
///
/// # Invariants
/// - No page is resident in more than one slot.
/// - Occupied slots form a prefix: `slots[..filled]` are occupied and the
///   rest are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    /// Slots in frame order.
    slots: Vec<Slot>,

    /// Number of occupied slots (only grows, up to capacity).
    filled: usize,
}

impl FrameSet {
    /// Create a frame set with `capacity` empty slots.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            slots: vec![Slot::Empty; capacity],
            filled: 0,
        }
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Check if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Check if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.capacity()
    }

    /// Check if `page` is resident in some slot.
    pub fn contains(&self, page: PageId) -> bool {
        self.find(page).is_some()
    }

    /// Slot holding `page`, if resident.
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.slots[..self.filled]
            .iter()
            .position(|slot| *slot == Slot::Occupied(page))
            .map(FrameId::new)
    }

    /// Page resident in `frame_id`, or `None` for an empty or out-of-range slot.
    #[inline]
    pub fn page_at(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).and_then(Slot::page)
    }

    /// Iterate over `(slot, page)` for occupied slots in frame order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots[..self.filled]
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.page().map(|page| (FrameId::new(i), page)))
    }

    /// Place `page` in the lowest-index empty slot.
    ///
    /// # Errors
    /// - `Error::NoFreeFrames` if the set is already full
    pub fn insert_into_empty(&mut self, page: PageId) -> Result<FrameId> {
        if self.is_full() {
            return Err(Error::NoFreeFrames);
        }
        debug_assert!(!self.contains(page), "page {} already resident", page);

        let frame_id = FrameId::new(self.filled);
        self.slots[frame_id.0] = Slot::Occupied(page);
        self.filled += 1;

        Ok(frame_id)
    }

    /// Overwrite the page in `frame_id`, returning the page that was there.
    ///
    /// # Panics
    /// Panics if `frame_id` is not an occupied slot.
    pub fn replace(&mut self, frame_id: FrameId, page: PageId) -> PageId {
        assert!(
            frame_id.0 < self.filled,
            "replace on unoccupied {}",
            frame_id
        );
        debug_assert!(!self.contains(page), "page {} already resident", page);

        let old = std::mem::replace(&mut self.slots[frame_id.0], Slot::Occupied(page));
        match old {
            Slot::Occupied(evicted) => evicted,
            Slot::Empty => unreachable!("occupied prefix contained an empty slot"),
        }
    }

    /// Copy of the current slot contents, in frame order.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots.clone()
    }
}
