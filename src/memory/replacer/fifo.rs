//! FIFO (First-In-First-Out) replacement policy.

use log::trace;

use crate::common::{Error, FrameId, PageId, Result};
use crate::memory::FrameSet;

use super::Replacer;

/// Evicts pages in the order their slots were first filled.
///
/// Slots fill lowest-index first, so the oldest resident page always sits
/// under a cursor that starts at slot 0 and advances by one per eviction.
/// Hits and the initial fill never move the cursor.
#[derive(Debug)]
pub struct FifoReplacer {
    /// Slot holding the longest-resident page.
    cursor: FrameId,
}

impl FifoReplacer {
    /// Create a new FIFO replacer with the cursor at slot 0.
    pub fn new() -> Self {
        Self {
            cursor: FrameId::new(0),
        }
    }

    /// Slot that will be evicted next.
    #[inline]
    pub fn cursor(&self) -> FrameId {
        self.cursor
    }
}

impl Default for FifoReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer for FifoReplacer {
    fn select_victim(
        &mut self,
        frames: &FrameSet,
        index: usize,
        _references: &[PageId],
    ) -> Result<FrameId> {
        let victim = self.cursor;
        if frames.page_at(victim).is_none() {
            return Err(Error::InvariantViolation(format!(
                "FIFO cursor at empty {} on reference {}",
                victim, index
            )));
        }

        self.cursor = victim.next_wrapping(frames.capacity());
        trace!("fifo: victim {}, cursor -> {}", victim, self.cursor);

        Ok(victim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set(pages: &[i32]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for &p in pages {
            frames.insert_into_empty(PageId::new(p)).unwrap();
        }
        frames
    }

    #[test]
    fn test_fifo_evicts_in_fill_order() {
        let frames = full_set(&[1, 2, 3]);
        let mut replacer = FifoReplacer::new();

        assert_eq!(replacer.select_victim(&frames, 3, &[]).unwrap(), FrameId::new(0));
        assert_eq!(replacer.select_victim(&frames, 4, &[]).unwrap(), FrameId::new(1));
        assert_eq!(replacer.select_victim(&frames, 5, &[]).unwrap(), FrameId::new(2));
        // Wraps around
        assert_eq!(replacer.select_victim(&frames, 6, &[]).unwrap(), FrameId::new(0));
    }

    #[test]
    fn test_fifo_single_frame() {
        let frames = full_set(&[9]);
        let mut replacer = FifoReplacer::new();

        for i in 0..3 {
            assert_eq!(replacer.select_victim(&frames, i, &[]).unwrap(), FrameId::new(0));
        }
        assert_eq!(replacer.cursor(), FrameId::new(0));
    }

    #[test]
    fn test_fifo_cursor_on_empty_slot() {
        let frames = FrameSet::new(2);
        let mut replacer = FifoReplacer::new();

        assert!(matches!(
            replacer.select_victim(&frames, 0, &[]),
            Err(Error::InvariantViolation(_))
        ));
        // A failed selection does not move the cursor.
        assert_eq!(replacer.cursor(), FrameId::new(0));
    }
}
