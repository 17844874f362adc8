//! OPT (optimal, Belady) replacement policy.
//!
//! On each eviction, every resident page is looked up in the remaining
//! reference string. The page used farthest in the future loses its slot;
//! a page that is never used again loses it first.

use log::trace;

use crate::common::{Error, FrameId, PageId, Result};
use crate::memory::FrameSet;

use super::Replacer;

/// When a page is next referenced.
///
/// Variant order gives the eviction priority: any `At` compares below
/// `Never`, and two `At`s compare by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    /// Next referenced at this index.
    At(usize),
    /// Not referenced again.
    Never,
}

/// Find the next reference to `page` strictly after `index`.
pub fn next_use(page: PageId, index: usize, references: &[PageId]) -> NextUse {
    references
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, r)| **r == page)
        .map_or(NextUse::Never, |(i, _)| NextUse::At(i))
}

/// Evicts the resident page whose next use is farthest away.
///
/// Ties (only possible between pages that never recur) go to the lowest
/// slot index.
#[derive(Debug, Default)]
pub struct OptReplacer;

impl OptReplacer {
    /// Create a new OPT replacer.
    pub fn new() -> Self {
        OptReplacer
    }
}

impl Replacer for OptReplacer {
    fn select_victim(
        &mut self,
        frames: &FrameSet,
        index: usize,
        references: &[PageId],
    ) -> Result<FrameId> {
        let mut victim: Option<(FrameId, NextUse)> = None;

        for (frame_id, page) in frames.resident() {
            let distance = next_use(page, index, references);
            trace!("opt: {} holds {} next used {:?}", frame_id, page, distance);

            let better = match victim {
                None => true,
                Some((_, best)) => distance > best,
            };
            if better {
                victim = Some((frame_id, distance));
            }
            if distance == NextUse::Never {
                // Nothing beats never; keep the lowest slot.
                break;
            }
        }

        victim.map(|(frame_id, _)| frame_id).ok_or_else(|| {
            Error::InvariantViolation(format!(
                "OPT found no eviction candidate on reference {} ({} of {} frames resident)",
                index,
                frames.len(),
                frames.capacity()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn full_set(ids: &[i32]) -> FrameSet {
        let mut frames = FrameSet::new(ids.len());
        for &p in ids {
            frames.insert_into_empty(PageId::new(p)).unwrap();
        }
        frames
    }

    #[test]
    fn test_next_use_is_strictly_after_index() {
        let refs = pages(&[1, 2, 1, 3]);

        assert_eq!(next_use(PageId::new(1), 0, &refs), NextUse::At(2));
        assert_eq!(next_use(PageId::new(1), 2, &refs), NextUse::Never);
        assert_eq!(next_use(PageId::new(3), 0, &refs), NextUse::At(3));
        assert_eq!(next_use(PageId::new(9), 0, &refs), NextUse::Never);
    }

    #[test]
    fn test_next_use_ordering() {
        assert!(NextUse::At(1) < NextUse::At(5));
        assert!(NextUse::At(usize::MAX) < NextUse::Never);
    }

    #[test]
    fn test_opt_evicts_farthest() {
        // Resident 1,2,3 at index 3; next uses: 1@4, 2@5, 3@9.
        let refs = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let frames = full_set(&[1, 2, 3]);
        let mut replacer = OptReplacer::new();

        assert_eq!(replacer.select_victim(&frames, 3, &refs).unwrap(), FrameId::new(2));
    }

    #[test]
    fn test_opt_never_beats_any_distance() {
        // 1 is used next at index 5, 2 never again, 3 at index 4.
        let refs = pages(&[1, 2, 3, 4, 3, 1]);
        let frames = full_set(&[1, 2, 3]);
        let mut replacer = OptReplacer::new();

        assert_eq!(replacer.select_victim(&frames, 3, &refs).unwrap(), FrameId::new(1));
    }

    #[test]
    fn test_opt_never_tie_goes_to_lowest_slot() {
        let refs = pages(&[5, 6, 7, 8, 6]);
        let frames = full_set(&[5, 6, 7]);
        let mut replacer = OptReplacer::new();

        // 5 and 7 never recur; 5 sits in the lower slot.
        assert_eq!(replacer.select_victim(&frames, 3, &refs).unwrap(), FrameId::new(0));
    }

    #[test]
    fn test_opt_empty_set_is_invariant_violation() {
        let frames = FrameSet::new(2);
        let mut replacer = OptReplacer::new();

        match replacer.select_victim(&frames, 0, &[]) {
            Err(Error::InvariantViolation(msg)) => assert!(msg.contains("no eviction candidate")),
            other => panic!("Expected InvariantViolation, got {:?}", other),
        }
    }
}
