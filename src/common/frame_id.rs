//! Frame identifier type.

use std::fmt;

/// Identifies a frame (slot) in a [`FrameSet`](crate::memory::FrameSet).
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Slot>`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
/// 3. The FIFO cursor wraps with plain `usize` arithmetic
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The slot after this one, wrapping at `capacity`.
    #[inline]
    pub fn next_wrapping(self, capacity: usize) -> Self {
        FrameId((self.0 + 1) % capacity)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
