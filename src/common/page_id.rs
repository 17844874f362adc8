//! Page identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page in a reference string.
///
/// Pages are opaque tokens: the simulator only ever compares them for
/// equality. Negative values are legal because an empty frame is a
/// [`Slot::Empty`](crate::memory::Slot), not a reserved page number.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i32) -> Self {
        PageId(id)
    }
}

impl From<i32> for PageId {
    fn from(id: i32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward the formatter so width flags apply.
        fmt::Display::fmt(&self.0, f)
    }
}

/// Convert a slice of raw integers into a reference string.
pub fn pages(ids: &[i32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}
