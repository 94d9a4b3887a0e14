//! Deferred byte ranges.
//!
//! A [`ByteRange`] remembers a sub-region of a byte region without borrowing
//! it, so a parser can note "the payload lives at offsets 40..96" and come
//! back later. Ranges are validated against a region when a cursor seeks to
//! them, not when they are formed.

use core::ops::Range;

use serde::{Deserialize, Serialize};

/// A pair of byte offsets into some region, carrying no borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    /// Inclusive lower offset.
    pub start: usize,
    /// Exclusive upper offset.
    pub end: usize,
}

impl ByteRange {
    /// Create a range from its offsets.
    pub fn new(start: usize, end: usize) -> Self {
        ByteRange { start, end }
    }

    /// Number of bytes the range spans.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the range spans no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if `offset` falls inside the range.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<Range<usize>> for ByteRange {
    fn from(range: Range<usize>) -> Self {
        ByteRange::new(range.start, range.end)
    }
}

impl From<ByteRange> for Range<usize> {
    fn from(range: ByteRange) -> Self {
        range.start..range.end
    }
}
