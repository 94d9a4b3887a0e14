//! Bounds-checked view over a byte region.
//!
//! A [`Cursor`] is a non-owning window into an immutable byte region. It
//! tracks the offset of the next byte to consume and an exclusive upper
//! bound for reads, and every movement is validated against both before any
//! state changes. Failed operations leave the cursor exactly where it was.
//!
//! Absolute offsets always refer to the underlying region, not the current
//! window; slicing a child cursor narrows the readable span but keeps the
//! region addressing intact, so a deferred [`ByteRange`] captured anywhere
//! can be seeked to from anywhere.

use core::fmt;
use core::str;

use crate::algebra::Scalar;
use crate::error::{Fault, Result};
use crate::range::ByteRange;

/// A cursor over a byte region.
///
/// Reads consume bytes from `start` toward `end`; both are offsets into the
/// full region. The borrow ties the cursor's lifetime to the region, and
/// child cursors produced by slicing share that borrow.
#[derive(Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor covering an entire region.
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor {
            bytes,
            start: 0,
            end: bytes.len(),
        }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        debug_assert!(self.start <= self.end && self.end <= self.bytes.len());
        self.end - self.start
    }

    /// True if no bytes are left to read.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offset of the next byte to be consumed.
    pub fn start_offset(&self) -> usize {
        self.start
    }

    /// Exclusive upper bound for reads.
    pub fn end_offset(&self) -> usize {
        self.end
    }

    /// Length of the full underlying region.
    pub fn region_len(&self) -> usize {
        self.bytes.len()
    }

    /// The readable span as a deferred range.
    pub fn current_range(&self) -> ByteRange {
        ByteRange::new(self.start, self.end)
    }

    /// The remaining bytes as a slice borrowed from the region.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.bytes[self.start..self.end]
    }

    /// Convert a caller-supplied count into `usize`, faulting on negative
    /// or unrepresentable values.
    fn arg(&self, value: impl TryInto<usize>) -> Result<usize> {
        value
            .try_into()
            .map_err(|_| Fault::invalid_value(self.start))
    }

    /// Split off a child cursor covering the next `count` bytes and advance
    /// past them.
    ///
    /// The child reads exactly `[start, start + count)`; this cursor resumes
    /// at `start + count` with its end untouched. Negative counts fault with
    /// `InvalidValue`, short regions with `InsufficientData`.
    pub fn split_bytes(&mut self, count: impl TryInto<usize>) -> Result<Cursor<'a>> {
        let count = self.arg(count)?;
        if count > self.remaining() {
            return Err(Fault::insufficient_data(self.start));
        }
        let child = Cursor {
            bytes: self.bytes,
            start: self.start,
            end: self.start + count,
        };
        self.start += count;
        Ok(child)
    }

    /// Split off a child cursor covering `count` elements of `stride` bytes
    /// each. The product is computed with overflow checking.
    pub fn split_elements(&mut self, stride: usize, count: impl TryInto<usize>) -> Result<Cursor<'a>> {
        let count = self.arg(count)?;
        let bytes = stride.try_mul(count).map_err(|fault| fault.at(self.start))?;
        self.split_bytes(bytes)
    }

    /// Like [`split_bytes`](Cursor::split_bytes), but capture the span as a
    /// deferred range instead of a child cursor.
    pub fn range_of_bytes(&mut self, count: impl TryInto<usize>) -> Result<ByteRange> {
        self.split_bytes(count).map(|child| child.current_range())
    }

    /// Like [`split_elements`](Cursor::split_elements), but capture the span
    /// as a deferred range instead of a child cursor.
    pub fn range_of_elements(&mut self, stride: usize, count: impl TryInto<usize>) -> Result<ByteRange> {
        self.split_elements(stride, count)
            .map(|child| child.current_range())
    }

    /// Capture the whole readable span as a deferred range and advance to
    /// the end. Never fails.
    pub fn take_remaining_range(&mut self) -> ByteRange {
        let range = self.current_range();
        self.start = self.end;
        range
    }

    /// Slice the next `count` bytes and validate them as UTF-8.
    ///
    /// Validation failure is a `UserError` located at the first invalid
    /// byte; the cursor does not move.
    pub fn split_utf8(&mut self, count: impl TryInto<usize>) -> Result<&'a str> {
        let count = self.arg(count)?;
        if count > self.remaining() {
            return Err(Fault::insufficient_data(self.start));
        }
        let bytes = &self.bytes[self.start..self.start + count];
        match str::from_utf8(bytes) {
            Ok(text) => {
                self.start += count;
                Ok(text)
            }
            Err(error) => {
                let fault = Fault::user_error(self.start + error.valid_up_to());
                #[cfg(feature = "std")]
                let fault = fault.with_cause(error);
                Err(fault)
            }
        }
    }

    /// Advance the start offset by `offset`. Relative seeks only move
    /// forward; `0 <= offset <= remaining`.
    pub fn seek_by(&mut self, offset: impl TryInto<usize>) -> Result<()> {
        let offset = self.arg(offset)?;
        if offset > self.remaining() {
            return Err(Fault::invalid_value(self.start));
        }
        self.start += offset;
        Ok(())
    }

    /// Place the start offset `offset` bytes before the end of the readable
    /// span; `0 <= offset <= remaining`.
    pub fn seek_from_end(&mut self, offset: impl TryInto<usize>) -> Result<()> {
        let offset = self.arg(offset)?;
        if offset > self.remaining() {
            return Err(Fault::invalid_value(self.start));
        }
        self.start = self.end - offset;
        Ok(())
    }

    /// Seek to an absolute offset in the region and re-open the readable
    /// span to the region's end. This is the one operation that may move the
    /// end bound forward, and the sanctioned way to move backward.
    pub fn seek_to(&mut self, offset: impl TryInto<usize>) -> Result<()> {
        let offset = self.arg(offset)?;
        if offset > self.bytes.len() {
            return Err(Fault::invalid_value(self.start));
        }
        self.start = offset;
        self.end = self.bytes.len();
        Ok(())
    }

    /// Seek to a deferred range, validated against this cursor's region.
    pub fn seek_to_range(&mut self, range: ByteRange) -> Result<()> {
        if range.start > range.end || range.end > self.bytes.len() {
            return Err(Fault::invalid_value(self.start));
        }
        self.start = range.start;
        self.end = range.end;
        Ok(())
    }

    /// By-copy form of [`seek_by`](Cursor::seek_by).
    pub fn seeking_by(&self, offset: impl TryInto<usize>) -> Result<Cursor<'a>> {
        let mut copy = self.clone();
        copy.seek_by(offset)?;
        Ok(copy)
    }

    /// By-copy form of [`seek_from_end`](Cursor::seek_from_end).
    pub fn seeking_from_end(&self, offset: impl TryInto<usize>) -> Result<Cursor<'a>> {
        let mut copy = self.clone();
        copy.seek_from_end(offset)?;
        Ok(copy)
    }

    /// By-copy form of [`seek_to`](Cursor::seek_to).
    pub fn seeking_to(&self, offset: impl TryInto<usize>) -> Result<Cursor<'a>> {
        let mut copy = self.clone();
        copy.seek_to(offset)?;
        Ok(copy)
    }

    /// By-copy form of [`seek_to_range`](Cursor::seek_to_range).
    pub fn seeking_to_range(&self, range: ByteRange) -> Result<Cursor<'a>> {
        let mut copy = self.clone();
        copy.seek_to_range(range)?;
        Ok(copy)
    }

    /// Run `body` on a copy of this cursor and commit the copy's position
    /// back only if `body` succeeds. On failure this cursor is untouched.
    ///
    /// This is the one sanctioned recovery primitive: wrap a tentative
    /// multi-step parse in `atomically`, catch the fault, and retry with
    /// alternate logic on the unchanged cursor.
    pub fn atomically<T, F>(&mut self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Cursor<'a>) -> Result<T>,
    {
        let mut tentative = self.clone();
        match body(&mut tentative) {
            Ok(value) => {
                *self = tentative;
                Ok(value)
            }
            Err(fault) => {
                log::trace!(
                    "atomic parse failed ({fault}); cursor restored to offset {}",
                    self.start
                );
                Err(fault)
            }
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("region_len", &self.bytes.len())
            .finish()
    }
}
