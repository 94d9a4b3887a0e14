//! Byte-source adapters.
//!
//! Any contiguous byte container becomes parseable through the scoped
//! [`ByteSource::with_cursor`] callback: the cursor is created for the
//! duration of the call and cannot escape it, so the borrow discipline of
//! [`Cursor`] is enforced at the entry point.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::range::ByteRange;

/// A contiguous byte container that can lend out a cursor.
///
/// Implemented for everything `AsRef<[u8]>`: slices, arrays, owned buffers,
/// and platform byte containers.
pub trait ByteSource {
    /// Derive a cursor over the full contents, run `body` with it, and
    /// return the callback's value or fault.
    fn with_cursor<T, F>(&self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Cursor<'_>) -> Result<T>;

    /// Like [`with_cursor`](ByteSource::with_cursor), but position the
    /// cursor at a deferred range first. On success the range is updated in
    /// place to the cursor's final span, so a follow-up call resumes where
    /// `body` stopped.
    fn with_cursor_at<T, F>(&self, range: &mut ByteRange, body: F) -> Result<T>
    where
        F: FnOnce(&mut Cursor<'_>) -> Result<T>;
}

impl<B: AsRef<[u8]> + ?Sized> ByteSource for B {
    fn with_cursor<T, F>(&self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Cursor<'_>) -> Result<T>,
    {
        let bytes = self.as_ref();
        log::trace!("parsing {}-byte region", bytes.len());
        let mut cursor = Cursor::new(bytes);
        body(&mut cursor)
    }

    fn with_cursor_at<T, F>(&self, range: &mut ByteRange, body: F) -> Result<T>
    where
        F: FnOnce(&mut Cursor<'_>) -> Result<T>,
    {
        let mut cursor = Cursor::new(self.as_ref());
        cursor.seek_to_range(*range)?;
        let value = body(&mut cursor)?;
        *range = cursor.current_range();
        Ok(value)
    }
}
