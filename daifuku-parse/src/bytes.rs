//! Raw byte-buffer parsers.

use alloc::vec::Vec;

use daifuku_core::{Cursor, Result};

/// Byte-copy operations on a [`Cursor`].
pub trait ParseBytes {
    /// Copy exactly `count` bytes into an owned buffer.
    fn read_vec(&mut self, count: impl TryInto<usize>) -> Result<Vec<u8>>;

    /// Copy all remaining bytes into an owned buffer, consuming them.
    /// Never fails.
    fn read_remaining_vec(&mut self) -> Vec<u8>;
}

impl ParseBytes for Cursor<'_> {
    fn read_vec(&mut self, count: impl TryInto<usize>) -> Result<Vec<u8>> {
        let chunk = self.split_bytes(count)?;
        Ok(chunk.remaining_bytes().to_vec())
    }

    fn read_remaining_vec(&mut self) -> Vec<u8> {
        let bytes = self.remaining_bytes().to_vec();
        self.take_remaining_range();
        bytes
    }
}
