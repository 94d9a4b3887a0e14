//! String parsers.
//!
//! UTF-8 decoding repairs invalid sequences to U+FFFD rather than failing,
//! matching how text fields in real formats are best consumed; strict
//! validation is available through [`Cursor::split_utf8`]. UTF-16 decoding
//! interprets the bytes as native-layout 16-bit code units and repairs
//! unpaired surrogates the same way.

use alloc::string::String;

use daifuku_core::{Cursor, Fault, Result, Scalar};

/// String decoding operations on a [`Cursor`].
pub trait ParseString {
    /// Read a NUL-terminated UTF-8 string: everything before the first
    /// `0x00` byte, repaired; the terminator is consumed but not included.
    /// A missing terminator faults with `InvalidValue` and leaves the
    /// cursor unchanged.
    fn read_utf8_nul(&mut self) -> Result<String>;

    /// Decode all remaining bytes as UTF-8 with repair, consuming them.
    fn read_utf8_remaining(&mut self) -> String;

    /// Read exactly `count` bytes and decode as UTF-8 with repair.
    fn read_utf8(&mut self, count: impl TryInto<usize>) -> Result<String>;

    /// Decode all remaining bytes as native-layout UTF-16 code units with
    /// repair, consuming them. An odd number of remaining bytes faults
    /// with `InvalidValue` at the unpaired final byte.
    fn read_utf16_remaining(&mut self) -> Result<String>;

    /// Read exactly `code_units` 16-bit code units and decode as UTF-16
    /// with repair. The byte count is computed with overflow checking.
    fn read_utf16(&mut self, code_units: impl TryInto<usize>) -> Result<String>;
}

fn decode_utf16_units(bytes: &[u8]) -> String {
    debug_assert!(bytes.len() % 2 == 0);
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

impl ParseString for Cursor<'_> {
    fn read_utf8_nul(&mut self) -> Result<String> {
        let bytes = self.remaining_bytes();
        let Some(nul) = bytes.iter().position(|&byte| byte == 0) else {
            return Err(Fault::invalid_value(self.start_offset()));
        };
        let text = String::from_utf8_lossy(&bytes[..nul]).into_owned();
        self.seek_by(nul + 1)?;
        Ok(text)
    }

    fn read_utf8_remaining(&mut self) -> String {
        let text = String::from_utf8_lossy(self.remaining_bytes()).into_owned();
        self.take_remaining_range();
        text
    }

    fn read_utf8(&mut self, count: impl TryInto<usize>) -> Result<String> {
        let chunk = self.split_bytes(count)?;
        Ok(String::from_utf8_lossy(chunk.remaining_bytes()).into_owned())
    }

    fn read_utf16_remaining(&mut self) -> Result<String> {
        if self.remaining() % 2 != 0 {
            return Err(Fault::invalid_value(self.end_offset() - 1));
        }
        let text = decode_utf16_units(self.remaining_bytes());
        self.take_remaining_range();
        Ok(text)
    }

    fn read_utf16(&mut self, code_units: impl TryInto<usize>) -> Result<String> {
        let start = self.start_offset();
        let code_units: usize = code_units
            .try_into()
            .map_err(|_| Fault::invalid_value(start))?;
        let byte_count = code_units.try_mul(2).map_err(|fault| fault.at(start))?;
        let chunk = self.split_bytes(byte_count)?;
        Ok(decode_utf16_units(chunk.remaining_bytes()))
    }
}
