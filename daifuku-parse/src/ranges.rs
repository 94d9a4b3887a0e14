//! Range constructors parsed from bound pairs.
//!
//! Formats describe spans either as start/end pairs or as start/count
//! pairs; both arrive as untrusted integers. These constructors read the
//! two bounds with a caller-supplied parser and validate ordering and
//! overflow before forming the range.

use core::ops::{Range, RangeInclusive};

use daifuku_core::{Cursor, Fault, Result, Scalar};

/// Range parsing operations on a [`Cursor`].
pub trait ParseRange<'a> {
    /// Read `start` then `end` with `bound` and form `start..end`.
    /// Faults with `InvalidValue` if `start > end`.
    fn read_range<T, F>(&mut self, bound: F) -> Result<Range<T>>
    where
        T: Scalar,
        F: FnMut(&mut Cursor<'a>) -> Result<T>;

    /// Read `start` then `end` with `bound` and form `start..=end`.
    /// Faults with `InvalidValue` if `start > end`.
    fn read_range_inclusive<T, F>(&mut self, bound: F) -> Result<RangeInclusive<T>>
    where
        T: Scalar,
        F: FnMut(&mut Cursor<'a>) -> Result<T>;

    /// Read `start` then `count` with `bound` and form
    /// `start..start + count`. Faults with `InvalidValue` on a negative
    /// count or if the upper bound overflows.
    fn read_range_counted<T, F>(&mut self, bound: F) -> Result<Range<T>>
    where
        T: Scalar,
        F: FnMut(&mut Cursor<'a>) -> Result<T>;
}

impl<'a> ParseRange<'a> for Cursor<'a> {
    fn read_range<T, F>(&mut self, mut bound: F) -> Result<Range<T>>
    where
        T: Scalar,
        F: FnMut(&mut Cursor<'a>) -> Result<T>,
    {
        let start = bound(self)?;
        let end_at = self.start_offset();
        let end = bound(self)?;
        if start > end {
            return Err(Fault::invalid_value(end_at));
        }
        Ok(start..end)
    }

    fn read_range_inclusive<T, F>(&mut self, mut bound: F) -> Result<RangeInclusive<T>>
    where
        T: Scalar,
        F: FnMut(&mut Cursor<'a>) -> Result<T>,
    {
        let start = bound(self)?;
        let end_at = self.start_offset();
        let end = bound(self)?;
        if start > end {
            return Err(Fault::invalid_value(end_at));
        }
        Ok(start..=end)
    }

    fn read_range_counted<T, F>(&mut self, mut bound: F) -> Result<Range<T>>
    where
        T: Scalar,
        F: FnMut(&mut Cursor<'a>) -> Result<T>,
    {
        let start = bound(self)?;
        let count_at = self.start_offset();
        let count = bound(self)?;
        if count < T::ZERO {
            return Err(Fault::invalid_value(count_at));
        }
        let end = start.try_add(count).map_err(|fault| fault.at(count_at))?;
        Ok(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::{Endian, ParseInt};
    use daifuku_core::FaultKind;

    #[test]
    fn test_start_end_half_open() {
        let data = [0x00u8, 0x10, 0x00, 0x40];
        let mut cursor = Cursor::new(&data);
        let range = cursor.read_range(|c| c.read_be::<u16>()).unwrap();
        assert_eq!(range, 0x10..0x40);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_start_end_inclusive() {
        let data = [0x10u8, 0x10];
        let mut cursor = Cursor::new(&data);
        let range = cursor
            .read_range_inclusive(|c| c.read_be::<u8>())
            .unwrap();
        assert_eq!(range, 0x10..=0x10);
    }

    #[test]
    fn test_start_end_out_of_order() {
        let data = [0x40u8, 0x10];
        let mut cursor = Cursor::new(&data);
        let fault = cursor.read_range(|c| c.read_be::<u8>()).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InvalidValue);
        assert_eq!(fault.location(), Some(1));
    }

    #[test]
    fn test_start_count() {
        let data = [0x00u8, 0x10, 0x00, 0x04];
        let mut cursor = Cursor::new(&data);
        let range = cursor
            .read_range_counted(|c| c.read_be::<u16>())
            .unwrap();
        assert_eq!(range, 0x10..0x14);
    }

    #[test]
    fn test_start_count_overflow() {
        let data = [0xFFu8, 0xFF, 0x00, 0x01];
        let mut cursor = Cursor::new(&data);
        let fault = cursor
            .read_range_counted(|c| c.read_be::<u16>())
            .unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InvalidValue);
        assert_eq!(fault.location(), Some(2));
    }

    #[test]
    fn test_start_count_negative() {
        let data = [0x00u8, 0xFF];
        let mut cursor = Cursor::new(&data);
        let result: Result<Range<i8>> = cursor.read_range_counted(|c| c.read(Endian::Big));
        let fault = result.unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InvalidValue);
        assert_eq!(fault.location(), Some(1));
    }
}
