//! Sequence combinators.
//!
//! Both combinators run a user-supplied element parser against the cursor.
//! The exhaustive form enforces forward progress: an element parser that
//! succeeds without consuming anything would loop forever on hostile input,
//! so that case is reported as a fault instead.

use alloc::vec::Vec;

use daifuku_core::{Cursor, Fault, Result};

/// Sequence parsing operations on a [`Cursor`].
pub trait ParseSeq<'a> {
    /// Run `parse` exactly `count` times, collecting the results.
    /// A negative count faults with `InvalidValue`; element faults
    /// propagate as-is.
    fn read_seq<T, F>(&mut self, count: impl TryInto<usize>, parse: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Cursor<'a>) -> Result<T>;

    /// Run `parse` repeatedly until the cursor is empty, collecting the
    /// results. Faults with `InvalidValue` at the stuck offset if an
    /// iteration succeeds without advancing the cursor.
    fn read_seq_exhaustive<T, F>(&mut self, parse: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Cursor<'a>) -> Result<T>;
}

impl<'a> ParseSeq<'a> for Cursor<'a> {
    fn read_seq<T, F>(&mut self, count: impl TryInto<usize>, mut parse: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Cursor<'a>) -> Result<T>,
    {
        let count: usize = count
            .try_into()
            .map_err(|_| Fault::invalid_value(self.start_offset()))?;
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(parse(self)?);
        }
        Ok(items)
    }

    fn read_seq_exhaustive<T, F>(&mut self, mut parse: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Cursor<'a>) -> Result<T>,
    {
        let mut items = Vec::new();
        while !self.is_empty() {
            let before = self.start_offset();
            let item = parse(self)?;
            if self.start_offset() <= before && !self.is_empty() {
                log::debug!("element parser made no progress at offset {before}");
                return Err(Fault::invalid_value(before));
            }
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::ParseInt;
    use daifuku_core::FaultKind;

    #[test]
    fn test_counted_sequence() {
        let data = [0x00u8, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04];
        let mut cursor = Cursor::new(&data);
        let values = cursor.read_seq(4, |c| c.read_be::<u16>()).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_counted_sequence_too_many() {
        let data = [0x00u8, 0x01, 0x00, 0x02];
        let mut cursor = Cursor::new(&data);
        let fault = cursor.read_seq(3, |c| c.read_be::<u16>()).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InsufficientData);
        assert_eq!(fault.location(), Some(4));
    }

    #[test]
    fn test_counted_sequence_negative_count() {
        let data = [0u8; 4];
        let mut cursor = Cursor::new(&data);
        let fault = cursor
            .read_seq(-1i32, |c| c.read_be::<u16>())
            .unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InvalidValue);
    }

    #[test]
    fn test_counted_sequence_zero() {
        let data = [0u8; 2];
        let mut cursor = Cursor::new(&data);
        let values: Vec<u16> = cursor.read_seq(0, |c| c.read_be::<u16>()).unwrap();
        assert!(values.is_empty());
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_exhaustive_sequence() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data);
        let values = cursor.read_seq_exhaustive(|c| c.read_be::<u8>()).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_exhaustive_sequence_empty_input() {
        let mut cursor = Cursor::new(&[]);
        let values: Vec<u8> = cursor.read_seq_exhaustive(|c| c.read_be::<u8>()).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_exhaustive_sequence_element_fault() {
        let data = [0x00u8, 0x01, 0x00];
        let mut cursor = Cursor::new(&data);
        let fault = cursor
            .read_seq_exhaustive(|c| c.read_be::<u16>())
            .unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InsufficientData);
    }

    #[test]
    fn test_exhaustive_sequence_requires_progress() {
        let data = [1u8, 2, 3];
        let mut cursor = Cursor::new(&data);
        let fault = cursor.read_seq_exhaustive(|_| Ok(0u8)).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InvalidValue);
        assert_eq!(fault.location(), Some(0));
    }

    #[test]
    fn test_exhaustive_final_element_may_empty_cursor() {
        let data = [7u8, 8];
        let mut cursor = Cursor::new(&data);
        let values = cursor
            .read_seq_exhaustive(|c| {
                let b = c.read_be::<u8>()?;
                Ok(b * 2)
            })
            .unwrap();
        assert_eq!(values, vec![14, 16]);
    }
}
