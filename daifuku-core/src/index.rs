//! Bounded collection access for untrusted indices.
//!
//! Indices and ranges decoded from wire data go through these accessors
//! instead of the panicking `[]` operator. Both the absent-on-failure and
//! the fault-on-failure spellings are provided.

use core::ops::Range;

use crate::error::{Fault, Result};

/// Bounds-checked indexing with untrusted indices.
///
/// Index arguments accept any integer type; negative or unrepresentable
/// values are simply out of bounds, never a panic.
pub trait BoundedSlice<T> {
    /// The element at `index`, if in bounds.
    fn at(&self, index: impl TryInto<usize>) -> Option<&T>;

    /// The subslice at `range`, if both bounds are in bounds.
    fn at_range(&self, range: Range<usize>) -> Option<&[T]>;

    /// Fault-returning form of [`at`](BoundedSlice::at).
    fn try_at(&self, index: impl TryInto<usize>) -> Result<&T>;

    /// Fault-returning form of [`at_range`](BoundedSlice::at_range).
    fn try_at_range(&self, range: Range<usize>) -> Result<&[T]>;
}

impl<T> BoundedSlice<T> for [T] {
    fn at(&self, index: impl TryInto<usize>) -> Option<&T> {
        self.get(index.try_into().ok()?)
    }

    fn at_range(&self, range: Range<usize>) -> Option<&[T]> {
        self.get(range)
    }

    fn try_at(&self, index: impl TryInto<usize>) -> Result<&T> {
        self.at(index).ok_or_else(|| Fault::invalid_value(None))
    }

    fn try_at_range(&self, range: Range<usize>) -> Result<&[T]> {
        self.at_range(range).ok_or_else(|| Fault::invalid_value(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;

    #[test]
    fn test_at_in_bounds() {
        let data = [10u8, 20, 30];
        assert_eq!(data.at(0), Some(&10));
        assert_eq!(data.at(2u64), Some(&30));
        assert_eq!(data.at(3), None);
        assert_eq!(data.at(-1i32), None);
    }

    #[test]
    fn test_at_range() {
        let data = [10u8, 20, 30];
        assert_eq!(data.at_range(0..3), Some(&data[..]));
        assert_eq!(data.at_range(1..2), Some(&[20u8][..]));
        assert_eq!(data.at_range(3..3), Some(&[][..]));
        assert_eq!(data.at_range(2..4), None);
        assert_eq!(data.at_range(2..1), None);
    }

    #[test]
    fn test_try_forms_fault() {
        let data = [10u8, 20, 30];
        assert_eq!(*data.try_at(1).unwrap(), 20);
        let fault = data.try_at(7).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InvalidValue);
        assert!(data.try_at_range(1..9).is_err());
    }
}
