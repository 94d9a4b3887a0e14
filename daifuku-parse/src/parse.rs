//! The `Parse` trait: types that decode themselves from a cursor.
//!
//! Implementing [`Parse::parse`] gives a type the uniform
//! [`Parse::from_bytes`] entry point over any byte source for free.
//!
//! ```
//! use daifuku_parse::{Cursor, Parse, ParseInt, Result};
//!
//! struct Header {
//!     version: u16,
//!     length: u32,
//! }
//!
//! impl Parse for Header {
//!     fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
//!         Ok(Header {
//!             version: cursor.read_be()?,
//!             length: cursor.read_be()?,
//!         })
//!     }
//! }
//!
//! let header = Header::from_bytes(&[0x00u8, 0x02, 0x00, 0x00, 0x10, 0x00]).unwrap();
//! assert_eq!(header.version, 2);
//! assert_eq!(header.length, 0x1000);
//! ```

use daifuku_core::{ByteSource, Cursor, Result};

use crate::int::ParseInt;

/// A type that can be decoded from a cursor.
pub trait Parse: Sized {
    /// Decode a value, advancing the cursor past the consumed bytes.
    fn parse(cursor: &mut Cursor<'_>) -> Result<Self>;

    /// Decode a value from the start of any byte source.
    fn from_bytes<S: ByteSource + ?Sized>(source: &S) -> Result<Self> {
        source.with_cursor(|cursor| Self::parse(cursor))
    }
}

macro_rules! impl_parse_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            /// Network byte order.
            impl Parse for $ty {
                fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
                    cursor.read_be::<$ty>()
                }
            }
        )*
    };
}

impl_parse_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Fixed-size byte arrays parse as a plain copy, which is how magic
/// numbers and opaque tags are usually consumed.
impl<const N: usize> Parse for [u8; N] {
    fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
        let chunk = cursor.split_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(chunk.remaining_bytes());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daifuku_core::FaultKind;

    #[test]
    fn test_int_impls_use_network_order() {
        assert_eq!(u16::from_bytes(&[0x12u8, 0x34]).unwrap(), 0x1234);
        assert_eq!(i8::from_bytes(&[0xFFu8]).unwrap(), -1);
    }

    #[test]
    fn test_from_bytes_propagates_fault() {
        let fault = u32::from_bytes(&[0u8, 1]).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InsufficientData);
    }

    #[test]
    fn test_byte_array_parse() {
        let magic: [u8; 4] = Parse::from_bytes(&b"QOIf rest"[..4]).unwrap();
        assert_eq!(&magic, b"QOIf");

        let fault = <[u8; 8]>::from_bytes(&[0u8; 4]).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::InsufficientData);
    }

    #[test]
    fn test_derived_struct_parse() {
        struct Pair {
            left: u16,
            right: u16,
        }

        impl Parse for Pair {
            fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
                Ok(Pair {
                    left: cursor.read_be()?,
                    right: cursor.read_be()?,
                })
            }
        }

        let pair = Pair::from_bytes(&[0u8, 1, 0, 2]).unwrap();
        assert_eq!(pair.left, 1);
        assert_eq!(pair.right, 2);
    }
}
