//! Decoding enumerations by their integer backing.
//!
//! A type opts in by naming its backing integer and mapping raw values to
//! cases; decoding then reads the backing integer and rejects values
//! outside the case list. The [`raw_enum!`] macro writes both halves from
//! one declaration:
//!
//! ```
//! use daifuku_parse::{raw_enum, Cursor, ParseEnum};
//!
//! raw_enum! {
//!     /// Chunk compression method.
//!     pub enum Compression: u8 {
//!         None = 0,
//!         Fast = 1,
//!         Best = 2,
//!     }
//! }
//!
//! let mut cursor = Cursor::new(&[1, 9]);
//! assert_eq!(cursor.read_enum_be::<Compression>().unwrap(), Compression::Fast);
//! assert!(cursor.read_enum_be::<Compression>().is_err());
//! ```

use daifuku_core::{Cursor, Fault, Result};

use crate::int::{Endian, FixedInt, ParseInt};

/// A value type whose wire form is an integer of known width, validated
/// against a finite set of accepted values.
pub trait RawEnum: Sized {
    /// The backing integer type.
    type Raw: FixedInt;

    /// Map a decoded raw value to a case, or `None` if it is not one.
    fn from_raw(raw: Self::Raw) -> Option<Self>;
}

/// Enumeration decoding operations on a [`Cursor`].
pub trait ParseEnum {
    /// Read `E`'s backing integer in the given byte order and validate
    /// membership. Unknown values fault with `InvalidValue` at the field's
    /// first byte, leaving the cursor unchanged.
    fn read_enum<E: RawEnum>(&mut self, endian: Endian) -> Result<E>;

    /// Big-endian form of [`read_enum`](ParseEnum::read_enum).
    fn read_enum_be<E: RawEnum>(&mut self) -> Result<E>;

    /// Little-endian form of [`read_enum`](ParseEnum::read_enum).
    fn read_enum_le<E: RawEnum>(&mut self) -> Result<E>;

    /// Read `E`'s backing integer from `byte_count` bytes (with the same
    /// extension and padding rules as
    /// [`read_sized`](crate::ParseInt::read_sized)) and validate
    /// membership.
    fn read_enum_sized<E: RawEnum>(
        &mut self,
        endian: Endian,
        byte_count: impl TryInto<usize>,
    ) -> Result<E>;
}

impl ParseEnum for Cursor<'_> {
    fn read_enum<E: RawEnum>(&mut self, endian: Endian) -> Result<E> {
        self.atomically(|cursor| {
            let start = cursor.start_offset();
            let raw: E::Raw = cursor.read(endian)?;
            E::from_raw(raw).ok_or_else(|| Fault::invalid_value(start))
        })
    }

    fn read_enum_be<E: RawEnum>(&mut self) -> Result<E> {
        self.read_enum(Endian::Big)
    }

    fn read_enum_le<E: RawEnum>(&mut self) -> Result<E> {
        self.read_enum(Endian::Little)
    }

    fn read_enum_sized<E: RawEnum>(
        &mut self,
        endian: Endian,
        byte_count: impl TryInto<usize>,
    ) -> Result<E> {
        let count: usize = byte_count
            .try_into()
            .map_err(|_| Fault::invalid_value(self.start_offset()))?;
        self.atomically(|cursor| {
            let start = cursor.start_offset();
            let raw: E::Raw = cursor.read_sized(endian, count)?;
            E::from_raw(raw).ok_or_else(|| Fault::invalid_value(start))
        })
    }
}

/// Declare an enum with a fixed-width integer wire form and implement
/// [`RawEnum`] for it in one shot.
#[macro_export]
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($raw)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $crate::RawEnum for $name {
            type Raw = $raw;

            fn from_raw(raw: $raw) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}
