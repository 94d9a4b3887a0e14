//! Fixed-width integer decoding.
//!
//! One generic engine decodes any built-in integer type from any byte count
//! in either byte order:
//!
//! - the natural width (`byte_count == size_of::<T>()`): a plain load;
//! - fewer bytes: the value is widened with two's-complement sign extension
//!   for signed targets and zero extension for unsigned ones;
//! - more bytes: the extra bytes are padding at the non-significant end and
//!   must equal the sign-extension byte of the decoded value, so a stored
//!   field is rejected unless it is the canonical wide encoding of a value
//!   that fits the target without loss.
//!
//! On success the cursor advances exactly `byte_count` bytes; on any
//! failure it is unchanged.

use daifuku_core::{convert, Cursor, Fault, Result, Scalar};
use serde::{Deserialize, Serialize};

/// Byte order of a stored integer. Single-byte loads ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// A built-in integer type the decoding engine can produce.
///
/// `shl8_or` shifts one byte into the low end of the accumulator; the
/// double shift keeps the shift amount legal for 8-bit types.
pub trait FixedInt: Scalar {
    /// Encoded size in bytes.
    const WIDTH: usize;
    /// Whether the type is two's-complement signed.
    const SIGNED: bool;
    /// All bits set; the accumulator seed for sign extension.
    const ALL_ONES: Self;

    /// `(self << 8) | byte`, discarding bits shifted out of the type.
    fn shl8_or(self, byte: u8) -> Self;

    /// The canonical padding byte for this value: `0xFF` for negative
    /// signed values, `0x00` otherwise.
    fn fill_byte(self) -> u8 {
        if Self::SIGNED && self < Self::ZERO {
            0xFF
        } else {
            0x00
        }
    }
}

macro_rules! impl_fixed_int {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl FixedInt for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();
                const SIGNED: bool = $signed;
                const ALL_ONES: Self = !0;

                #[inline]
                fn shl8_or(self, byte: u8) -> Self {
                    ((self << 4) << 4) | (byte as $ty)
                }
            }
        )*
    };
}

impl_fixed_int!(
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
    usize => false,
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
);

/// Decode a window of at most `T::WIDTH` bytes, extending to full width.
///
/// The accumulator starts as all ones when the stored sign bit is set on a
/// signed target, so shifting the window in produces the sign-extended
/// value directly.
fn decode_extended<T: FixedInt>(window: &[u8], endian: Endian) -> T {
    debug_assert!(!window.is_empty() && window.len() <= T::WIDTH);
    let stored_msb = match endian {
        Endian::Big => window[0],
        Endian::Little => window[window.len() - 1],
    };
    let mut acc = if T::SIGNED && stored_msb & 0x80 != 0 {
        T::ALL_ONES
    } else {
        T::ZERO
    };
    match endian {
        Endian::Big => {
            for &byte in window {
                acc = acc.shl8_or(byte);
            }
        }
        Endian::Little => {
            for &byte in window.iter().rev() {
                acc = acc.shl8_or(byte);
            }
        }
    }
    acc
}

/// Decode a window wider than `T::WIDTH` bytes, validating the padding.
///
/// The target value occupies the significant end of the window (high end
/// for big-endian, low end for little-endian); every remaining byte must
/// equal the value's sign-extension byte. `base` is the window's absolute
/// offset, used to locate the first bad padding byte.
fn decode_padded<T: FixedInt>(bytes: &[u8], endian: Endian, base: usize) -> Result<T> {
    debug_assert!(bytes.len() > T::WIDTH);
    let pad = bytes.len() - T::WIDTH;
    let (significant, padding, pad_base) = match endian {
        Endian::Big => (&bytes[pad..], &bytes[..pad], base),
        Endian::Little => (&bytes[..T::WIDTH], &bytes[T::WIDTH..], base + T::WIDTH),
    };
    let value = decode_extended::<T>(significant, endian);
    let fill = value.fill_byte();
    if let Some(bad) = padding.iter().position(|&byte| byte != fill) {
        return Err(Fault::invalid_value(pad_base + bad));
    }
    Ok(value)
}

/// Integer decoding operations on a [`Cursor`].
pub trait ParseInt {
    /// Read a `T` stored at its natural width in the given byte order.
    fn read<T: FixedInt>(&mut self, endian: Endian) -> Result<T>;

    /// Read a big-endian `T` at its natural width.
    fn read_be<T: FixedInt>(&mut self) -> Result<T>;

    /// Read a little-endian `T` at its natural width.
    fn read_le<T: FixedInt>(&mut self) -> Result<T>;

    /// Read a `T` stored in `byte_count` bytes.
    ///
    /// Narrower storage is sign- or zero-extended per `T`'s signedness;
    /// wider storage must carry canonical sign-extension padding. A zero or
    /// negative `byte_count` faults with `InvalidValue`.
    fn read_sized<T: FixedInt>(
        &mut self,
        endian: Endian,
        byte_count: impl TryInto<usize>,
    ) -> Result<T>;

    /// Read a `S` at its natural width, then convert losslessly to `T`,
    /// faulting with `InvalidValue` if the value does not fit.
    fn read_converted<S, T>(&mut self, endian: Endian) -> Result<T>
    where
        S: FixedInt,
        T: TryFrom<S>;
}

impl ParseInt for Cursor<'_> {
    fn read<T: FixedInt>(&mut self, endian: Endian) -> Result<T> {
        let Some(window) = self.remaining_bytes().get(..T::WIDTH) else {
            return Err(Fault::insufficient_data(self.start_offset()));
        };
        let value = decode_extended::<T>(window, endian);
        self.seek_by(T::WIDTH)?;
        Ok(value)
    }

    fn read_be<T: FixedInt>(&mut self) -> Result<T> {
        self.read(Endian::Big)
    }

    fn read_le<T: FixedInt>(&mut self) -> Result<T> {
        self.read(Endian::Little)
    }

    fn read_sized<T: FixedInt>(
        &mut self,
        endian: Endian,
        byte_count: impl TryInto<usize>,
    ) -> Result<T> {
        let start = self.start_offset();
        let count: usize = byte_count
            .try_into()
            .map_err(|_| Fault::invalid_value(start))?;
        if count == 0 {
            return Err(Fault::invalid_value(start));
        }
        let Some(bytes) = self.remaining_bytes().get(..count) else {
            return Err(Fault::insufficient_data(start));
        };
        let value = if count <= T::WIDTH {
            decode_extended::<T>(bytes, endian)
        } else {
            decode_padded::<T>(bytes, endian, start)?
        };
        self.seek_by(count)?;
        Ok(value)
    }

    fn read_converted<S, T>(&mut self, endian: Endian) -> Result<T>
    where
        S: FixedInt,
        T: TryFrom<S>,
    {
        self.atomically(|cursor| {
            let start = cursor.start_offset();
            let stored: S = cursor.read(endian)?;
            convert::<T, S>(stored).map_err(|fault| fault.at(start))
        })
    }
}
