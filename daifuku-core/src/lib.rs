//! Daifuku Core
//!
//! Memory-safe primitives for parsing untrusted binary data:
//!
//! - [`Cursor`]: a non-owning, bounds-checked view over a byte region with
//!   controlled seeking, slicing, and transactional recovery
//! - [`ByteRange`]: a deferred sub-region remembered without a borrow
//! - [`Fault`]: the single failure type, one of three kinds, annotated with
//!   a byte position when one can be named
//! - [`Checked`] and [`Scalar`]: overflow-safe arithmetic for sizes, counts,
//!   and offsets computed from parsed values
//! - [`ByteSource`]: scoped adapters turning any contiguous byte container
//!   into a cursor
//!
//! The decoding vocabulary built on these primitives (integers, strings,
//! sequences, ranges) lives in the `daifuku-parse` crate.
//!
//! No operation in this crate panics on any input; malformed or hostile
//! data always surfaces as a [`Fault`].

#![cfg_attr(not(feature = "std"), no_std)]

pub mod algebra;
pub mod cursor;
pub mod error;
pub mod index;
pub mod range;
pub mod source;

pub use algebra::{convert, converting, Checked, Scalar};
pub use cursor::Cursor;
pub use error::{Fault, FaultKind, Result};
pub use index::BoundedSlice;
pub use range::ByteRange;
pub use source::ByteSource;
