//! Daifuku Parse
//!
//! Declarative parsers for untrusted binary data, built on the cursor and
//! fault model of `daifuku-core` (re-exported here, so this crate is the
//! single import for consumers).
//!
//! The decoding vocabulary is exposed as extension traits on
//! [`Cursor`]:
//!
//! - [`ParseInt`]: fixed-width integers at any byte count and endianness,
//!   with sign/zero extension, canonical-padding validation, and checked
//!   storage-type conversion
//! - [`ParseEnum`]: enumerations decoded by their integer backing and
//!   validated against the case list ([`raw_enum!`] declares one in one shot)
//! - [`ParseString`]: NUL-terminated, counted, and whole-region UTF-8 and
//!   UTF-16 strings with U+FFFD repair
//! - [`ParseBytes`]: counted and remaining byte-buffer copies
//! - [`ParseSeq`]: counted and exhaustive sequences of a user parser
//! - [`ParseRange`]: start/end and start/count range constructors
//!
//! Types implement [`Parse`] to gain the uniform
//! [`from_bytes`](Parse::from_bytes) entry point over any byte source.
//!
//! ```
//! use daifuku_parse::prelude::*;
//!
//! let data = [0x00u8, 0x03, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
//! let values = data
//!     .with_cursor(|cursor| {
//!         let count: u16 = cursor.read_be()?;
//!         cursor.read_seq(count, |c| c.read_be::<u16>())
//!     })
//!     .unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
//!
//! Nothing in this crate panics on malformed input: every structural
//! violation surfaces as a [`Fault`] carrying the offending byte offset
//! when one can be named.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bytes;
pub mod int;
pub mod parse;
pub mod ranges;
pub mod raw;
pub mod seq;
pub mod string;

pub use daifuku_core::{
    convert, converting, BoundedSlice, ByteRange, ByteSource, Checked, Cursor, Fault, FaultKind,
    Result, Scalar,
};

pub use bytes::ParseBytes;
pub use int::{Endian, FixedInt, ParseInt};
pub use parse::Parse;
pub use ranges::ParseRange;
pub use raw::{ParseEnum, RawEnum};
pub use seq::ParseSeq;
pub use string::ParseString;

/// One-stop imports for writing parsers.
pub mod prelude {
    pub use crate::{
        convert, converting, BoundedSlice, ByteRange, ByteSource, Checked, Cursor, Endian, Fault,
        FaultKind, FixedInt, Parse, ParseBytes, ParseEnum, ParseInt, ParseRange, ParseSeq,
        ParseString, RawEnum, Result, Scalar,
    };
}
