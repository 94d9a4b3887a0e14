//! Fault type reported by every fallible parsing operation.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Fault>;

/// The three failure classes a parse can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum FaultKind {
    /// A read would have crossed the end of the readable region.
    #[error("insufficient data")]
    InsufficientData,
    /// A decoded value violated a structural constraint: arithmetic or
    /// conversion overflow, a negative count, an out-of-range seek, bad
    /// padding, an unknown enum discriminant, a malformed range.
    #[error("invalid value")]
    InvalidValue,
    /// A user-supplied callback failed.
    #[error("user error")]
    UserError,
}

/// A parsing failure: the kind of fault, the byte offset of the first
/// offending byte when one can be named, and (with the `std` feature) an
/// optional wrapped cause.
#[derive(Debug)]
pub struct Fault {
    kind: FaultKind,
    location: Option<usize>,
    #[cfg(feature = "std")]
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Fault {
    fn new(kind: FaultKind, location: Option<usize>) -> Self {
        Fault {
            kind,
            location,
            #[cfg(feature = "std")]
            cause: None,
        }
    }

    /// A read needed more bytes than the cursor had left.
    pub fn insufficient_data(location: impl Into<Option<usize>>) -> Self {
        Self::new(FaultKind::InsufficientData, location.into())
    }

    /// A decoded or computed value violated a structural constraint.
    ///
    /// Pure arithmetic has no cursor in scope and passes `None`; callers
    /// that know the offending byte attach it with [`Fault::at`].
    pub fn invalid_value(location: impl Into<Option<usize>>) -> Self {
        Self::new(FaultKind::InvalidValue, location.into())
    }

    /// A user-supplied callback failed.
    pub fn user_error(location: impl Into<Option<usize>>) -> Self {
        Self::new(FaultKind::UserError, location.into())
    }

    /// Attach a byte offset if the fault does not already carry one.
    pub fn at(mut self, location: usize) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }

    /// Wrap the underlying error that produced this fault.
    #[cfg(feature = "std")]
    pub fn with_cause(
        mut self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Which of the three failure classes this is.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Byte offset into the original region of the first offending byte,
    /// when one can be named.
    pub fn location(&self) -> Option<usize> {
        self.location
    }

    /// The wrapped cause, if any.
    #[cfg(feature = "std")]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(offset) => write!(f, "{} at offset {}", self.kind, offset),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl core::error::Error for Fault {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let fault = Fault::insufficient_data(12);
        assert_eq!(fault.to_string(), "insufficient data at offset 12");
    }

    #[test]
    fn test_display_without_location() {
        let fault = Fault::invalid_value(None);
        assert_eq!(fault.to_string(), "invalid value");
    }

    #[test]
    fn test_at_does_not_override() {
        let fault = Fault::invalid_value(3).at(9);
        assert_eq!(fault.location(), Some(3));

        let fault = Fault::invalid_value(None).at(9);
        assert_eq!(fault.location(), Some(9));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_cause_is_chained() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let fault = Fault::user_error(4).with_cause(io);
        assert_eq!(fault.kind(), FaultKind::UserError);
        assert!(fault.source().is_some());
        assert_eq!(fault.cause().unwrap().to_string(), "boom");
    }
}
