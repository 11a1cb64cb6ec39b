//! Contract violations raised by sequences, adaptors and algorithms.
//!
//! Every error here is a programmer error. Nothing is retried: a violation is
//! handed to [`report`], which logs it and then either aborts the process or
//! unwinds with a [`Violation`] payload, depending on the installed
//! [`Config`](crate::policy::Config).

use std::panic::Location;

use thiserror::Error;

use crate::policy;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Checked read or write at a position outside the sequence.
    #[error("out-of-bounds access: {0}")]
    OutOfBounds(&'static str),

    /// Index, offset or distance arithmetic left the representable range.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A documented precondition of an operation was not met.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    /// An optional primitive was invoked on a sequence that does not provide it.
    #[error("unsupported operation `{0}` for this sequence")]
    Unsupported(&'static str),
}

/// Panic payload carrying a contract violation and where it was detected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error} at {file}:{line}:{column}")]
pub struct Violation {
    pub error: Error,
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Violation {
    pub fn new(error: Error, location: &Location<'static>) -> Self {
        Self {
            error,
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

/// Report a contract violation using the process-wide policy.
#[cold]
#[track_caller]
pub fn report(error: Error) -> ! {
    policy::config().report(error)
}

#[cold]
#[track_caller]
pub(crate) fn unsupported(op: &'static str) -> ! {
    report(Error::Unsupported(op))
}

#[cold]
#[track_caller]
pub(crate) fn out_of_bounds(what: &'static str) -> ! {
    report(Error::OutOfBounds(what))
}

#[cold]
#[track_caller]
pub(crate) fn precondition(what: &'static str) -> ! {
    report(Error::Precondition(what))
}

#[cold]
#[track_caller]
pub(crate) fn overflow(what: &'static str) -> ! {
    report(Error::Overflow(what))
}
