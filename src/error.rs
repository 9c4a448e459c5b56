// error.rs - Error type shared by every scalar function.
//
// Each variant is fatal to the call that raised it. Missing operands are
// not errors; the functions degrade to FALSE or NULL instead.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::RangeInclusive;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FunctionError>;

/// Error surfaced to the host when a function call fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// Wrong number of arguments for the named function.
    Arity {
        function: &'static str,
        expected: RangeInclusive<usize>,
    },
    /// The flag string contained characters outside `imgsx`.
    InvalidFlag { flags: String },
    /// The pattern failed to compile under the regex engine.
    InvalidPattern { message: String },
    /// A working buffer could not be allocated.
    OutOfMemory,
    /// No function is registered under the given name.
    NoSuchFunction(String),
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::Arity { function, expected } => {
                let (lo, hi) = (*expected.start(), *expected.end());
                if lo == hi {
                    write!(f, "{}() requires exactly {} arguments", function, lo)
                } else {
                    write!(
                        f,
                        "{} requires {} or {} arguments",
                        function.to_ascii_uppercase(),
                        lo,
                        hi
                    )
                }
            }
            FunctionError::InvalidFlag { flags } => {
                write!(f, "invalid regex flag used: {:?}", flags)
            }
            FunctionError::InvalidPattern { message } => write!(f, "invalid regex: {}", message),
            FunctionError::OutOfMemory => write!(f, "out of memory"),
            FunctionError::NoSuchFunction(name) => write!(f, "no such function: {}", name),
        }
    }
}

impl std::error::Error for FunctionError {}

impl From<regress::Error> for FunctionError {
    fn from(err: regress::Error) -> Self {
        FunctionError::InvalidPattern {
            message: err.to_string(),
        }
    }
}

impl From<TryReserveError> for FunctionError {
    fn from(_: TryReserveError) -> Self {
        FunctionError::OutOfMemory
    }
}
