//! Array-specific error types.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A constructor was asked for a capacity of zero slots.
    InvalidCapacity,
    /// An indexed access outside the logical length.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },
    /// An operation that requires at least one element was called on an
    /// empty array.
    Empty {
        /// The operation that was attempted (`"pop"`, `"front"`, `"back"`).
        operation: &'static str,
    },
    /// The underlying allocator could not satisfy a buffer reservation.
    AllocationFailed {
        /// Target capacity, in elements, of the failed reservation.
        requested: usize,
        /// The allocator's reported failure.
        source: TryReserveError,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => {
                write!(f, "invalid initial capacity: 0")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty { operation } => {
                write!(f, "{operation} on an empty array")
            }
            Self::AllocationFailed { requested, source } => {
                write!(f, "allocation of {requested} slots failed: {source}")
            }
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
