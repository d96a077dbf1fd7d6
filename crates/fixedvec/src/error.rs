//! Storage-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from the fallible storage constructors.
///
/// Only [`FixedVector::try_sized`](crate::FixedVector::try_sized) and
/// [`FixedVector::try_sized_fill`](crate::FixedVector::try_sized_fill)
/// return these. The infallible constructors propagate allocator failure
/// as the process-global out-of-memory abort instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The requested element count's byte size cannot be represented.
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
    },
    /// The allocator declined the reservation.
    AllocationFailed {
        /// Number of bytes requested.
        requested_bytes: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(
                    f,
                    "requested capacity of {requested} elements overflows the allocatable range"
                )
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
        }
    }
}

impl Error for StorageError {}
