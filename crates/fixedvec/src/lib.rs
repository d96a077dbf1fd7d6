//! Fixed-length owning element storage for numerical computation.
//!
//! This is the leaf storage crate of the workspace. It defines
//! [`FixedVector`], an owning, heap-allocated, fixed-length sequence used as
//! raw element storage by numerical code (weight vectors, activation
//! buffers). The container is deliberately minimal: allocate, index, fill,
//! iterate, release. Resizing, copying, and arithmetic live in the
//! collaborators that consume the storage, not here.
//!
//! # Ownership model
//!
//! A `FixedVector` has exactly one live owner at all times. The type
//! implements neither `Clone` nor `Copy`, so duplication is rejected at
//! compile time; all transfers are moves. [`FixedVector::take`] is the
//! explicit move-out for slot-reuse patterns — the source stays addressable
//! and observably empty afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod iter;
pub mod vector;

// Public re-exports for the primary API surface.
pub use error::StorageError;
pub use iter::IntoIter;
pub use vector::FixedVector;
