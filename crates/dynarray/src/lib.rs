//! Growable array container with explicit capacity management.
//!
//! [`DynArray`] owns a contiguous buffer, tracks a logical length and a
//! contract capacity separately, and grows by doubling when an append finds
//! the buffer full. All storage is safe `Vec`-backed; there is no `unsafe`
//! in this crate.
//!
//! # Design
//!
//! - **Value semantics.** Two arrays never share storage. Duplication is the
//!   explicit, allocation-fallible [`DynArray::try_clone`]; assignment is
//!   copy-and-swap via [`DynArray::assign`], which leaves the target
//!   untouched when the copy fails.
//! - **Fallible allocation.** Constructors and growth reserve through
//!   `Vec::try_reserve_exact` and surface failure as
//!   [`ArrayError::AllocationFailed`] instead of aborting.
//! - **Checked access.** [`DynArray::get`] and the index operator share one
//!   bounds check; no unchecked variant is exposed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod error;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use error::ArrayError;
