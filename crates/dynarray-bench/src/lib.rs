//! Benchmark fixtures for the dynarray container.
//!
//! Provides pre-built arrays at the sizes the benches exercise so that
//! setup cost stays out of the measured sections.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynArray;

/// Build an array of `n` sequential `u64` values.
///
/// Sized exactly, so reads and clones measure steady-state behaviour with
/// no spare capacity in play.
pub fn sequential_u64(n: usize) -> DynArray<u64> {
    let mut array = DynArray::with_capacity(n.max(1)).expect("bench allocation");
    for v in 0..n as u64 {
        array.push(v).expect("bench push");
    }
    array
}
