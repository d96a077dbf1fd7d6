//! Benchmark utilities for the fixedvec storage crate.
//!
//! Provides deterministic, seed-derived element data so benchmark runs are
//! reproducible: identical seeds produce identical storage contents.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixedvec::FixedVector;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `n` deterministic f32 values from a ChaCha8 stream.
pub fn seeded_values(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random::<f32>()).collect()
}

/// Build a [`FixedVector`] of `n` deterministic f32 values.
pub fn seeded_storage(n: usize, seed: u64) -> FixedVector<f32> {
    seeded_values(n, seed).into()
}
