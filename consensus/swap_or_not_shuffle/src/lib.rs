//! Provides the swap-or-not index permutation used to sample committees.
//!
//! Only the single-index form is exported: committees are recomputed on demand from a handful of
//! positions, never by shuffling the whole validator registry.

mod compute_shuffled_index;

pub use compute_shuffled_index::compute_shuffled_index;
