//! Data generation utilities for testing.
//!
//! This module provides functions to generate randomized payloads for cells.

/// Generates `count` random integer values.
///
/// Uses a seeded generator, so a given `(count, seed)` pair always yields the
/// same sequence.
pub fn generate_values(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count).map(|_| rng.i64(..)).collect()
}

/// Generates `count` random alphanumeric strings, each up to `max_len` characters.
pub fn generate_strings(count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let len = rng.usize(0..=max_len);
            (0..len).map(|_| rng.alphanumeric()).collect()
        })
        .collect()
}
