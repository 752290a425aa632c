//!
//! Random vectors for tests and benchmarks
//!
use crate::vector::{Storage, Vector};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// Dense array of `dimension` values, where each value is non-zero with
/// probability `density` and drawn uniformly from `[-10, 10)`.
///
pub fn random_array(dimension: usize, density: f64, seed: u64) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..dimension)
        .map(|_| {
            if rng.gen_bool(density) {
                rng.gen_range(-10.0..10.0)
            } else {
                0.0
            }
        })
        .collect()
}

///
/// Vector with the same content as `random_array(dimension, density, seed)`
///
pub fn random_vector<S: Storage>(dimension: usize, density: f64, seed: u64) -> Vector<S> {
    Vector::from_slice(&random_array(dimension, density, seed))
}
