//!
//! Sparse f64 vectors that behave as dense vectors
//!
pub mod error;
pub mod mocks;
pub mod prelude;
pub mod vector;

#[cfg(test)]
#[macro_use]
extern crate approx;
