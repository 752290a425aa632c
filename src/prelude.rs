//!
//! globally-available parts
//!
pub use crate::error::VectorError;
pub use crate::vector::{
    DenseStorage, DenseVector, HashStorage, SequentialSparseVector, SequentialStorage,
    SparseVector, Storage, Vector, VectorElement,
};
