//!
//! Errors reported by the checked (`try_*`) vector operations
//!
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("index {index} is out of range for a vector of dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("invalid slice range {start}..{end} for a vector of dimension {dimension}")]
    InvalidRange {
        start: usize,
        end: usize,
        dimension: usize,
    },
}
