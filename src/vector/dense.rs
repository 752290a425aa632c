//!
//! Dense storage that uses `std::Vec`
//!
use super::Storage;

/// Dense storage powered by `std::Vec`
///
/// Zeros are kept in the `Vec`, and the number of non-zero values is counted
/// on every `set` so that `n_nonzero` does not scan.
#[derive(Debug, Clone)]
pub struct DenseStorage {
    values: Vec<f64>,
    n_nonzero: usize,
}

impl DenseStorage {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Storage for DenseStorage {
    type NonZeroIter<'a> = DenseStorageIterator<'a>;
    fn new(dimension: usize) -> DenseStorage {
        DenseStorage {
            values: vec![0.0; dimension],
            n_nonzero: 0,
        }
    }
    #[inline]
    fn dimension(&self) -> usize {
        self.values.len()
    }
    #[inline]
    fn n_nonzero(&self) -> usize {
        self.n_nonzero
    }
    #[inline]
    fn get(&self, index: usize) -> &f64 {
        &self.values[index]
    }
    fn set(&mut self, index: usize, value: f64) {
        let was_nonzero = self.values[index] != 0.0;
        let is_nonzero = value != 0.0;
        match (was_nonzero, is_nonzero) {
            (false, true) => self.n_nonzero += 1,
            (true, false) => self.n_nonzero -= 1,
            _ => {}
        }
        // -0.0 is stored as 0.0
        self.values[index] = if is_nonzero { value } else { 0.0 };
    }
    fn iter_nonzero(&self) -> DenseStorageIterator<'_> {
        DenseStorageIterator {
            inner: self.values.iter().enumerate(),
        }
    }
    fn is_dense() -> bool {
        true
    }
    fn is_sorted() -> bool {
        true
    }
}

/// Iterator on non-zero (index, value) of DenseStorage
pub struct DenseStorageIterator<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, f64>>,
}

impl<'a> Iterator for DenseStorageIterator<'a> {
    type Item = (usize, f64);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find(|&(_, &value)| value != 0.0)
            .map(|(index, &value)| (index, value))
    }
}
