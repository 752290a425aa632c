//!
//! Sparse storage that uses `FnvHashMap`
//!
use super::{Storage, ZERO};
use fnv::FnvHashMap;
use std::collections::hash_map;

/// Sparse storage powered by `FnvHashMap`
///
/// Expected O(1) get/set/remove. The order of `iter_nonzero` is
/// the internal order of the hash map.
#[derive(Debug, Clone)]
pub struct HashStorage {
    /// virtual size of this storage
    dimension: usize,
    /// non-zero elements `index -> value`
    elements: FnvHashMap<usize, f64>,
}

impl Storage for HashStorage {
    type NonZeroIter<'a> = HashStorageIterator<'a>;
    fn new(dimension: usize) -> HashStorage {
        HashStorage {
            dimension,
            elements: FnvHashMap::default(),
        }
    }
    fn with_capacity(dimension: usize, expected_inserts: usize) -> HashStorage {
        HashStorage {
            dimension,
            elements: FnvHashMap::with_capacity_and_hasher(expected_inserts, Default::default()),
        }
    }
    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }
    #[inline]
    fn n_nonzero(&self) -> usize {
        self.elements.len()
    }
    #[inline]
    fn get(&self, index: usize) -> &f64 {
        debug_assert!(index < self.dimension);
        self.elements.get(&index).unwrap_or(&ZERO)
    }
    fn set(&mut self, index: usize, value: f64) {
        assert!(index < self.dimension);
        if value != 0.0 {
            self.elements.insert(index, value);
        } else {
            self.elements.remove(&index);
        }
    }
    fn iter_nonzero(&self) -> HashStorageIterator<'_> {
        HashStorageIterator {
            inner: self.elements.iter(),
        }
    }
    fn is_dense() -> bool {
        false
    }
    fn is_sorted() -> bool {
        false
    }
}

/// Iterator on HashStorage (index, value)
pub struct HashStorageIterator<'a> {
    inner: hash_map::Iter<'a, usize, f64>,
}

impl<'a> Iterator for HashStorageIterator<'a> {
    type Item = (usize, f64);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&index, &value)| (index, value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for HashStorageIterator<'a> {}
