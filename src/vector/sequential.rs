//!
//! Sparse storage that keeps entries sorted by index in a `Vec`
//!
//! Suited for vectors that are built once (from an array or another vector)
//! and iterated many times. Appending in ascending index order is O(1),
//! lookups are binary searches, and inserting before the last entry shifts
//! the tail.
//!
use super::{Storage, ZERO};
use itertools::{EitherOrBoth, Itertools};
use log::trace;

/// Sorted sparse storage
///
/// `elements` is strictly ascending in index and has no zero values.
#[derive(Debug, Clone)]
pub struct SequentialStorage {
    /// virtual size of this storage
    dimension: usize,
    /// `(index, value)` sorted by index
    elements: Vec<(usize, f64)>,
}

impl SequentialStorage {
    /// position of the index in `elements`, or the insertion point
    #[inline]
    fn position(&self, index: usize) -> Result<usize, usize> {
        self.elements.binary_search_by_key(&index, |&(i, _)| i)
    }
    ///
    /// Merge a batch that is strictly ascending in index into the elements.
    /// Values of the batch overwrite the stored ones, and zeros in the batch
    /// remove the entry.
    ///
    /// # Panics
    /// if the batch is not strictly ascending or has an index out of range.
    ///
    pub fn merge_sorted(&mut self, batch: Vec<(usize, f64)>) {
        assert!(
            batch.windows(2).all(|w| w[0].0 < w[1].0),
            "merge_sorted: batch is not strictly ascending"
        );
        assert!(
            batch.last().map_or(true, |&(i, _)| i < self.dimension),
            "merge_sorted: index out of range"
        );
        let elements = std::mem::take(&mut self.elements);
        self.elements = elements
            .into_iter()
            .merge_join_by(batch, |a, b| a.0.cmp(&b.0))
            .map(|pair| match pair {
                EitherOrBoth::Left(stored) => stored,
                EitherOrBoth::Right(new) => new,
                EitherOrBoth::Both(_, new) => new,
            })
            .filter(|&(_, value)| value != 0.0)
            .collect();
    }
    /// entries as a slice, ascending in index
    pub fn as_slice(&self) -> &[(usize, f64)] {
        &self.elements
    }
}

/// sort by index, keeping the last write of each index
fn normalize(mut entries: Vec<(usize, f64)>) -> Vec<(usize, f64)> {
    // stable sort, so the later write of the same index stays behind
    entries.sort_by_key(|&(index, _)| index);
    entries
        .into_iter()
        .coalesce(|a, b| if a.0 == b.0 { Ok(b) } else { Err((a, b)) })
        .collect()
}

impl Storage for SequentialStorage {
    type NonZeroIter<'a> = SequentialStorageIterator<'a>;
    fn new(dimension: usize) -> SequentialStorage {
        SequentialStorage {
            dimension,
            elements: Vec::new(),
        }
    }
    fn with_capacity(dimension: usize, expected_inserts: usize) -> SequentialStorage {
        SequentialStorage {
            dimension,
            elements: Vec::with_capacity(expected_inserts),
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
    fn get(&self, index: usize) -> &f64 {
        debug_assert!(index < self.dimension);
        match self.position(index) {
            Ok(p) => &self.elements[p].1,
            Err(_) => &ZERO,
        }
    }
    fn set(&mut self, index: usize, value: f64) {
        assert!(index < self.dimension);
        if value == 0.0 {
            if let Ok(p) = self.position(index) {
                self.elements.remove(p);
            }
            return;
        }
        // fast path: appending after the last entry
        if self.elements.last().map_or(true, |&(last, _)| last < index) {
            self.elements.push((index, value));
            return;
        }
        match self.position(index) {
            Ok(p) => self.elements[p].1 = value,
            Err(p) => {
                trace!("out-of-order insert index={} at position={}", index, p);
                self.elements.insert(p, (index, value));
            }
        }
    }
    fn extend(&mut self, entries: Vec<(usize, f64)>) {
        self.merge_sorted(normalize(entries));
    }
    fn iter_nonzero(&self) -> SequentialStorageIterator<'_> {
        SequentialStorageIterator {
            inner: self.elements.iter(),
        }
    }
    fn is_dense() -> bool {
        false
    }
    fn is_sorted() -> bool {
        true
    }
}

/// Iterator on SequentialStorage (index, value), ascending in index
pub struct SequentialStorageIterator<'a> {
    inner: std::slice::Iter<'a, (usize, f64)>,
}

impl<'a> Iterator for SequentialStorageIterator<'a> {
    type Item = (usize, f64);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for SequentialStorageIterator<'a> {}
