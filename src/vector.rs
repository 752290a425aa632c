//!
//! `Vector` sparse f64 vector with dense semantics
//!
//! Values that are not stored are `0.0`, and writing `0.0` removes the entry.
//! The backend storage decides how the non-zero entries are kept:
//!
//! * `HashStorage` random access, unordered iteration
//! * `SequentialStorage` sorted entries, ascending iteration
//! * `DenseStorage` plain `Vec<f64>`
//!
use crate::error::VectorError;
use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;
use log::debug;
use std::hash::{Hash, Hasher};
use std::ops::Index;
pub mod arith;
pub mod dense;
pub mod hash;
pub mod reduce;
pub mod sequential;
pub mod slice;
pub use dense::DenseStorage;
pub use hash::HashStorage;
pub use sequential::SequentialStorage;

/// Vectors having less non-zero entries than this are displayed entry by entry.
pub const DISPLAY_ENTRY_LIMIT: usize = 50;

/// Value of every index without a stored entry.
pub(crate) static ZERO: f64 = 0.0;

/// Backend storage of `Vector`
/// an abstraction of a fixed size f64 table that stores non-zero values only.
///
/// * `new`
///     create an empty storage with fixed dimension
/// * `dimension`
///     get the fixed dimension
/// * `n_nonzero`
///     get the number of stored (non-zero) entries
/// * `get`
///     get the reference to the value in the index (`&0.0` if not stored)
/// * `set`
///     store the value, or remove the entry if the value is `0.0`
/// * `iter_nonzero`
///     get an iterator of (index, value) whose value is not zero.
///
/// Callers (i.e. `Vector`) check `index < dimension` before calling
/// `get` and `set`.
///
pub trait Storage: Clone + Sized {
    ///
    /// Iterator of stored (index, value)
    type NonZeroIter<'a>: Iterator<Item = (usize, f64)>
    where
        Self: 'a;
    ///
    /// Create an empty storage with fixed dimension
    fn new(dimension: usize) -> Self;
    ///
    /// Create an empty storage with the expected number of inserts
    fn with_capacity(dimension: usize, expected_inserts: usize) -> Self {
        let _ = expected_inserts;
        Self::new(dimension)
    }
    ///
    /// Create a storage from (index, value) pairs.
    /// The last write of an index wins and zeros are not stored.
    fn from_entries(dimension: usize, entries: Vec<(usize, f64)>) -> Self {
        let mut storage = Self::with_capacity(dimension, entries.len());
        storage.extend(entries);
        storage
    }
    ///
    /// Get the fixed dimension of this storage
    fn dimension(&self) -> usize;
    ///
    /// Get the number of stored entries
    fn n_nonzero(&self) -> usize;
    ///
    /// Get the reference to the value at the given index
    fn get(&self, index: usize) -> &f64;
    ///
    /// Store the value at the given index, removing it if the value is zero
    fn set(&mut self, index: usize, value: f64);
    ///
    /// `set` a batch of (index, value) pairs in order
    fn extend(&mut self, entries: Vec<(usize, f64)>) {
        for (index, value) in entries {
            self.set(index, value);
        }
    }
    ///
    /// get an iterator of stored (index, value)
    fn iter_nonzero(&self) -> Self::NonZeroIter<'_>;
    ///
    /// Check if this is dense storage or not
    fn is_dense() -> bool;
    ///
    /// Check if `iter_nonzero` is in ascending order of index
    fn is_sorted() -> bool;
}

///
/// (index, value) pair produced by iterating a `Vector`
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorElement {
    pub index: usize,
    pub value: f64,
}

impl VectorElement {
    pub fn new(index: usize, value: f64) -> Self {
        VectorElement { index, value }
    }
}

impl From<(usize, f64)> for VectorElement {
    fn from((index, value): (usize, f64)) -> Self {
        VectorElement::new(index, value)
    }
}

/// `Vector` struct
///
/// fixed dimension f64 vector whose backend storage is `S`.
/// Arithmetic always allocates a new vector of the receiver's storage type,
/// and `set` is the only way to modify a vector in place.
///
/// `IndexMut` is not implemented because writing `0.0` through a reference
/// could not remove the entry.
///
#[derive(Clone, Debug)]
pub struct Vector<S: Storage = HashStorage> {
    /// Backend storage of the Vector
    storage: S,
}

/// hash-backed sparse vector
pub type SparseVector = Vector<HashStorage>;
/// sorted sparse vector, iterated in ascending index order
pub type SequentialSparseVector = Vector<SequentialStorage>;
/// dense counterpart with the same interface
pub type DenseVector = Vector<DenseStorage>;

impl<S: Storage> Vector<S> {
    /// Create a new Vector of the dimension, filled with zeros.
    pub fn new(dimension: usize) -> Vector<S> {
        Vector {
            storage: S::new(dimension),
        }
    }
    /// Create a new empty Vector, with a hint of the number of non-zero entries.
    pub fn with_capacity(dimension: usize, expected_inserts: usize) -> Vector<S> {
        Vector {
            storage: S::with_capacity(dimension, expected_inserts),
        }
    }
    /// Create a Vector of the same dimension and content as the dense array.
    pub fn from_slice(values: &[f64]) -> Vector<S> {
        Vector::from_parts(values.len(), values.iter().copied().enumerate().collect())
    }
    /// Copy the non-zero entries of another vector of any storage.
    pub fn from_vector<T: Storage>(other: &Vector<T>) -> Vector<S> {
        Vector::from_parts(other.dimension(), other.storage.iter_nonzero().collect())
    }
    ///
    /// Create a Vector from (index, value) pairs.
    ///
    /// # Panics
    /// if an index is not less than `dimension`.
    ///
    pub fn from_entries(dimension: usize, entries: &[(usize, f64)]) -> Vector<S> {
        for &(index, _) in entries {
            if index >= dimension {
                panic!("{}", VectorError::IndexOutOfRange { index, dimension });
            }
        }
        Vector::from_parts(dimension, entries.to_vec())
    }
    /// Create a Vector `[first, values[0], values[1], ...]`
    pub fn with_first(first: f64, values: &[f64]) -> Vector<S> {
        let entries = std::iter::once(first)
            .chain(values.iter().copied())
            .enumerate()
            .collect();
        Vector::from_parts(values.len() + 1, entries)
    }
    /// Create a Vector `[values[0], values[1], ..., last]`
    pub fn with_last(values: &[f64], last: f64) -> Vector<S> {
        let entries = values
            .iter()
            .copied()
            .chain(std::iter::once(last))
            .enumerate()
            .collect();
        Vector::from_parts(values.len() + 1, entries)
    }
    /// build from entries that are known to be in range
    pub(crate) fn from_parts(dimension: usize, entries: Vec<(usize, f64)>) -> Vector<S> {
        Vector {
            storage: S::from_entries(dimension, entries),
        }
    }
    /// Get the fixed dimension (the size of the dense view)
    pub fn dimension(&self) -> usize {
        self.storage.dimension()
    }
    /// Get the number of non-zero entries (the size of the sparse view)
    pub fn length(&self) -> usize {
        self.storage.n_nonzero()
    }
    /// Reference to the backend storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
    ///
    /// Get the value at the index. `0.0` if no entry is stored.
    ///
    /// # Panics
    /// if `index >= self.dimension()`.
    ///
    pub fn get(&self, index: usize) -> f64 {
        if let Err(err) = self.check_index(index) {
            panic!("{}", err);
        }
        *self.storage.get(index)
    }
    /// `get` that reports an out-of-range index as an error
    pub fn try_get(&self, index: usize) -> Result<f64, VectorError> {
        self.check_index(index)?;
        Ok(*self.storage.get(index))
    }
    /// value at the index, or `0.0` outside of the dimension
    pub(crate) fn get_or_zero(&self, index: usize) -> f64 {
        if index < self.dimension() {
            *self.storage.get(index)
        } else {
            0.0
        }
    }
    ///
    /// Set the value at the index. Setting `0.0` removes the entry.
    ///
    /// # Panics
    /// if `index >= self.dimension()`.
    ///
    pub fn set(&mut self, index: usize, value: f64) {
        if let Err(err) = self.check_index(index) {
            panic!("{}", err);
        }
        self.storage.set(index, value);
    }
    /// `set` that reports an out-of-range index as an error
    pub fn try_set(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        self.check_index(index)?;
        self.storage.set(index, value);
        Ok(())
    }
    fn check_index(&self, index: usize) -> Result<(), VectorError> {
        if index < self.dimension() {
            Ok(())
        } else {
            Err(VectorError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
        }
    }
    ///
    /// Check that the other operand has the same dimension
    ///
    pub fn check_dimension<T: Storage>(&self, other: &Vector<T>) -> Result<(), VectorError> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            let err = VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            };
            debug!("rejected operand: {}", err);
            Err(err)
        }
    }
    pub(crate) fn assert_dimension<T: Storage>(&self, other: &Vector<T>) {
        if let Err(err) = self.check_dimension(other) {
            panic!("{}", err);
        }
    }
    ///
    /// Get an iterator on every index `0..dimension` including zeros.
    ///
    pub fn iterate(&self) -> Iterate<'_, S> {
        Iterate {
            index: 0,
            vector: self,
        }
    }
    ///
    /// Get an iterator on the non-zero entries.
    /// The order is ascending if `S::is_sorted()`, otherwise the storage order.
    ///
    pub fn iterate_nonzero(&self) -> impl Iterator<Item = VectorElement> + '_ {
        self.storage.iter_nonzero().map(VectorElement::from)
    }
    /// Non-zero entries in ascending index order
    pub fn sorted_entries(&self) -> Vec<(usize, f64)> {
        if S::is_sorted() {
            self.storage.iter_nonzero().collect()
        } else {
            self.storage
                .iter_nonzero()
                .sorted_by_key(|&(index, _)| index)
                .collect()
        }
    }
    pub fn is_sparse(&self) -> bool {
        !S::is_dense()
    }
    pub fn is_dense(&self) -> bool {
        S::is_dense()
    }
    pub fn is_sorted(&self) -> bool {
        S::is_sorted()
    }
    /// Independent copy with the same dimension and entries
    pub fn deep_copy(&self) -> Vector<S> {
        self.clone()
    }
    /// Copy into a vector backed by another storage
    pub fn convert<T: Storage>(&self) -> Vector<T> {
        debug!(
            "converting vector dimension={} non-zero={}",
            self.dimension(),
            self.length()
        );
        Vector::from_vector(self)
    }
    /// Convert to the HashStorage-backed vector.
    pub fn to_hash(&self) -> SparseVector {
        self.convert()
    }
    /// Convert to the SequentialStorage-backed vector.
    pub fn to_sequential(&self) -> SequentialSparseVector {
        self.convert()
    }
    /// Convert to the DenseStorage-backed vector.
    pub fn to_dense(&self) -> DenseVector {
        self.convert()
    }
}

///
/// Iterator on the dense view of `Vector`
pub struct Iterate<'a, S: Storage> {
    /// next index
    index: usize,
    /// reference of the vector
    vector: &'a Vector<S>,
}

impl<'a, S: Storage> Iterator for Iterate<'a, S> {
    type Item = VectorElement;
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.vector.dimension() {
            let index = self.index;
            let value = *self.vector.storage.get(index);
            self.index += 1;
            Some(VectorElement::new(index, value))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.vector.dimension() - self.index;
        (rest, Some(rest))
    }
}

impl<'a, S: Storage> ExactSizeIterator for Iterate<'a, S> {}

/// Read access, vec[i]
impl<S: Storage> Index<usize> for Vector<S> {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        if let Err(err) = self.check_index(index) {
            panic!("{}", err);
        }
        self.storage.get(index)
    }
}

impl<S: Storage> From<Vec<f64>> for Vector<S> {
    fn from(values: Vec<f64>) -> Self {
        Vector::from_slice(&values)
    }
}

impl<S: Storage> From<&[f64]> for Vector<S> {
    fn from(values: &[f64]) -> Self {
        Vector::from_slice(values)
    }
}

impl<S: Storage> FromIterator<f64> for Vector<S> {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let values: Vec<f64> = iter.into_iter().collect();
        Vector::from_slice(&values)
    }
}

///
/// Two vectors are equal if their non-zero entries are equal.
/// The dimension is not compared.
///
/// Values are compared by their bits, so a stored `NaN` equals itself.
/// Stored values are never `±0.0`, where bitwise and IEEE equality differ.
///
impl<S: Storage, T: Storage> PartialEq<Vector<T>> for Vector<S> {
    fn eq(&self, other: &Vector<T>) -> bool {
        self.length() == other.length()
            && self
                .storage
                .iter_nonzero()
                .all(|(index, value)| {
                    other.get_or_zero(index).to_bits() == value.to_bits()
                })
    }
}

impl<S: Storage> Eq for Vector<S> {}

impl<S: Storage> Hash for Vector<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length().hash(state);
        for (index, value) in self.sorted_entries() {
            index.hash(state);
            value.to_bits().hash(state);
        }
    }
}

impl<S: Storage, T: Storage> AbsDiffEq<Vector<T>> for Vector<S> {
    type Epsilon = f64;
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Vector<T>, epsilon: f64) -> bool {
        self.storage
            .iter_nonzero()
            .all(|(i, x)| x.abs_diff_eq(&other.get_or_zero(i), epsilon))
            && other
                .storage
                .iter_nonzero()
                .all(|(i, y)| self.get_or_zero(i).abs_diff_eq(&y, epsilon))
    }
}

impl<S: Storage, T: Storage> RelativeEq<Vector<T>> for Vector<S> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Vector<T>, epsilon: f64, max_relative: f64) -> bool {
        self.storage
            .iter_nonzero()
            .all(|(i, x)| x.relative_eq(&other.get_or_zero(i), epsilon, max_relative))
            && other
                .storage
                .iter_nonzero()
                .all(|(i, y)| self.get_or_zero(i).relative_eq(&y, epsilon, max_relative))
    }
}

impl<S: Storage> std::fmt::Display for Vector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.length() < DISPLAY_ENTRY_LIMIT {
            let body = self
                .sorted_entries()
                .into_iter()
                .map(|(index, value)| format!("{}={:?}", index, value))
                .join(", ");
            write!(f, "[{}]", body)
        } else {
            write!(f, "{}x1", self.dimension())
        }
    }
}
