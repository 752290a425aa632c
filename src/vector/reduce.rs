//!
//! Reductions of `Vector` into a scalar
//!
use super::{Storage, Vector};
use crate::error::VectorError;

impl<S: Storage> Vector<S> {
    /// Sum of the values
    pub fn sum(&self) -> f64 {
        self.storage.iter_nonzero().map(|(_, value)| value).sum()
    }
    ///
    /// Maximum value.
    ///
    /// Scans the non-zero entries, and if at least one implicit zero exists
    /// a negative maximum is replaced by `0.0`.
    ///
    pub fn max(&self) -> f64 {
        let mut max = -f64::MAX;
        let mut n_iterated = 0;
        for (_, value) in self.storage.iter_nonzero() {
            if max < value {
                max = value;
            }
            n_iterated += 1;
        }
        if n_iterated != self.dimension() && max < 0.0 {
            max = 0.0;
        }
        max
    }
    ///
    /// Minimum of the non-zero values (`f64::MAX` if there is none).
    ///
    /// Unlike `max`, the implicit zeros are not taken into account:
    /// `[0, 3, 5].min() == 3.0`.
    ///
    pub fn min(&self) -> f64 {
        let mut min = f64::MAX;
        for (_, value) in self.storage.iter_nonzero() {
            if min > value {
                min = value;
            }
        }
        min
    }
    ///
    /// Index of the maximum non-zero value, `0` if there are no non-zero values.
    ///
    pub fn max_index(&self) -> usize {
        let mut index = 0;
        let mut max = -f64::MAX;
        for (i, value) in self.storage.iter_nonzero() {
            if max < value {
                max = value;
                index = i;
            }
        }
        index
    }
    ///
    /// Index of the minimum non-zero value, `0` if there are no non-zero values.
    ///
    pub fn min_index(&self) -> usize {
        let mut index = 0;
        let mut min = f64::MAX;
        for (i, value) in self.storage.iter_nonzero() {
            if min > value {
                min = value;
                index = i;
            }
        }
        index
    }
    ///
    /// Inner product.
    ///
    /// Iterates the non-zero entries of the operand having less of them and
    /// probes the other one by index.
    ///
    pub fn dot<T: Storage>(&self, other: &Vector<T>) -> f64 {
        self.assert_dimension(other);
        self.inner_product(other)
    }
    /// `dot` that reports a dimension mismatch as an error
    pub fn try_dot<T: Storage>(&self, other: &Vector<T>) -> Result<f64, VectorError> {
        self.check_dimension(other)?;
        Ok(self.inner_product(other))
    }
    fn inner_product<T: Storage>(&self, other: &Vector<T>) -> f64 {
        if other.length() < self.length() {
            other
                .storage
                .iter_nonzero()
                .map(|(index, y)| *self.storage.get(index) * y)
                .sum()
        } else {
            self.storage
                .iter_nonzero()
                .map(|(index, x)| *other.storage.get(index) * x)
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{DenseVector, SequentialSparseVector, SparseVector};

    #[test]
    fn max_with_implicit_zero() {
        let v = SparseVector::from_slice(&[1.0, 0.0, 0.0, 6.0, 0.0, 4.0]);
        assert_eq!(v.max(), 6.0);
        assert_eq!(v.max_index(), 3);
        let v = SparseVector::from_slice(&[-1.0, -5.0, 0.0, -2.0]);
        assert_eq!(v.max(), 0.0);
        // no implicit zero: the negative maximum stays
        let v = SequentialSparseVector::from_slice(&[-1.0, -5.0, -2.0]);
        assert_eq!(v.max(), -1.0);
        assert_eq!(v.max_index(), 0);
        // all zero
        let v = SparseVector::new(3);
        assert_eq!(v.max(), 0.0);
        assert_eq!(v.max_index(), 0);
    }
    #[test]
    fn min_ignores_implicit_zero() {
        let v = SequentialSparseVector::from_slice(&[2.0, -1.0, 3.0, 0.0, 0.0, 4.0, 5.0]);
        assert_eq!(v.min(), -1.0);
        assert_eq!(v.min_index(), 1);
        // the implicit zero is not the minimum
        let v = SparseVector::from_slice(&[0.0, 3.0, 5.0]);
        assert_eq!(v.min(), 3.0);
        assert_eq!(v.min_index(), 1);
        let v = SparseVector::new(4);
        assert_eq!(v.min(), f64::MAX);
        assert_eq!(v.min_index(), 0);
    }
    #[test]
    fn sum_and_dot() {
        let a = SparseVector::from_slice(&[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0]);
        let b = DenseVector::from_slice(&[1.0, 4.0, 9.0, 1.0, 0.0, 0.0, 16.0, 25.0]);
        assert_eq!(a.sum(), 15.0);
        assert_eq!(a.dot(&b), 225.0);
        assert_eq!(b.dot(&a), 225.0);
        assert_eq!(a.try_dot(&b), Ok(225.0));
        let c = SparseVector::new(3);
        assert!(a.try_dot(&c).is_err());
    }
}
