//!
//! Slicing and dense export of `Vector`
//!
use super::{Storage, Vector};
use crate::error::VectorError;

impl<S: Storage> Vector<S> {
    /// The first `end` elements, `slice_range(0, end)`
    pub fn slice(&self, end: usize) -> Vector<S> {
        self.slice_range(0, end)
    }
    ///
    /// Elements in `start..end`, re-indexed to `0..(end - start)`.
    ///
    /// # Panics
    /// if `start > end` or `end > self.dimension()`.
    ///
    pub fn slice_range(&self, start: usize, end: usize) -> Vector<S> {
        match self.try_slice_range(start, end) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }
    /// `length` elements from `start`, `slice_range(start, start + length)`
    pub fn slice_by_length(&self, start: usize, length: usize) -> Vector<S> {
        match self.try_slice_by_length(start, length) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }
    /// `slice_by_length` that reports an invalid range as an error
    pub fn try_slice_by_length(
        &self,
        start: usize,
        length: usize,
    ) -> Result<Vector<S>, VectorError> {
        let end = start
            .checked_add(length)
            .ok_or(VectorError::InvalidRange {
                start,
                end: usize::MAX,
                dimension: self.dimension(),
            })?;
        self.try_slice_range(start, end)
    }
    /// `slice_range` that reports an invalid range as an error
    pub fn try_slice_range(&self, start: usize, end: usize) -> Result<Vector<S>, VectorError> {
        if start > end || end > self.dimension() {
            return Err(VectorError::InvalidRange {
                start,
                end,
                dimension: self.dimension(),
            });
        }
        let entries = self
            .storage
            .iter_nonzero()
            .filter(|&(index, _)| start <= index && index < end)
            .map(|(index, value)| (index - start, value))
            .collect();
        Ok(Vector::from_parts(end - start, entries))
    }
    ///
    /// Dense `Vec` of length `dimension`
    ///
    pub fn to_vec(&self) -> Vec<f64> {
        let mut values = vec![0.0; self.dimension()];
        for (index, value) in self.storage.iter_nonzero() {
            values[index] = value;
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SequentialSparseVector, SparseVector};
    use crate::error::VectorError;

    #[test]
    fn slicing() {
        let v = SparseVector::from_slice(&[1.0, 2.0, 0.0, 0.0, 0.0, 3.0, 4.0, 5.0]);
        let s = v.slice(4);
        assert_eq!(s.length(), 2);
        assert_eq!(s.dimension(), 4);
        assert_eq!(s.to_vec(), vec![1.0, 2.0, 0.0, 0.0]);

        let s = v.slice_range(4, 8);
        assert_eq!(s.length(), 3);
        assert_eq!(s.dimension(), 4);
        assert_eq!(s.to_vec(), vec![0.0, 3.0, 4.0, 5.0]);

        let s = v.slice_by_length(0, 4);
        assert_eq!(s.length(), 2);
        assert_eq!(s.dimension(), 4);
        assert_eq!(s.to_vec(), vec![1.0, 2.0, 0.0, 0.0]);

        let s = v.slice_range(3, 3);
        assert_eq!(s.dimension(), 0);
        assert!(s.to_vec().is_empty());
    }
    #[test]
    fn invalid_slice_range() {
        let v = SequentialSparseVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(
            v.try_slice_range(2, 1).unwrap_err(),
            VectorError::InvalidRange {
                start: 2,
                end: 1,
                dimension: 3
            }
        );
        assert!(v.try_slice_range(0, 4).is_err());
        assert_eq!(v.try_slice_range(1, 3).unwrap().to_vec(), vec![2.0, 3.0]);
    }
    #[test]
    fn slice_by_length_overflow_is_invalid_range() {
        let v = SparseVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(
            v.try_slice_by_length(1, usize::MAX).unwrap_err(),
            VectorError::InvalidRange {
                start: 1,
                end: usize::MAX,
                dimension: 3
            }
        );
        assert_eq!(v.try_slice_by_length(1, 2).unwrap().to_vec(), vec![2.0, 3.0]);
    }
    #[test]
    #[should_panic(expected = "invalid slice range")]
    fn slice_by_length_overflow_panics() {
        let v = SequentialSparseVector::from_slice(&[1.0, 2.0, 3.0]);
        let _ = v.slice_by_length(1, usize::MAX);
    }
    #[test]
    #[should_panic(expected = "invalid slice range")]
    fn slice_by_length_past_the_end_panics() {
        let v = SparseVector::from_slice(&[1.0, 2.0, 3.0]);
        let _ = v.slice_by_length(2, 5);
    }
}
