//!
//! Element-wise, scalar and unary arithmetic of `Vector`
//!
//! Every operation returns a new vector of the receiver's storage type.
//! Operations that keep zero as zero walk the non-zero entries only;
//! the others walk the dense view.
//!
use super::{Storage, Vector};
use crate::error::VectorError;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<S: Storage> Vector<S> {
    ///
    /// Combine two vectors on the union of their non-zero indices.
    /// `op(0.0, 0.0)` is assumed to be `0.0`.
    ///
    /// Entries of `other` are visited first, then the entries of `self`
    /// whose index is not stored in `other`.
    ///
    fn combine<T, F>(&self, other: &Vector<T>, op: F) -> Vector<S>
    where
        T: Storage,
        F: Fn(f64, f64) -> f64,
    {
        let mut entries = Vec::with_capacity(self.length() + other.length());
        for (index, y) in other.storage.iter_nonzero() {
            entries.push((index, op(*self.storage.get(index), y)));
        }
        for (index, x) in self.storage.iter_nonzero() {
            if *other.storage.get(index) == 0.0 {
                entries.push((index, op(x, 0.0)));
            }
        }
        Vector::from_parts(self.dimension(), entries)
    }
    /// Apply `f` to the non-zero values only
    fn map_nonzero<F: Fn(f64) -> f64>(&self, f: F) -> Vector<S> {
        let entries = self
            .storage
            .iter_nonzero()
            .map(|(index, value)| (index, f(value)))
            .collect();
        Vector::from_parts(self.dimension(), entries)
    }
    /// Apply `f` to every value including the implicit zeros
    fn map_dense<F: Fn(usize, f64) -> f64>(&self, f: F) -> Vector<S> {
        let entries = self
            .iterate()
            .map(|e| (e.index, f(e.index, e.value)))
            .collect();
        Vector::from_parts(self.dimension(), entries)
    }

    //
    // vector (op) vector
    //

    /// `self + other`
    pub fn add<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.assert_dimension(other);
        self.combine(other, |x, y| x + y)
    }
    /// `add` that reports a dimension mismatch as an error
    pub fn try_add<T: Storage>(&self, other: &Vector<T>) -> Result<Vector<S>, VectorError> {
        self.check_dimension(other)?;
        Ok(self.combine(other, |x, y| x + y))
    }
    /// `self - other`
    pub fn subtract<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.assert_dimension(other);
        self.combine(other, |x, y| x - y)
    }
    /// `subtract` that reports a dimension mismatch as an error
    pub fn try_subtract<T: Storage>(&self, other: &Vector<T>) -> Result<Vector<S>, VectorError> {
        self.check_dimension(other)?;
        Ok(self.combine(other, |x, y| x - y))
    }
    /// `other - self`
    pub fn subtract_from<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.assert_dimension(other);
        self.combine(other, |x, y| y - x)
    }
    ///
    /// Element-wise product `self[i] * other[i]`, of dimension `other.dimension()`.
    ///
    /// Only the non-zero entries of the operand having less of them are
    /// visited, and the other operand is probed by index.
    ///
    pub fn multiply<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.assert_dimension(other);
        self.hadamard(other)
    }
    /// `multiply` that reports a dimension mismatch as an error
    pub fn try_multiply<T: Storage>(&self, other: &Vector<T>) -> Result<Vector<S>, VectorError> {
        self.check_dimension(other)?;
        Ok(self.hadamard(other))
    }
    fn hadamard<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        let entries = if other.length() < self.length() {
            other
                .storage
                .iter_nonzero()
                .map(|(index, y)| (index, *self.storage.get(index) * y))
                .collect()
        } else {
            self.storage
                .iter_nonzero()
                .map(|(index, x)| (index, x * *other.storage.get(index)))
                .collect()
        };
        Vector::from_parts(other.dimension(), entries)
    }
    ///
    /// `self[i] / other[i]` for every index.
    ///
    /// `x / 0.0` gives `inf` and `0.0 / 0.0` gives `NaN`, both of which
    /// are stored.
    ///
    pub fn divide<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.assert_dimension(other);
        self.quotient(other)
    }
    /// `divide` that reports a dimension mismatch as an error
    pub fn try_divide<T: Storage>(&self, other: &Vector<T>) -> Result<Vector<S>, VectorError> {
        self.check_dimension(other)?;
        Ok(self.quotient(other))
    }
    fn quotient<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.map_dense(|index, x| x / *other.storage.get(index))
    }
    ///
    /// `other[i] / self[i]` for every index, like `divide`.
    ///
    pub fn divide_from<T: Storage>(&self, other: &Vector<T>) -> Vector<S> {
        self.assert_dimension(other);
        self.map_dense(|index, x| *other.storage.get(index) / x)
    }
    ///
    /// Dense transform `f(index, value)`.
    /// `f` is called for the implicit zeros too.
    ///
    pub fn apply<F: Fn(usize, f64) -> f64>(&self, f: F) -> Vector<S> {
        self.map_dense(f)
    }
    ///
    /// Dense transform `f(index, self[index], other[index])`.
    ///
    pub fn apply_with<T, F>(&self, other: &Vector<T>, f: F) -> Vector<S>
    where
        T: Storage,
        F: Fn(usize, f64, f64) -> f64,
    {
        self.assert_dimension(other);
        self.map_dense(|index, x| f(index, x, *other.storage.get(index)))
    }

    //
    // vector (op) scalar
    //

    /// `self[i] + scalar` for every index
    pub fn add_scalar(&self, scalar: f64) -> Vector<S> {
        self.map_dense(|_, x| x + scalar)
    }
    /// `self[i] - scalar` for every index
    pub fn subtract_scalar(&self, scalar: f64) -> Vector<S> {
        self.map_dense(|_, x| x - scalar)
    }
    /// `scalar - self[i]` for every index
    pub fn subtract_from_scalar(&self, scalar: f64) -> Vector<S> {
        self.map_dense(|_, x| scalar - x)
    }
    /// `self[i] * scalar`
    pub fn multiply_scalar(&self, scalar: f64) -> Vector<S> {
        self.map_nonzero(|x| x * scalar)
    }
    /// `self[i] / scalar`
    pub fn divide_scalar(&self, scalar: f64) -> Vector<S> {
        self.map_nonzero(|x| x / scalar)
    }
    /// `scalar / self[i]` for every index, so the implicit zeros give `inf`
    pub fn divide_from_scalar(&self, scalar: f64) -> Vector<S> {
        self.map_dense(|_, x| scalar / x)
    }

    //
    // unary, on the non-zero entries
    //

    /// `self[i]^exponent`. `exponent == 2` is computed as `x * x`.
    pub fn pow(&self, exponent: f64) -> Vector<S> {
        if exponent == 2.0 {
            self.map_nonzero(|x| x * x)
        } else {
            self.map_nonzero(|x| x.powf(exponent))
        }
    }
    pub fn sqrt(&self) -> Vector<S> {
        self.map_nonzero(f64::sqrt)
    }
    /// natural logarithm of the non-zero entries
    pub fn log(&self) -> Vector<S> {
        self.map_nonzero(f64::ln)
    }
    /// `e^x` of the non-zero entries
    pub fn exp(&self) -> Vector<S> {
        self.map_nonzero(f64::exp)
    }
    pub fn abs(&self) -> Vector<S> {
        self.map_nonzero(f64::abs)
    }
}

/// `&a + &b`
impl<'a, 'b, S, T> Add<&'a Vector<T>> for &'b Vector<S>
where
    S: Storage,
    T: Storage,
{
    type Output = Vector<S>;
    fn add(self, other: &'a Vector<T>) -> Vector<S> {
        Vector::add(self, other)
    }
}

/// `&a - &b`
impl<'a, 'b, S, T> Sub<&'a Vector<T>> for &'b Vector<S>
where
    S: Storage,
    T: Storage,
{
    type Output = Vector<S>;
    fn sub(self, other: &'a Vector<T>) -> Vector<S> {
        self.subtract(other)
    }
}

/// `&a * &b` element-wise product
impl<'a, 'b, S, T> Mul<&'a Vector<T>> for &'b Vector<S>
where
    S: Storage,
    T: Storage,
{
    type Output = Vector<S>;
    fn mul(self, other: &'a Vector<T>) -> Vector<S> {
        self.multiply(other)
    }
}

/// `&a / &b` element-wise quotient
impl<'a, 'b, S, T> Div<&'a Vector<T>> for &'b Vector<S>
where
    S: Storage,
    T: Storage,
{
    type Output = Vector<S>;
    fn div(self, other: &'a Vector<T>) -> Vector<S> {
        self.divide(other)
    }
}

impl<'a, S: Storage> Add<f64> for &'a Vector<S> {
    type Output = Vector<S>;
    fn add(self, scalar: f64) -> Vector<S> {
        self.add_scalar(scalar)
    }
}

impl<'a, S: Storage> Sub<f64> for &'a Vector<S> {
    type Output = Vector<S>;
    fn sub(self, scalar: f64) -> Vector<S> {
        self.subtract_scalar(scalar)
    }
}

impl<'a, S: Storage> Mul<f64> for &'a Vector<S> {
    type Output = Vector<S>;
    fn mul(self, scalar: f64) -> Vector<S> {
        self.multiply_scalar(scalar)
    }
}

impl<'a, S: Storage> Div<f64> for &'a Vector<S> {
    type Output = Vector<S>;
    fn div(self, scalar: f64) -> Vector<S> {
        self.divide_scalar(scalar)
    }
}

impl<'a, S: Storage> Neg for &'a Vector<S> {
    type Output = Vector<S>;
    fn neg(self) -> Vector<S> {
        self.multiply_scalar(-1.0)
    }
}
