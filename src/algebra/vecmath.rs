use super::{impl_scalar_ops, ContainerError, ContainerResult, ScalarT, Vector};
use std::iter::zip;
use std::ops::{Add, Mul, Sub};

impl<T: ScalarT> Vector<T> {
    /// Apply an elementwise operation, producing a new vector with the same
    /// size and start index.
    pub fn scalarop(&self, op: impl Fn(T) -> T) -> Self {
        let mut out = self.clone();
        out.iter_mut().for_each(|x| *x = op(*x));
        out
    }

    /// Elementwise translation by `c`.
    pub fn add_scalar(&self, c: T) -> Self {
        self.scalarop(|x| x + c)
    }

    pub fn sub_scalar(&self, c: T) -> Self {
        self.scalarop(|x| x - c)
    }

    /// Elementwise scaling by `c`.
    pub fn mul_scalar(&self, c: T) -> Self {
        self.scalarop(|x| x * c)
    }

    /// Elementwise sum.  Only the sizes of the operands must agree; the
    /// result takes the start index of `self`.
    pub fn checked_add(&self, y: &Self) -> ContainerResult<Self> {
        self.binop(y, |a, b| a + b)
    }

    /// Elementwise difference, with the same size rule as
    /// [`checked_add`](Self::checked_add).
    pub fn checked_sub(&self, y: &Self) -> ContainerResult<Self> {
        self.binop(y, |a, b| a - b)
    }

    /// Dot product
    pub fn dot(&self, y: &Self) -> ContainerResult<T> {
        check_same_size(self.size(), y.size())?;
        Ok(zip(self, y).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    fn binop(&self, y: &Self, op: impl Fn(T, T) -> T) -> ContainerResult<Self> {
        check_same_size(self.size(), y.size())?;
        let mut out = self.clone();
        zip(out.iter_mut(), y).for_each(|(a, &b)| *a = op(*a, b));
        Ok(out)
    }
}

pub(crate) fn check_same_size(left: usize, right: usize) -> ContainerResult<()> {
    if left != right {
        log::debug!("size mismatch: {left} vs {right}");
        return Err(ContainerError::SizeMismatch { left, right });
    }
    Ok(())
}

impl<'a, T: ScalarT> Add<&'a Vector<T>> for &'a Vector<T> {
    type Output = ContainerResult<Vector<T>>;
    fn add(self, y: &'a Vector<T>) -> Self::Output {
        self.checked_add(y)
    }
}

impl<'a, T: ScalarT> Sub<&'a Vector<T>> for &'a Vector<T> {
    type Output = ContainerResult<Vector<T>>;
    fn sub(self, y: &'a Vector<T>) -> Self::Output {
        self.checked_sub(y)
    }
}

// vector * vector is the dot product
impl<'a, T: ScalarT> Mul<&'a Vector<T>> for &'a Vector<T> {
    type Output = ContainerResult<T>;
    fn mul(self, y: &'a Vector<T>) -> Self::Output {
        self.dot(y)
    }
}

impl_scalar_ops!(
    Vector, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
