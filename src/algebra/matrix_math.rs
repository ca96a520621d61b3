use super::vecmath::check_same_size;
use super::{impl_scalar_ops, ContainerResult, Matrix, ScalarT, Vector};
use std::iter::zip;
use std::ops::{Add, Sub};

impl<T: ScalarT> Matrix<T> {
    /// Apply an elementwise operation to every stored element, producing
    /// a new matrix.
    pub fn scalarop(&self, op: impl Fn(T) -> T) -> Self {
        let mut out = self.clone();
        out.rows_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|x| *x = op(*x));
        out
    }

    pub fn add_scalar(&self, c: T) -> Self {
        self.scalarop(|x| x + c)
    }

    pub fn sub_scalar(&self, c: T) -> Self {
        self.scalarop(|x| x - c)
    }

    pub fn mul_scalar(&self, c: T) -> Self {
        self.scalarop(|x| x * c)
    }

    /// Rowwise sum.  Fails if the matrices differ in size.
    pub fn checked_add(&self, y: &Self) -> ContainerResult<Self> {
        self.rowop(y, Vector::checked_add)
    }

    /// Rowwise difference.  Fails if the matrices differ in size.
    pub fn checked_sub(&self, y: &Self) -> ContainerResult<Self> {
        self.rowop(y, Vector::checked_sub)
    }

    fn rowop(
        &self,
        y: &Self,
        op: impl Fn(&Vector<T>, &Vector<T>) -> ContainerResult<Vector<T>>,
    ) -> ContainerResult<Self> {
        check_same_size(self.size(), y.size())?;
        // equal sizes imply equal row lengths, so op cannot fail here
        let rows = zip(self.rows(), y.rows())
            .map(|(a, b)| op(a, b))
            .collect::<ContainerResult<Vec<_>>>()?;
        Matrix::from_rows(rows)
    }
}

impl<'a, T: ScalarT> Add<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = ContainerResult<Matrix<T>>;
    fn add(self, y: &'a Matrix<T>) -> Self::Output {
        self.checked_add(y)
    }
}

impl<'a, T: ScalarT> Sub<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = ContainerResult<Matrix<T>>;
    fn sub(self, y: &'a Matrix<T>) -> Self::Output {
        self.checked_sub(y)
    }
}

impl_scalar_ops!(
    Matrix, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
