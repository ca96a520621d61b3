use crate::algebra::vector::check_size;
use crate::algebra::{ContainerResult, ContainerSettings, Vector};
use std::ops::{Index, IndexMut};

/// Square matrix in packed upper triangular storage.
///
/// A matrix of size `n` holds `n` rows, where row `i` is a
/// [`Vector`](crate::algebra::Vector) of length `n - i` with start index `i`.
/// Rows are selected with zero based indices in `0..n`, and the element
/// `(i, j)` exists iff `i <= j < n`.
///
/// ```
/// use utmatrix::algebra::Matrix;
///
/// let mut m = Matrix::<i32>::new(3).unwrap();
/// m[0][2] = 4;
/// m[(1, 1)] = 7;
/// assert_eq!(m[1].size(), 2);
/// assert!(m.get((2, 1)).is_err());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    // rows are stored with outer start index 0
    rows: Vector<Vector<T>>,
}

impl<T> Matrix<T>
where
    T: Clone + Default,
{
    /// Zero (default) initialised matrix of dimension `size`.
    pub fn new(size: isize) -> ContainerResult<Self> {
        Self::new_with_settings(size, &ContainerSettings::default())
    }

    /// As [`new`](Self::new), with the size limit taken from `settings`.
    pub fn new_with_settings(size: isize, settings: &ContainerSettings) -> ContainerResult<Self> {
        let n = check_size(size, settings.max_matrix_size)?;
        log::trace!("new matrix: size {n}");
        // row lengths and start indices are both bounded by n
        let row_settings = ContainerSettings {
            max_vector_size: settings.max_matrix_size,
            ..settings.clone()
        };
        let rows = (0..n)
            .map(|i| Vector::new_with_settings((n - i) as isize, i as isize, &row_settings))
            .collect::<ContainerResult<Vec<_>>>()?;
        Ok(Self {
            rows: Vector::from_vec(rows, 0)?,
        })
    }

    /// Deep copy of `src` into `self`.  Row storage is reused where the
    /// row lengths agree.
    pub fn assign(&mut self, src: &Self) -> &mut Self {
        self.clone_from(src);
        self
    }
}

impl<T> Matrix<T> {
    /// Number of rows, equal to the number of columns.
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    pub fn row(&self, i: isize) -> ContainerResult<&Vector<T>> {
        self.rows.get(i)
    }

    pub fn row_mut(&mut self, i: isize) -> ContainerResult<&mut Vector<T>> {
        self.rows.get_mut(i)
    }

    /// Checked access to element `(row, col)`.  The column must lie in
    /// the stored window of that row.
    pub fn get(&self, idx: (isize, isize)) -> ContainerResult<&T> {
        self.row(idx.0)?.get(idx.1)
    }

    pub fn get_mut(&mut self, idx: (isize, isize)) -> ContainerResult<&mut T> {
        self.row_mut(idx.0)?.get_mut(idx.1)
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::IterMut<'_, Vector<T>> {
        self.rows.iter_mut()
    }

    pub(crate) fn from_rows(rows: Vec<Vector<T>>) -> ContainerResult<Self> {
        Ok(Self {
            rows: Vector::from_vec(rows, 0)?,
        })
    }
}

impl<T> Clone for Matrix<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, src: &Self) {
        self.rows.clone_from(&src.rows);
    }
}

impl<T> Index<isize> for Matrix<T> {
    type Output = Vector<T>;
    fn index(&self, i: isize) -> &Vector<T> {
        &self.rows[i]
    }
}

impl<T> IndexMut<isize> for Matrix<T> {
    fn index_mut(&mut self, i: isize) -> &mut Vector<T> {
        &mut self.rows[i]
    }
}

impl<T> Index<(isize, isize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (isize, isize)) -> &T {
        &self.rows[idx.0][idx.1]
    }
}

impl<T> IndexMut<(isize, isize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (isize, isize)) -> &mut T {
        &mut self.rows[idx.0][idx.1]
    }
}
