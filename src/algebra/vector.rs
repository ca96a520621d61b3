use crate::algebra::{ContainerError, ContainerResult, ContainerSettings, MAX_VECTOR_SIZE};
use std::ops::{Index, IndexMut, Range};

/// Dense vector with an offset logical index.
///
/// Element `i` is addressed by the logical index `i + start_index`, so the
/// valid index window is `start_index..start_index + size`.  The start index
/// is purely an indexing shift and the vector owns exactly `size` elements.
/// It may not exceed the vector size limit, so the whole window always fits
/// in an `isize`.
///
/// Two vectors are equal when they have the same size, the same start index
/// and equal elements.
///
/// ```
/// use utmatrix::algebra::Vector;
///
/// let mut v = Vector::<i32>::with_start_index(3, 2).unwrap();
/// v[2] = 1;
/// v[4] = 5;
/// assert_eq!(v.as_slice(), &[1, 0, 5]);
/// assert!(v.get(1).is_err());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Vector<T> {
    /// logical index of the first element
    start_index: usize,
    /// owned element buffer
    data: Vec<T>,
}

impl<T> Vector<T>
where
    T: Clone + Default,
{
    /// Zero (default) initialised vector with start index 0.
    pub fn new(size: isize) -> ContainerResult<Self> {
        Self::with_start_index(size, 0)
    }

    /// Zero (default) initialised vector with the given start index.
    pub fn with_start_index(size: isize, start_index: isize) -> ContainerResult<Self> {
        Self::new_with_settings(size, start_index, &ContainerSettings::default())
    }

    /// As [`with_start_index`](Self::with_start_index), with the size limit
    /// taken from `settings`.
    pub fn new_with_settings(
        size: isize,
        start_index: isize,
        settings: &ContainerSettings,
    ) -> ContainerResult<Self> {
        let size = check_size(size, settings.max_vector_size)?;
        let start_index = check_start_index(start_index, settings.max_vector_size)?;
        log::trace!("new vector: size {size}, start index {start_index}");
        Ok(Self {
            start_index,
            data: vec![T::default(); size],
        })
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.data.fill(value);
        self
    }

    /// Deep copy of `src` into `self`.
    ///
    /// The existing buffer is reused where possible and replaced otherwise.
    /// Assignment cannot fail, so `self` is never left partially updated.
    pub fn assign(&mut self, src: &Self) -> &mut Self {
        self.clone_from(src);
        self
    }
}

impl<T> Vector<T> {
    /// Take ownership of `data` as the elements of a vector starting at
    /// `start_index`.
    pub fn from_vec(data: Vec<T>, start_index: isize) -> ContainerResult<Self> {
        check_size(data.len() as isize, MAX_VECTOR_SIZE)?;
        let start_index = check_start_index(start_index, MAX_VECTOR_SIZE)?;
        Ok(Self { start_index, data })
    }

    /// Number of stored elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// The window of valid logical indices.
    pub fn indices(&self) -> Range<isize> {
        let start = self.start_index as isize;
        start..start + self.size() as isize
    }

    pub fn get(&self, index: isize) -> ContainerResult<&T> {
        let k = self.physical_index(index)?;
        Ok(&self.data[k])
    }

    pub fn get_mut(&mut self, index: isize) -> ContainerResult<&mut T> {
        let k = self.physical_index(index)?;
        Ok(&mut self.data[k])
    }

    /// Elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    // logical -> physical, checked against start..start+size
    fn physical_index(&self, index: isize) -> ContainerResult<usize> {
        match index.checked_sub(self.start_index as isize) {
            Some(k) if k >= 0 && (k as usize) < self.size() => Ok(k as usize),
            _ => Err(ContainerError::IndexOutOfRange {
                index,
                start: self.start_index,
                end: self.start_index + self.size(),
            }),
        }
    }
}

impl<T> Clone for Vector<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            start_index: self.start_index,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, src: &Self) {
        if self.size() != src.size() {
            log::debug!("resizing vector storage {} -> {}", self.size(), src.size());
        }
        self.start_index = src.start_index;
        self.data.clone_from(&src.data);
    }
}

impl<T> Index<isize> for Vector<T> {
    type Output = T;
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<isize> for Vector<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn check_size(size: isize, max: usize) -> ContainerResult<usize> {
    if size <= 0 || size as usize > max {
        log::debug!("rejected size {size} (max {max})");
        return Err(ContainerError::InvalidSize { size, max });
    }
    Ok(size as usize)
}

fn check_start_index(start_index: isize, max: usize) -> ContainerResult<usize> {
    if start_index < 0 || start_index as usize > max {
        log::debug!("rejected start index {start_index}");
        return Err(ContainerError::InvalidStartIndex(start_index));
    }
    Ok(start_index as usize)
}
