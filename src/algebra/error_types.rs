use thiserror::Error;

/// Error type returned by container construction, indexing and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Requested size is non-positive or exceeds the permitted maximum
    #[error("Invalid size {size} (must lie in 1..={max})")]
    InvalidSize { size: isize, max: usize },
    /// Requested start index is negative or exceeds the vector size limit
    #[error("Invalid start index {0}")]
    InvalidStartIndex(isize),
    /// Logical index lies outside the window `start..end`
    #[error("Index {index} out of range {start}..{end}")]
    IndexOutOfRange {
        index: isize,
        start: usize,
        end: usize,
    },
    /// Binary operation on operands of incompatible size
    #[error("Size mismatch between operands ({left} vs {right})")]
    SizeMismatch { left: usize, right: usize },
}

/// Result alias used by all fallible container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
