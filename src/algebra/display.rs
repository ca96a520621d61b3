use super::{Matrix, ScalarT, Vector};
use itertools::Itertools;
use std::iter::repeat;

// positions below the start index print as zeros, so that the rows
// of a triangular matrix line up as the rows of the full square.
// The padding is bounded since start indices never exceed the size limit.
impl<T> std::fmt::Display for Vector<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let padded = repeat(T::zero())
            .take(self.start_index())
            .chain(self.iter().copied());
        write!(f, "{}", padded.format(" "))
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
