//! Offset indexed vectors and packed upper triangular matrices.
//!
//! The containers in this module own their storage outright.  Copies are
//! always deep, and every fallible operation reports a
//! [`ContainerError`](crate::algebra::ContainerError) to the caller.

mod display;
mod error_types;
mod matrix;
mod matrix_math;
mod scalars;
mod settings;
mod vecmath;
mod vector;

pub use error_types::*;
pub use matrix::*;
pub use scalars::*;
pub use settings::*;
pub use vector::*;

pub(crate) use scalars::impl_scalar_ops;
