//! __utmatrix__ provides two owned, bounds checked container types:
//!
//! * [`Vector<T>`](crate::algebra::Vector), a dense vector whose logical
//!   indices are shifted by a non-negative start index, and
//! * [`Matrix<T>`](crate::algebra::Matrix), a square matrix in packed upper
//!   triangular storage, built from rows of decreasing length.
//!
//! Both types have value semantics.  Copies never share storage, equality
//! compares contents, and elementwise arithmetic produces new containers.
//!
//! ## Errors
//!
//! Construction, checked indexing and binary arithmetic return a
//! [`ContainerResult`](crate::algebra::ContainerResult).  The failure cases
//! are an invalid size, a negative start index, an index outside the valid
//! window, and a size mismatch between operands.
//!
//! ```
//! use utmatrix::algebra::*;
//!
//! let mut a = Vector::<i32>::new(4).unwrap();
//! let b = Vector::<i32>::new(4).unwrap();
//! a[1] = 5;
//! a[2] = 7;
//! let c = (&a + &b).unwrap();
//! assert_eq!(c.as_slice(), &[0, 5, 7, 0]);
//!
//! let d = Vector::<i32>::new(6).unwrap();
//! assert!(matches!(&a + &d, Err(ContainerError::SizeMismatch { .. })));
//! ```
//!
//! ## Logging
//!
//! The crate emits records through the [`log`](https://docs.rs/log) facade
//! and leaves the choice of logger to the application.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
