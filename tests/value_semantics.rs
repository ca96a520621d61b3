#![allow(non_snake_case)]
use utmatrix::algebra::*;

// copies, assignment and arithmetic through the public API only

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn upper_ones(n: isize) -> Matrix<f64> {
    Matrix::<f64>::new(n).unwrap() + 1.
}

#[test]
fn copies_are_independent() {
    init_logging();
    let mut A = upper_ones(3);
    let B = A.clone();
    A[(0, 2)] = 5.;
    assert_eq!(B[(0, 2)], 1.);
    assert_ne!(A, B);

    let mut v = Vector::from_vec(vec![1., 2.], 1).unwrap();
    let w = v.clone();
    v[1] = 0.;
    assert_eq!(w[1], 1.);
}

#[test]
fn assignment_replaces_contents() {
    init_logging();
    let big = upper_ones(5);
    let mut small = upper_ones(2);
    small.assign(&big);
    assert_eq!(small, big);
    assert_eq!(small.size(), 5);

    let mut shrink = upper_ones(6);
    shrink.assign(&big);
    assert_eq!(shrink, big);
}

#[test]
fn arithmetic_round_trip() {
    init_logging();
    let A = upper_ones(4) * 3.;
    let B = upper_ones(4);
    let C = (&A - &B).unwrap();
    assert_eq!((&C + &B).unwrap(), A);
    assert!(C.rows().flat_map(|r| r.iter()).all(|&x| x == 2.));
}

#[test]
fn matrix_rows_are_offset_vectors() {
    init_logging();
    let A = upper_ones(4);
    let r = A.row(2).unwrap();
    assert_eq!(r.indices(), 2..4);
    assert_eq!((r * r).unwrap(), 2.);
    assert_eq!(r.to_string(), "0 0 1 1");
}
