//! Error Propagation Tests
//!
//! Inversion errors reach the caller unchanged and leave the cell uncached.

use crate::*;

#[test]
fn test_singular_matrix() {
    init_tracing();
    let mut cell = CacheCell::new(dmatrix![1.0, 2.0; 2.0, 4.0]);

    let err = cached_inverse(&mut cell).unwrap_err();
    assert!(err.is_singular());
    assert_eq!(err, Error::Singular { dim: 2 });
    assert!(cell.cached_inverse().is_none());
}

#[test]
fn test_retry_after_fixing_matrix() {
    let mut cell = CacheCell::new(dmatrix![1.0, 2.0; 2.0, 4.0]);
    assert!(cached_inverse(&mut cell).is_err());

    let fixed = dmatrix![1.0, 2.0; 2.0, 5.0];
    cell.set_matrix(fixed.clone());

    let r = cached_inverse(&mut cell).unwrap();
    assert_two_sided_inverse(&fixed, &r);
    assert!(cell.is_cached());
}

#[test]
fn test_non_square_matrix() {
    let mut cell = CacheCell::new(dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0]);

    let err = cached_inverse(&mut cell).unwrap_err();
    assert_eq!(err, Error::NotSquare { rows: 2, cols: 3 });
    assert!(err.is_shape_error());
    assert!(!cell.is_cached());
}

#[test]
fn test_empty_matrix() {
    let mut cell = CacheCell::default();

    let err = cached_inverse(&mut cell).unwrap_err();
    assert_eq!(err, Error::Empty);
    assert!(!cell.is_cached());
}

#[test]
fn test_computationally_singular_with_strict_options() {
    let inverter = DenseInverter::with_options(InverseOptions::strict());
    let mut solver = CachedInverse::with_inverter(inverter);
    let mut cell = CacheCell::new(dmatrix![1.0, 1.0; 1.0, 1.0 + 1e-14]);

    let err = solver.solve(&mut cell).unwrap_err();
    assert!(matches!(err, Error::IllConditioned { .. }));
    assert!(err.is_singular());
    assert!(!cell.is_cached());
}

#[test]
fn test_tolerance_decides_ill_conditioned() {
    let m = dmatrix![1.0, 1.0; 1.0, 1.0 + 1e-14];

    let tight = DenseInverter::with_options(InverseOptions::default().with_tolerance(1e-12));
    let mut cell = CacheCell::new(m.clone());
    let err = CachedInverse::with_inverter(tight).solve(&mut cell).unwrap_err();
    assert!(matches!(err, Error::IllConditioned { tolerance, .. } if tolerance == 1e-12));
    assert!(!cell.is_cached());

    let loose = DenseInverter::with_options(InverseOptions::strict().with_tolerance(0.0));
    let r = CachedInverse::with_inverter(loose).solve(&mut cell).unwrap();
    assert_eq!(cell.cached_inverse(), Some(&r));
}

/// Uniformly scaled matrices are well conditioned at any magnitude
#[test]
fn test_extreme_scale_is_not_singular() {
    let tiny = Matrix::identity(2, 2) * 1e-170;
    let mut cell = CacheCell::new(tiny.clone());
    let r = cached_inverse(&mut cell).unwrap();
    assert_eq!(r[(0, 0)], 1e170);
    assert_two_sided_inverse(&tiny, &r);

    let huge = Matrix::identity(3, 3) * 1e150;
    cell.set_matrix(huge.clone());
    let r = cached_inverse(&mut cell).unwrap();
    assert_two_sided_inverse(&huge, &r);
}

#[test]
fn test_error_message() {
    let mut cell = CacheCell::new(dmatrix![0.0, 0.0; 0.0, 0.0]);
    let err = cached_inverse(&mut cell).unwrap_err();
    assert_eq!(err.to_string(), "matrix is singular (2x2)");
}
