pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2).unwrap() - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_from_row_major() {
    let external = [1.0, 2.0, 3.0, 4.0];
    let m = Matrix::from_row_major(2, 2, &external)
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert!((m.get(1, 0).unwrap() - 3.0).abs() < 1e-12);
    assert!(Matrix::from_row_major(3, 2, &external).is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_eye() {
    let m = Matrix::eye(3);
    assert!((m.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
    assert!((m.get(1, 1).unwrap() - 1.0).abs() < 1e-12);
    assert!((m.get(2, 2).unwrap() - 1.0).abs() < 1e-12);
    assert!((m.get(0, 1).unwrap() - 0.0).abs() < 1e-12);
}

#[test]
fn test_get_set_roundtrip_exact() {
    // set followed by get returns the value exactly, across the full matrix
    for (rows, cols) in [(1, 1), (7, 3), (100, 100)] {
        let mut m = Matrix::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                let v = (r * cols + c) as f64 * 0.5 - 3.25;
                m.set(r, c, v).expect("indices are in range by construction");
                assert_eq!(m.get(r, c).unwrap(), v);
            }
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let m = Matrix::zeros(2, 3);
    assert!(m.get(2, 0).is_err());
    assert!(m.get(0, 3).is_err());
    assert!(m.get(5, 5).is_err());
}

#[test]
fn test_set_out_of_bounds() {
    let mut m = Matrix::zeros(2, 3);
    assert!(m.set(2, 0, 1.0).is_err());
    assert!(m.set(0, 3, 1.0).is_err());
    // Failed set leaves contents untouched
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_reshape_reuses_allocation() {
    let mut m = Matrix::zeros(4, 4);
    m.reshape(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.as_slice().len(), 6);
    m.reshape(5, 5);
    assert_eq!(m.shape(), (5, 5));
    assert_eq!(m.as_slice().len(), 25);
}

#[test]
fn test_copy_from_reshapes() {
    let mut m = Matrix::zeros(1, 1);
    let external = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    m.copy_from(2, 3, &external)
        .expect("external data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(1, 2).unwrap() - 6.0).abs() < 1e-12);
}

#[test]
fn test_copy_from_rejects_partial() {
    let mut m = Matrix::zeros(2, 2);
    let short = [1.0, 2.0, 3.0];
    assert!(m.copy_from(2, 2, &short).is_err());
    // Receiver unchanged on failure
    assert_eq!(m.shape(), (2, 2));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_copy_into() {
    let m = Matrix::from_vec(2, 2, vec![1.5, 2.5, 3.5, 4.5]).expect("valid");
    let mut external = [0.0; 4];
    m.copy_into(2, 2, &mut external)
        .expect("external dimensions match receiver: 2x2");
    assert_eq!(external, [1.5, 2.5, 3.5, 4.5]);
}

#[test]
fn test_copy_into_rejects_mismatched_dims() {
    let m = Matrix::zeros(2, 2);
    let mut external = [0.0; 6];
    assert!(m.copy_into(2, 3, &mut external).is_err());
    let mut external = [1.0; 4];
    assert!(m.copy_into(4, 1, &mut external).is_err());
    // External buffer untouched on failure
    assert!(external.iter().all(|&x| x == 1.0));
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
    assert!((t.get(0, 1).unwrap() - 4.0).abs() < 1e-12);
    assert!((t.get(2, 1).unwrap() - 6.0).abs() < 1e-12);
}

#[test]
fn test_transpose_involution() {
    let m = Matrix::from_vec(3, 2, vec![1.0, -2.0, 3.5, 0.0, -7.25, 9.0]).expect("valid");
    let back = m.transpose().transpose();
    assert!(back.is_approx(&m, 1e-10));
}

#[test]
fn test_mul_scalar() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let result = m.mul_scalar(2.0);
    assert!((result.get(0, 0).unwrap() - 2.0).abs() < 1e-12);
    assert!((result.get(1, 1).unwrap() - 8.0).abs() < 1e-12);
}

#[test]
fn test_zero_and_fill() {
    let mut m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    m.fill(7.0);
    assert!(m.as_slice().iter().all(|&x| x == 7.0));
    m.zero();
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
    assert_eq!(m.shape(), (2, 2));
}

#[test]
fn test_contains_nan() {
    let mut m = Matrix::zeros(2, 2);
    assert!(!m.contains_nan());
    m.set(1, 0, f64::NAN).expect("index in range");
    assert!(m.contains_nan());
}

#[test]
fn test_remove_row() {
    let mut m =
        Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    m.remove_row(1).expect("row 1 exists in a 3-row matrix");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 5.0, 6.0]);
    assert!(m.remove_row(2).is_err());
}

#[test]
fn test_remove_row_last_remaining() {
    let mut m = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).expect("valid");
    m.remove_row(0).expect("row 0 exists");
    assert_eq!(m.shape(), (0, 3));
}

#[test]
fn test_remove_col() {
    let mut m =
        Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    m.remove_col(1).expect("col 1 exists in a 3-col matrix");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice(), &[1.0, 3.0, 4.0, 6.0]);
    assert!(m.remove_col(2).is_err());
}

#[test]
fn test_remove_col_last_remaining() {
    let mut m = Matrix::from_vec(2, 1, vec![1.0, 2.0]).expect("valid");
    m.remove_col(0).expect("col 0 exists");
    assert_eq!(m.shape(), (2, 0));
}

#[test]
fn test_is_approx_reflexive() {
    let m = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.0, -4.0]).expect("valid");
    assert!(m.is_approx(&m, 0.0));
    assert!(m.is_approx(&m, 1e-10));
}

#[test]
fn test_is_approx_within_tolerance() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![1.0 + 5e-7, 2.0, 3.0 - 5e-7, 4.0]).expect("valid");
    assert!(a.is_approx(&b, 1e-6));
    assert!(!a.is_approx(&b, 1e-8));
}

#[test]
fn test_is_approx_dimension_mismatch_is_false() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(!a.is_approx(&b, f64::INFINITY));
    assert!(!b.is_approx(&a, f64::INFINITY));
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.5, -3.0, 0.25]).expect("valid");
    let json = serde_json::to_string(&m).expect("matrix serializes to JSON");
    let back: Matrix = serde_json::from_str(&json).expect("JSON deserializes to matrix");
    assert_eq!(m, back);
}
