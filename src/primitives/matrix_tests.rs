pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_wrong_length() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0]);
    assert!(result.is_err());
}

#[test]
fn test_shape_accessors() {
    let m = Matrix::from_vec(4, 2, vec![0.0_f32; 8]).expect("valid");
    assert_eq!(m.n_rows(), 4);
    assert_eq!(m.n_cols(), 2);
    assert_eq!(m.shape(), (4, 2));
}

#[test]
fn test_get_set() {
    let mut m = Matrix::from_vec(2, 2, vec![0.0_f32; 4]).expect("valid");
    m.set(1, 0, 7.5);
    assert!((m.get(1, 0) - 7.5).abs() < 1e-6);
    assert!((m.get(0, 0)).abs() < 1e-6);
}

#[test]
fn test_row_is_contiguous_slice() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(3, 2, vec![1.0_f32, 10.0, 2.0, 20.0, 3.0, 30.0]).expect("valid");
    assert_eq!(m.column(0), vec![1.0, 2.0, 3.0]);
    assert_eq!(m.column(1), vec![10.0, 20.0, 30.0]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_get_out_of_bounds() {
    let m = Matrix::from_vec(2, 2, vec![0.0_f32; 4]).expect("valid");
    let _ = m.get(2, 0);
}

#[test]
fn test_as_slice_row_major() {
    let data = vec![1.0_f32, 2.0, 3.0, 4.0];
    let m = Matrix::from_vec(2, 2, data.clone()).expect("valid");
    assert_eq!(m.as_slice(), data.as_slice());
}

#[test]
fn test_zero_row_matrix() {
    let m = Matrix::from_vec(0, 3, Vec::<f32>::new()).expect("valid empty");
    assert_eq!(m.shape(), (0, 3));
}
