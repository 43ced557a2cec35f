//! Tests for the observation store.

use super::*;

#[test]
fn test_new_is_empty() {
    let data = Dataset::new(NUM_FEATURES);
    assert!(data.is_empty());
    assert_eq!(data.len(), 0);
    assert_eq!(data.n_features(), 3);
}

#[test]
fn test_record_appends() {
    let mut data = Dataset::new(3);
    data.record(&[0.1, 0.2, 0.3], 1).expect("record");
    data.record(&[0.4, 0.5, 0.6], 5).expect("record");

    assert_eq!(data.len(), 2);
    assert_eq!(data.features(0), &[0.1, 0.2, 0.3]);
    assert_eq!(data.features(1), &[0.4, 0.5, 0.6]);
    assert_eq!(data.label(0), 1);
    assert_eq!(data.label(1), 5);
}

#[test]
fn test_record_rejects_wrong_arity() {
    let mut data = Dataset::new(3);
    let err = data.record(&[0.1, 0.2], 1).unwrap_err();
    assert!(err.to_string().contains("dimension mismatch"));
    assert!(data.is_empty());
}

#[test]
fn test_to_matrix_snapshot() {
    let mut data = Dataset::new(2);
    data.record(&[1.0, 10.0], 0).expect("record");
    data.record(&[2.0, 20.0], 1).expect("record");

    let (x, y) = data.to_matrix();
    assert_eq!(x.shape(), (2, 2));
    assert_eq!(x.row(1), &[2.0, 20.0]);
    assert_eq!(y, vec![0, 1]);

    // The snapshot is independent of the store.
    data.record(&[3.0, 30.0], 2).expect("record");
    assert_eq!(x.n_rows(), 2);
}

#[test]
fn test_project_single_feature() {
    let mut data = Dataset::new(3);
    data.record(&[1.0, 10.0, 100.0], 7).expect("record");
    data.record(&[2.0, 20.0, 200.0], 8).expect("record");

    let (x, y) = data.project(1).expect("project");
    assert_eq!(x.shape(), (2, 1));
    assert!((x.get(0, 0) - 10.0).abs() < 1e-6);
    assert!((x.get(1, 0) - 20.0).abs() < 1e-6);
    assert_eq!(y, vec![7, 8]);
}

#[test]
fn test_project_out_of_range() {
    let data = Dataset::new(3);
    assert!(data.project(3).is_err());
}

#[test]
fn test_clear() {
    let mut data = Dataset::new(3);
    data.record(&[0.0, 0.0, 0.0], 0).expect("record");
    data.clear();
    assert!(data.is_empty());

    // Arity is retained across clear.
    data.record(&[1.0, 2.0, 3.0], 4).expect("record");
    assert_eq!(data.len(), 1);
}
