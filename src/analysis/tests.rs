//! Tests for the analysis runner.

use super::*;

/// Synthetic drop data: position decides the bucket, the other two
/// features carry spread-out noise.
fn seeded_session(n: usize) -> DropAnalysis {
    let mut session = DropAnalysis::with_options(
        AnalysisOptions::new()
            .with_test_set_size(20)
            .with_k(3)
            .with_k_range(1, 5)
            .with_random_state(42),
    );

    for i in 0..n {
        let position = i as f32 / n as f32;
        let bounciness = ((i * 37) % n) as f32 / n as f32;
        let size = ((i * 53) % n) as f32 / n as f32;
        let bucket = usize::from(position >= 0.5);
        session.record(position, bounciness, size, bucket);
    }

    session
}

#[test]
fn test_record_accumulates() {
    let mut session = DropAnalysis::new();
    session.record(0.3, 0.4, 16.0, 2);
    session.record(0.9, 0.4, 16.0, 5);

    assert_eq!(session.dataset().len(), 2);
    assert_eq!(session.dataset().label(1), 5);
}

#[test]
fn test_clear_resets_session() {
    let mut session = DropAnalysis::new();
    session.record(0.3, 0.4, 16.0, 2);
    session.clear();
    assert!(session.dataset().is_empty());
}

#[test]
fn test_feature_analysis_reports_one_value_per_feature() {
    let session = seeded_session(200);
    let mut results: Vec<(String, f32)> = Vec::new();

    session.run_feature_analysis(&mut results).expect("analysis");

    let contexts: Vec<&str> = results.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        contexts,
        vec![
            "feature 0 accuracy",
            "feature 1 accuracy",
            "feature 2 accuracy"
        ]
    );
    for (context, value) in &results {
        assert!(
            (0.0..=1.0).contains(value),
            "{context} out of range: {value}"
        );
    }
}

#[test]
fn test_feature_analysis_informative_feature_scores_high() {
    // Bucket is a function of position alone, so feature 0 should
    // classify far better than chance.
    let session = seeded_session(200);
    let mut results: Vec<(String, f32)> = Vec::new();

    session.run_feature_analysis(&mut results).expect("analysis");
    assert!(results[0].1 >= 0.7, "feature 0 accuracy = {}", results[0].1);
}

#[test]
fn test_k_sweep_reports_one_value_per_k() {
    let session = seeded_session(200);
    let mut results: Vec<(String, f32)> = Vec::new();

    session.run_k_sweep(&mut results).expect("sweep");

    let contexts: Vec<&str> = results.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        contexts,
        vec![
            "k=1 accuracy",
            "k=2 accuracy",
            "k=3 accuracy",
            "k=4 accuracy",
            "k=5 accuracy"
        ]
    );
    for (context, value) in &results {
        assert!(
            (0.0..=1.0).contains(value),
            "{context} out of range: {value}"
        );
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let session = seeded_session(200);

    let mut first: Vec<(String, f32)> = Vec::new();
    let mut second: Vec<(String, f32)> = Vec::new();
    session.run_k_sweep(&mut first).expect("sweep");
    session.run_k_sweep(&mut second).expect("sweep");

    assert_eq!(first, second);
}

#[test]
fn test_analysis_does_not_mutate_dataset() {
    let session = seeded_session(100);
    let before = session.dataset().to_matrix();

    let mut results: Vec<(String, f32)> = Vec::new();
    session.run_feature_analysis(&mut results).expect("analysis");
    session.run_k_sweep(&mut results).expect("sweep");

    assert_eq!(session.dataset().to_matrix(), before);
}

#[test]
fn test_empty_dataset_fails() {
    let session = DropAnalysis::new();
    let mut results: Vec<(String, f32)> = Vec::new();

    assert!(session.run_feature_analysis(&mut results).is_err());
    assert!(session.run_k_sweep(&mut results).is_err());
    assert!(results.is_empty());
}

#[test]
fn test_test_set_larger_than_dataset_fails() {
    // 10 observations cannot supply the default 100-point test set.
    let mut session = DropAnalysis::with_options(
        AnalysisOptions::new().with_test_set_size(100).with_k(1),
    );
    for i in 0..10 {
        session.record(i as f32, (i % 3) as f32, (i % 4) as f32, i % 2);
    }

    let mut results: Vec<(String, f32)> = Vec::new();
    let err = session.run_feature_analysis(&mut results).unwrap_err();
    assert!(err.to_string().contains("test_count"));
}

#[test]
fn test_zero_variance_feature_fails() {
    // Constant ball size: min == max, min-max scaling must refuse.
    let mut session = DropAnalysis::with_options(
        AnalysisOptions::new()
            .with_test_set_size(5)
            .with_k(1)
            .with_random_state(42),
    );
    for i in 0..30 {
        session.record(i as f32 / 30.0, (i % 7) as f32, 16.0, i % 2);
    }

    let mut results: Vec<(String, f32)> = Vec::new();
    let err = session.run_feature_analysis(&mut results).unwrap_err();
    assert!(err.to_string().contains("Zero variance"));
}

#[test]
fn test_invalid_options_rejected() {
    let session = DropAnalysis::with_options(AnalysisOptions::new().with_test_set_size(0));
    let mut results: Vec<(String, f32)> = Vec::new();
    assert!(session.run_feature_analysis(&mut results).is_err());

    let session = DropAnalysis::with_options(AnalysisOptions::new().with_k(0));
    assert!(session.run_feature_analysis(&mut results).is_err());

    let session = DropAnalysis::with_options(AnalysisOptions::new().with_k_range(5, 2));
    assert!(session.run_k_sweep(&mut results).is_err());
}
