//! Tests for model loading and prediction.

use std::fs;
use std::path::{Path, PathBuf};

use diabetes_classifier::hash::sha256_hex;
use diabetes_classifier::{Classifier, ClassifierError, LogisticModel, load_model};
use diabetes_model::{FEATURE_COUNT, FeatureName, FeatureVector, Prediction};
use tempfile::TempDir;

fn canonical_names() -> Vec<String> {
    FeatureName::CANONICAL_ORDER
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Diabetic exactly when HighBP is set.
fn high_bp_model() -> LogisticModel {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[FeatureName::HighBp.position()] = 4.0;
    LogisticModel {
        kind: "logistic".to_string(),
        feature_names: canonical_names(),
        coefficients,
        intercept: -2.0,
        threshold: 0.5,
    }
}

fn vector_with_high_bp(high_bp: f64) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];
    values[FeatureName::HighBp.position()] = high_bp;
    values[FeatureName::Age.position()] = 45.0;
    FeatureVector::from_ordered(values)
}

fn write_bundle(dir: &Path, artifact: &[u8], sha256: &str) -> PathBuf {
    fs::write(dir.join("logistic.json"), artifact).unwrap();
    let manifest = format!(
        r#"[manifest]
schema = "diabetes-risk.model"
schema_version = 1

[model]
kind = "logistic"
path = "logistic.json"
sha256 = "{sha256}"
"#
    );
    let manifest_path = dir.join("manifest.toml");
    fs::write(&manifest_path, manifest).unwrap();
    manifest_path
}

#[test]
fn logistic_prediction_uses_threshold() {
    let model = high_bp_model();
    assert_eq!(
        model.predict(&vector_with_high_bp(1.0)).unwrap(),
        Prediction::Diabetic
    );
    assert_eq!(
        model.predict(&vector_with_high_bp(0.0)).unwrap(),
        Prediction::NonDiabetic
    );
    assert!((model.probability(&vector_with_high_bp(0.0)) - 0.1192).abs() < 1e-3);
}

#[test]
fn load_model_verifies_and_predicts() {
    let dir = TempDir::new().unwrap();
    let artifact = serde_json::to_vec_pretty(&high_bp_model()).unwrap();
    let manifest_path = write_bundle(dir.path(), &artifact, &sha256_hex(&artifact));

    let handle = load_model(&manifest_path).unwrap();
    assert_eq!(handle.sha256(), sha256_hex(&artifact));
    assert!(handle.artifact_path().ends_with("logistic.json"));
    assert_eq!(
        handle.predict(&vector_with_high_bp(1.0)).unwrap(),
        Prediction::Diabetic
    );
}

#[test]
fn load_model_rejects_checksum_mismatch() {
    let dir = TempDir::new().unwrap();
    let artifact = serde_json::to_vec(&high_bp_model()).unwrap();
    let manifest_path = write_bundle(dir.path(), &artifact, &sha256_hex(b"something else"));

    let err = load_model(&manifest_path).unwrap_err();
    assert!(matches!(err, ClassifierError::Sha256Mismatch { .. }));
}

#[test]
fn load_model_rejects_reordered_features() {
    let dir = TempDir::new().unwrap();
    let mut model = high_bp_model();
    model.feature_names.swap(17, 18);
    let artifact = serde_json::to_vec(&model).unwrap();
    let manifest_path = write_bundle(dir.path(), &artifact, &sha256_hex(&artifact));

    match load_model(&manifest_path).unwrap_err() {
        ClassifierError::FeatureOrderMismatch {
            position,
            expected,
            actual,
        } => {
            assert_eq!(position, 17);
            assert_eq!(expected, "Sex");
            assert_eq!(actual, "Age");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn check_rejects_bad_shapes() {
    let mut short = high_bp_model();
    short.coefficients.pop();
    assert!(matches!(
        short.check(),
        Err(ClassifierError::InvalidModel { .. })
    ));

    let mut threshold = high_bp_model();
    threshold.threshold = 1.0;
    assert!(threshold.check().is_err());

    let mut kind = high_bp_model();
    kind.kind = "forest".to_string();
    assert!(matches!(
        kind.check(),
        Err(ClassifierError::UnsupportedKind { .. })
    ));
}

#[test]
fn manifest_requires_known_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("manifest.toml");
    fs::write(
        &path,
        r#"[manifest]
schema = "other"
schema_version = 1

[model]
kind = "logistic"
path = "logistic.json"
sha256 = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
"#,
    )
    .unwrap();
    assert!(matches!(
        load_model(&path).unwrap_err(),
        ClassifierError::UnsupportedSchema { .. }
    ));
}

#[test]
fn bundled_model_loads() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models/manifest.toml");
    let handle = load_model(&manifest).unwrap();
    assert_eq!(
        handle.predict(&vector_with_high_bp(0.0)).unwrap(),
        Prediction::NonDiabetic
    );
}
