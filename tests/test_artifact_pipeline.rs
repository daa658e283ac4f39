//! End-to-end pipeline tests: artifact file on disk, through loading and
//! validation, out to the written HTML report.

use std::fs;

use tempfile::tempdir;

use sentiview::render::{HtmlSurface, ReportRenderer};
use sentiview::EvaluationArtifact;

const ARTIFACT_JSON: &str = r#"{
    "accuracy": 0.8765,
    "classification_report": {
        "positif": {"precision": 0.9, "recall": 0.8123, "f1-score": 0.85, "support": 100.0},
        "negatif": {"precision": 0.84, "recall": 0.92, "f1-score": 0.88, "support": 120.0}
    },
    "scenario1_results": [
        {"params": {"n_estimators": 50, "max_depth": null}, "accuracy": 0.80, "recall": 0.78, "f1": 0.79},
        {"params": {"n_estimators": 100, "max_depth": null}, "accuracy": 0.84, "recall": 0.81, "f1": 0.82}
    ],
    "scenario2_results": [
        {"params": {"n_estimators": 100, "max_depth": 10}, "accuracy": 0.83, "recall": 0.80, "f1": 0.81}
    ]
}"#;

#[test]
fn test_file_to_report_round_trip() {
    let dir = tempdir().expect("temp dir");
    let artifact_path = dir.path().join("model.json");
    let report_path = dir.path().join("sentiment_report.html");
    fs::write(&artifact_path, ARTIFACT_JSON).expect("write artifact");

    let artifact = EvaluationArtifact::from_json_file(&artifact_path).expect("load artifact");

    let mut surface = HtmlSurface::new();
    ReportRenderer::new()
        .render(&artifact, &mut surface)
        .expect("render succeeds");
    fs::write(&report_path, surface.finish()).expect("write report");

    let html = fs::read_to_string(&report_path).expect("read report back");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("0.8765"));
    assert!(html.contains("n_estimators = 50"));
    // max_depth=null renders the way the training side spelled it.
    assert!(html.contains("max_depth: None"));
}

#[test]
fn test_missing_artifact_file_is_fatal() {
    let dir = tempdir().expect("temp dir");
    let error = EvaluationArtifact::from_json_file(&dir.path().join("model.json")).unwrap_err();
    assert!(error.to_string().contains("Failed to read artifact file"));
}

#[test]
fn test_validation_enumerates_every_issue() {
    let dir = tempdir().expect("temp dir");
    let artifact_path = dir.path().join("model.json");
    // Three independent problems: accuracy out of range, no "positif"
    // class, trial missing its sweep hyperparameter.
    fs::write(
        &artifact_path,
        r#"{
            "accuracy": 1.5,
            "classification_report": {
                "negatif": {"precision": 0.8, "recall": 0.8, "f1-score": 0.8, "support": 10.0}
            },
            "scenario1_results": [
                {"params": {"max_depth": 5}, "accuracy": 0.8, "recall": 0.8, "f1": 0.8}
            ],
            "scenario2_results": []
        }"#,
    )
    .expect("write artifact");

    let error = EvaluationArtifact::from_json_file(&artifact_path).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("failed validation with 3 issue(s)"));
    assert!(message.contains("accuracy = 1.5 is outside [0, 1]"));
    assert!(message.contains("classification_report has no \"positif\" class"));
    assert!(message.contains("scenario1_results[0].params is missing `n_estimators`"));
}

#[test]
fn test_wrong_typed_field_fails_parse() {
    let dir = tempdir().expect("temp dir");
    let artifact_path = dir.path().join("model.json");
    fs::write(
        &artifact_path,
        r#"{"accuracy": "high", "classification_report": {}, "scenario1_results": [], "scenario2_results": []}"#,
    )
    .expect("write artifact");

    let error = EvaluationArtifact::from_json_file(&artifact_path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse artifact file"));
}
