//! Artifact loading: read, deserialize, validate.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::artifact::model::EvaluationArtifact;

impl EvaluationArtifact {
    /// Load and validate an artifact from a JSON file.
    ///
    /// A missing or undeserializable file is fatal: there is nothing to
    /// render without the artifact, so the error carries the path and
    /// propagates up to the caller.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read artifact file: {}", path.display()))?;

        let artifact: EvaluationArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse artifact file: {}", path.display()))?;

        artifact
            .validate()
            .with_context(|| format!("Invalid artifact: {}", path.display()))?;

        info!("📦 Artifact loaded: {}", path.display());
        info!("   Classes: {}", artifact.classification_report.len());
        info!("   Scenario 1 trials: {}", artifact.scenario1_results.len());
        info!("   Scenario 2 trials: {}", artifact.scenario2_results.len());

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VALID_ARTIFACT: &str = r#"{
        "accuracy": 0.8765,
        "classification_report": {
            "positif": {"precision": 0.9, "recall": 0.8123, "f1-score": 0.85, "support": 100.0},
            "negatif": {"precision": 0.84, "recall": 0.9, "f1-score": 0.87, "support": 120.0}
        },
        "scenario1_results": [
            {"params": {"n_estimators": 50}, "accuracy": 0.80, "recall": 0.78, "f1": 0.79}
        ],
        "scenario2_results": []
    }"#;

    #[test]
    fn test_load_valid_artifact() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("model.json");
        fs::write(&path, VALID_ARTIFACT).expect("write fixture");

        let artifact = EvaluationArtifact::from_json_file(&path).expect("load fixture");
        assert_eq!(artifact.accuracy, 0.8765);
        assert_eq!(artifact.classification_report.len(), 2);
        assert_eq!(artifact.scenario1_results.len(), 1);
        assert!(artifact.scenario2_results.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("does_not_exist.json");

        let error = EvaluationArtifact::from_json_file(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to read artifact file"));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("model.json");
        fs::write(&path, "{ not json").expect("write fixture");

        let error = EvaluationArtifact::from_json_file(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse artifact file"));
    }

    #[test]
    fn test_invalid_artifact_rejected_at_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("model.json");
        // Accuracy out of range, no "positif" class.
        fs::write(
            &path,
            r#"{
                "accuracy": 2.0,
                "classification_report": {
                    "negatif": {"precision": 0.8, "recall": 0.8, "f1-score": 0.8, "support": 10.0}
                },
                "scenario1_results": [],
                "scenario2_results": []
            }"#,
        )
        .expect("write fixture");

        let error = EvaluationArtifact::from_json_file(&path).unwrap_err();
        let chain = format!("{error:#}");
        assert!(chain.contains("Invalid artifact"));
        assert!(chain.contains("failed validation with 2 issue(s)"));
    }
}
