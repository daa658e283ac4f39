//! Typed evaluation artifact produced by the training side.
//!
//! The artifact arrives as a nested JSON document; everything here is
//! deserialized into explicit structs and validated eagerly, so a broken
//! artifact fails at load time with every problem enumerated instead of
//! failing deep inside the render pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Class label the aggregate metrics are reported for.
pub const POSITIVE_CLASS: &str = "positif";

/// Hyperparameter swept in scenario 1.
pub const SCENARIO1_KEY: &str = "n_estimators";

/// Hyperparameter swept in scenario 2.
pub const SCENARIO2_KEY: &str = "max_depth";

/// Complete evaluation artifact: aggregate metrics plus the two
/// hyperparameter-sweep result sets.
///
/// Immutable after load; the render pass only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationArtifact {
    /// Overall model accuracy in [0, 1]
    pub accuracy: f64,
    /// Per-class precision/recall/F1/support, keyed by class label.
    /// Insertion order is preserved and becomes the table row order.
    pub classification_report: IndexMap<String, ClassMetrics>,
    /// Sweep over `n_estimators`, in trial order
    pub scenario1_results: Vec<TrialResult>,
    /// Sweep over `max_depth`, in trial order
    pub scenario2_results: Vec<TrialResult>,
}

/// Metrics for a single class (or aggregate row) of the classification report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    pub support: f64,
}

/// One trial of a hyperparameter sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Hyperparameter configuration, in declaration order
    pub params: IndexMap<String, ParamValue>,
    pub accuracy: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Hyperparameter value. Sweep configurations mix integers, floats,
/// strings and nulls (`max_depth: null` is common), so values are kept
/// loosely typed and rendered back as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(value) => write!(f, "{value}"),
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write!(f, "{value}"),
            ParamValue::Text(value) => f.write_str(value),
            ParamValue::Null => f.write_str("None"),
        }
    }
}

/// A single structural problem found during validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("{field} = {value} is outside [0, 1]")]
    MetricOutOfRange { field: String, value: f64 },

    #[error("classification_report has no \"positif\" class")]
    MissingPositiveClass,

    #[error("{scenario}[{index}].params is missing `{key}`")]
    MissingKeyParam {
        scenario: &'static str,
        index: usize,
        key: &'static str,
    },
}

/// Validation failure carrying every issue found in one pass.
///
/// No silent defaulting: a hole in the artifact is a training-side data
/// problem and must surface, not be papered over.
#[derive(Debug, Error)]
#[error("evaluation artifact failed validation with {} issue(s):\n{}", .issues.len(), format_issues(.issues))]
pub struct ArtifactError {
    pub issues: Vec<ValidationIssue>,
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl EvaluationArtifact {
    /// Check every structural invariant and report all violations at once.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let mut issues = Vec::new();

        check_unit_range("accuracy", self.accuracy, &mut issues);

        if !self.classification_report.contains_key(POSITIVE_CLASS) {
            issues.push(ValidationIssue::MissingPositiveClass);
        }

        for (label, metrics) in &self.classification_report {
            let prefix = format!("classification_report[\"{label}\"]");
            check_unit_range(&format!("{prefix}.precision"), metrics.precision, &mut issues);
            check_unit_range(&format!("{prefix}.recall"), metrics.recall, &mut issues);
            check_unit_range(&format!("{prefix}.f1-score"), metrics.f1_score, &mut issues);
        }

        validate_trials(
            "scenario1_results",
            &self.scenario1_results,
            SCENARIO1_KEY,
            &mut issues,
        );
        validate_trials(
            "scenario2_results",
            &self.scenario2_results,
            SCENARIO2_KEY,
            &mut issues,
        );

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ArtifactError { issues })
        }
    }
}

fn validate_trials(
    scenario: &'static str,
    trials: &[TrialResult],
    key: &'static str,
    issues: &mut Vec<ValidationIssue>,
) {
    for (index, trial) in trials.iter().enumerate() {
        if !trial.params.contains_key(key) {
            issues.push(ValidationIssue::MissingKeyParam {
                scenario,
                index,
                key,
            });
        }

        let prefix = format!("{scenario}[{index}]");
        check_unit_range(&format!("{prefix}.accuracy"), trial.accuracy, issues);
        check_unit_range(&format!("{prefix}.recall"), trial.recall, issues);
        check_unit_range(&format!("{prefix}.f1"), trial.f1, issues);
    }
}

// NaN fails the range check as well, which is what we want.
fn check_unit_range(field: &str, value: f64, issues: &mut Vec<ValidationIssue>) {
    if !(0.0..=1.0).contains(&value) {
        issues.push(ValidationIssue::MetricOutOfRange {
            field: field.to_string(),
            value,
        });
    }
}
