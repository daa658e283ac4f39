//! Evaluation artifact: data model, validation, and loading.

pub mod loader;
pub mod model;

pub use model::{
    ArtifactError, ClassMetrics, EvaluationArtifact, ParamValue, TrialResult, ValidationIssue,
    POSITIVE_CLASS, SCENARIO1_KEY, SCENARIO2_KEY,
};
