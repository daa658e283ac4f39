//! # Sentiview - Sentiment Model Evaluation Dashboard
//!
//! Loads a pre-serialized sentiment-model evaluation artifact (accuracy,
//! per-class classification report, and two hyperparameter-sweep result
//! sets) and renders it as a self-contained HTML dashboard with metric
//! cards, a gradient-shaded classification-report table, and one tab per
//! sweep scenario.

pub mod artifact;
pub mod cli;
pub mod render;

// Re-export commonly used types at crate level
pub use crate::artifact::{ClassMetrics, EvaluationArtifact, ParamValue, TrialResult};
pub use crate::render::{DisplaySurface, HtmlSurface, ReportRenderer};

/// Result type used throughout the crate
pub type Result<T> = anyhow::Result<T>;

/// Error type used throughout the crate
pub type Error = anyhow::Error;
