//! The report renderer: one stateless pass from an evaluation artifact to
//! display-surface calls.
//!
//! Section order is fixed: page metadata, header banner, the three tabs
//! (model evaluation, n_estimators sweep, max_depth sweep), footer. The
//! pass is pure formatting; rendering the same artifact twice drives the
//! surface identically.

use anyhow::{anyhow, Result};

use crate::artifact::{EvaluationArtifact, TrialResult, POSITIVE_CLASS, SCENARIO1_KEY, SCENARIO2_KEY};
use crate::render::surface::DisplaySurface;
use crate::render::table::transpose_report;

const PAGE_TITLE: &str = "Sentiment Analysis";
const PAGE_ICON: &str = "🦋";

const TAB_LABELS: [&str; 3] = ["📊 Model Evaluation", "🔧 Scenario 1", "⚙️ Scenario 2"];

const HEADER_BLOCK: &str = "<div class=\"page-header\">\
<h1>🦋 Sentiment Analysis with Random Forest</h1>\
<div class=\"subtitle\">Visualization of Sentiment Classification Results</div>\
</div>";

const FOOTER_BLOCK: &str =
    "<div class=\"page-footer\">🦋 Sentiment Analysis Dashboard © 2023</div>";

// Butterfly motif shown at the top of every tab.
const BUTTERFLY_BLOCK: &str = "<div class=\"butterfly-icon\">\
<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 512 512\" width=\"24\" height=\"24\">\
<path fill=\"#FF6B6B\" d=\"M256 16C123.5 16 16 123.5 16 256s107.5 240 240 240 240-107.5 240-240S388.5 16 256 16zm-64 352c-44.1 0-80-35.9-80-80s35.9-80 80-80c13.6 0 26.3 3.4 37.5 9.3-4.9 13.4-7.5 27.9-7.5 42.7 0 23.3 9.1 44.5 24 60.2-9.3 8.1-21.3 12.8-34 12.8zm128 0c-12.7 0-24.7-4.7-34-12.8 14.9-15.7 24-36.9 24-60.2 0-14.8-2.6-29.3-7.5-42.7 11.2-5.9 23.9-9.3 37.5-9.3 44.1 0 80 35.9 80 80s-35.9 80-80 80z\"/>\
</svg></div>";

const HELP_ACCURACY: &str = "Proportion of correct predictions over all predictions";
const HELP_RECALL: &str = "Ability of the model to find every positive sample";
const HELP_F1: &str = "Harmonic mean of precision and recall";

/// Renders an [`EvaluationArtifact`] onto a [`DisplaySurface`].
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full dashboard.
    ///
    /// The artifact is expected to be validated; the only failure mode
    /// left is a field going missing between validation and render, which
    /// surfaces as a section-scoped missing-field error.
    pub fn render(
        &self,
        artifact: &EvaluationArtifact,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        surface.set_page_metadata(PAGE_TITLE, PAGE_ICON);
        surface.styled_block(HEADER_BLOCK);

        surface.begin_tabs(&TAB_LABELS);

        surface.begin_tab(0);
        self.render_evaluation_tab(artifact, surface)?;
        surface.end_tab();

        surface.begin_tab(1);
        self.render_scenario_tab(
            surface,
            "🔧 Scenario 1 - Varying n_estimators",
            "🔄",
            SCENARIO1_KEY,
            "scenario1_results",
            &artifact.scenario1_results,
        )?;
        surface.end_tab();

        surface.begin_tab(2);
        self.render_scenario_tab(
            surface,
            "⚙️ Scenario 2 - Varying max_depth",
            "📏",
            SCENARIO2_KEY,
            "scenario2_results",
            &artifact.scenario2_results,
        )?;
        surface.end_tab();

        surface.end_tabs();

        surface.styled_block(FOOTER_BLOCK);
        Ok(())
    }

    fn render_evaluation_tab(
        &self,
        artifact: &EvaluationArtifact,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        surface.header("📈 Model Evaluation");
        surface.styled_block(BUTTERFLY_BLOCK);

        let positive = artifact
            .classification_report
            .get(POSITIVE_CLASS)
            .ok_or_else(|| {
                anyhow!("classification_report is missing the \"{POSITIVE_CLASS}\" class")
            })?;

        surface.subheader("📋 Key Metrics");
        surface.metric(
            "🎯 Accuracy",
            &format!("{:.4}", artifact.accuracy),
            Some(HELP_ACCURACY),
        );
        surface.metric(
            "🔍 Recall (positif)",
            &format!("{:.4}", positive.recall),
            Some(HELP_RECALL),
        );
        surface.metric(
            "⚖️ F1-Score (positif)",
            &format!("{:.4}", positive.f1_score),
            Some(HELP_F1),
        );

        surface.subheader("📑 Classification Report");
        surface.table(&transpose_report(&artifact.classification_report));
        Ok(())
    }

    fn render_scenario_tab(
        &self,
        surface: &mut dyn DisplaySurface,
        heading: &str,
        trial_icon: &str,
        key: &'static str,
        scenario: &'static str,
        trials: &[TrialResult],
    ) -> Result<()> {
        surface.header(heading);
        surface.styled_block(BUTTERFLY_BLOCK);

        for (index, trial) in trials.iter().enumerate() {
            let value = trial
                .params
                .get(key)
                .ok_or_else(|| anyhow!("{scenario}[{index}].params is missing `{key}`"))?;

            surface.subheader(&format!("{trial_icon} {key} = {value}"));
            surface.metric("🎯 Accuracy", &format!("{:.4}", trial.accuracy), None);
            surface.metric("🔍 Recall", &format!("{:.4}", trial.recall), None);
            surface.metric("⚖️ F1-Score", &format!("{:.4}", trial.f1), None);

            let params = trial
                .params
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("\n");
            surface.text_block("Model Parameters", &params, 100);

            // Separator between trials, never after the last one.
            if index + 1 < trials.len() {
                surface.divider();
            }
        }

        Ok(())
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
