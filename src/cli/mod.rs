//! Command-line interface for the dashboard renderer.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::artifact::EvaluationArtifact;
use crate::render::{HtmlSurface, ReportRenderer};

/// CLI arguments
#[derive(Parser)]
#[command(name = "sentiview")]
#[command(about = "Render a sentiment model evaluation artifact as an HTML dashboard")]
#[command(version)]
pub struct Cli {
    /// Serialized evaluation artifact (JSON)
    #[arg(short, long, default_value = "model.json")]
    pub artifact: PathBuf,

    /// Output path for the HTML report
    #[arg(short, long, default_value = "sentiment_report.html")]
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Initialize logging
    pub fn init_logging(&self) -> Result<()> {
        let level = if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(
                EnvFilter::builder()
                    .with_default_directive(level.into())
                    .from_env_lossy(),
            )
            .init();

        Ok(())
    }

    /// Load the artifact, render the dashboard, write the report file.
    pub fn execute(self) -> Result<()> {
        let artifact = EvaluationArtifact::from_json_file(&self.artifact)?;

        let mut surface = HtmlSurface::new();
        ReportRenderer::new().render(&artifact, &mut surface)?;

        let html = surface.finish();
        std::fs::write(&self.output, html)
            .with_context(|| format!("Failed to write report: {}", self.output.display()))?;

        info!("🌐 HTML report written to: {}", self.output.display());
        Ok(())
    }
}
