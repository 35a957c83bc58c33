//! Command line front end.
//!
//! ```text
//! setupkit [--config PATH] [--svg OUT] [--history OUT] JOB...
//! ```
//!
//! Each JOB is a `.toml` or `.json` file holding a serialized
//! [`FormState`]. Results are printed one per line on stdout.

use anyhow::{bail, Context};
use clap::Parser;
use setupkit_settings::Config;
use setupkit_ui::{FormState, Session};
use setupkit_visualizer::write_svg;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default, Parser)]
#[command(
    name = "setupkit",
    version = crate::LONG_VERSION,
    about = "Computes CNC setup reference points from job files (.toml or .json)"
)]
pub struct Args {
    /// Configuration file (default: platform config dir)
    #[arg(short, long, value_name = "PATH", allow_hyphen_values = true)]
    pub config: Option<PathBuf>,

    /// Write the drawing of the last successful job as SVG
    #[arg(short, long, value_name = "OUT", allow_hyphen_values = true)]
    pub svg: Option<PathBuf>,

    /// Export the result history as text
    #[arg(short = 'H', long, value_name = "OUT", allow_hyphen_values = true)]
    pub history: Option<PathBuf>,

    /// Job files
    #[arg(value_name = "JOB", required = true)]
    pub jobs: Vec<PathBuf>,
}

/// Reads a job file. The format follows the extension.
pub fn load_job(path: &Path) -> anyhow::Result<FormState> {
    let ext = path.extension().and_then(|e| e.to_str());
    if !matches!(ext, Some("toml") | Some("json")) {
        bail!(
            "unsupported job file '{}': expected .toml or .json",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading job file {}", path.display()))?;

    let form = if ext == Some("toml") {
        toml::from_str(&content)
            .with_context(|| format!("parsing TOML job {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parsing JSON job {}", path.display()))?
    };
    Ok(form)
}

/// Loads the configuration named on the command line, or the default file
/// when present.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => match Config::default_path() {
            Ok(default) => Config::load_or_default(&default)
                .with_context(|| format!("loading config {}", default.display())),
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Counts of processed jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs every job through one session, printing each result line to
/// `out`. A failing job is logged and skipped.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<RunSummary> {
    let config = load_config(args.config.as_deref())?;
    let mut session = Session::new(&config);
    let mut summary = RunSummary::default();
    let mut last_scene = None;

    for job in &args.jobs {
        let outcome = load_job(job).and_then(|form| {
            session
                .calculate(&form)
                .with_context(|| format!("calculating {}", job.display()))
        });

        match outcome {
            Ok(outcome) => {
                writeln!(out, "{}", outcome.result_text)?;
                if outcome.scene.is_some() {
                    last_scene = outcome.scene;
                }
                summary.succeeded += 1;
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                summary.failed += 1;
            }
        }
    }

    if let Some(path) = &args.svg {
        match &last_scene {
            Some(scene) => write_svg(scene, path)
                .with_context(|| format!("writing drawing {}", path.display()))?,
            None => tracing::warn!("no drawing to write"),
        }
    }

    if let Some(path) = args.history.as_ref().or(config.history.export_path.as_ref()) {
        session
            .save_history(path)
            .with_context(|| format!("exporting history {}", path.display()))?;
    }

    Ok(summary)
}
