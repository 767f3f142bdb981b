//! Command-Line Front End
//!
//! Reads files, hands each one to the analyzer on a blocking task, and prints
//! the reports.

pub mod output;
pub mod watch;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{Args, Config};
use crate::core::{GcodeDocument, Report};
use crate::estimate::EstimatorConfig;

/// Analysis outcome for one input file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<Report>,
}

/// Entry point of the `gcode-analyze` binary
pub async fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::from_args(args)?;
    log::debug!("Effective configuration: {:?}", config);

    let reports = analyze_files(&config.files, config.estimator).await;
    print!("{}", output::render(&reports, config.format)?);

    let failed = reports.iter().any(|report| report.outcome.is_err());

    if config.watch {
        watch::watch_files(&config).await?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Analyze every file concurrently; reports come back in input order.
pub async fn analyze_files(paths: &[PathBuf], estimator: EstimatorConfig) -> Vec<FileReport> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(analyze_file(path, estimator)))
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(paths) {
        let report = match handle.await {
            Ok(report) => report,
            Err(e) => FileReport {
                path: path.clone(),
                outcome: Err(anyhow::Error::new(e).context("Analysis task failed")),
            },
        };
        reports.push(report);
    }

    reports
}

/// Analyze a single file. Failures are logged and returned, never raised.
pub async fn analyze_file(path: PathBuf, estimator: EstimatorConfig) -> FileReport {
    let outcome = analyze_path(&path, estimator).await;

    if let Err(e) = &outcome {
        log::warn!("Failed to analyze {}: {:#}", path.display(), e);
    }

    FileReport { path, outcome }
}

async fn analyze_path(path: &Path, estimator: EstimatorConfig) -> Result<Report> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    // Large files take a while; keep them off the async workers.
    tokio::task::spawn_blocking(move || GcodeDocument::with_config(text, estimator).report())
        .await
        .context("Analysis task failed")
}
