//! Configuration management for the G-code analyzer.
//!
//! Handles:
//! - Command-line argument parsing
//! - TOML config files (user config directory, then `--config`)
//! - Merging both into estimator settings, command line last

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::estimate::{EstimatorConfig, ZeroFeedPolicy};

/// Command-line arguments for the G-code analyzer
#[derive(Debug, Parser)]
#[command(name = "gcode-analyze")]
#[command(about = "Extract slicer metadata and estimate print time of G-code files")]
#[command(version)]
pub struct Args {
    /// G-code files to analyze
    #[arg(required = true, help = "G-code files to analyze")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Extra configuration file, applied over the user config
    #[arg(long, help = "Configuration file (TOML)")]
    pub config: Option<PathBuf>,

    /// Feed rate used before the first F word
    #[arg(long, help = "Feed rate in mm/min assumed before the first F word")]
    pub default_feed_rate: Option<f64>,

    /// Handling of F0 and negative feed rates
    #[arg(long, value_enum)]
    pub zero_feed_policy: Option<ZeroFeedPolicy>,

    /// Re-analyze files whenever they change
    #[arg(long)]
    pub watch: bool,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Config file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub estimator: EstimatorSection,
}

/// `[estimator]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EstimatorSection {
    pub default_feed_rate: Option<f64>,
    pub zero_feed_policy: Option<ZeroFeedPolicy>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overwrite the settings this file names.
    pub fn apply(&self, estimator: &mut EstimatorConfig) {
        if let Some(feed_rate) = self.estimator.default_feed_rate {
            estimator.default_feed_rate = feed_rate;
        }
        if let Some(policy) = self.estimator.zero_feed_policy {
            estimator.zero_feed_policy = policy;
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub watch: bool,
    pub log_level: String,
    pub estimator: EstimatorConfig,
    /// Config files that were applied, in order
    pub config_sources: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from explicit arguments, reading the user config
    /// file if there is one
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_args_with_user_config(args, default_config_path())
    }

    /// Create configuration with an explicit user config location (useful for
    /// testing)
    pub fn from_args_with_user_config(args: Args, user_config: Option<PathBuf>) -> Result<Self> {
        let mut estimator = EstimatorConfig::default();
        let mut config_sources = Vec::new();

        // A missing user config is normal; an explicit --config must exist.
        let files = user_config
            .filter(|path| path.is_file())
            .into_iter()
            .chain(args.config);

        for path in files {
            ConfigFile::load(&path)?.apply(&mut estimator);
            log::debug!("Applied config file: {}", path.display());
            config_sources.push(path);
        }

        if let Some(feed_rate) = args.default_feed_rate {
            estimator.default_feed_rate = feed_rate;
        }
        if let Some(policy) = args.zero_feed_policy {
            estimator.zero_feed_policy = policy;
        }

        estimator.validate().context("Invalid estimator configuration")?;

        Ok(Config {
            files: args.files,
            format: args.format,
            watch: args.watch,
            log_level: args.log_level,
            estimator,
            config_sources,
        })
    }
}

/// `<config dir>/gcode-analyzer/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gcode-analyzer").join("config.toml"))
}
