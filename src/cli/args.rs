//! CLI argument definitions.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mdc-tracker",
    author,
    version,
    about = "Track translation progress of .mdc rule corpora and keep their front matter valid",
    long_about = None
)]
pub struct TrackerArgs {
    /// Path to the configuration file (overrides MDC_TRACKER_CONFIG).
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: TrackerCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TrackerCommand {
    /// Report translation progress and write the JSON report.
    Count(CountArgs),
    /// Quote bare `globs:` values in document front matter.
    FixYaml(FixYamlArgs),
    /// Check front matter and body structure of translated documents.
    Validate(ValidateArgs),
    /// Print the effective configuration as TOML.
    ShowConfig,
}

/// Arguments for `count`.
#[derive(Debug, Clone, Default, Args)]
pub struct CountArgs {
    /// Directory holding the source documents.
    #[arg(long = "source", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,
    /// Directory holding the translated documents.
    #[arg(long = "translated", value_name = "DIR")]
    pub translated_dir: Option<PathBuf>,
    /// Where to write the JSON report.
    #[arg(long = "output", value_name = "FILE")]
    pub report_path: Option<PathBuf>,
    /// Skip writing the JSON report.
    #[arg(long, default_value_t = false)]
    pub no_json: bool,
}

/// Arguments for `fix-yaml`.
#[derive(Debug, Clone, Default, Args)]
pub struct FixYamlArgs {
    /// Directory to repair (defaults to the translated directory).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Report what would change without writing files.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Arguments for `validate`.
#[derive(Debug, Clone, Default, Args)]
pub struct ValidateArgs {
    /// Directory to validate (defaults to the translated directory).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}
