//! Load and validate tracker configuration.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::lib::errors::ConfigError;
use crate::progress::{PriorityLists, Taxonomy};

pub mod paths;
pub mod taxonomy;
pub mod telemetry;

pub use paths::{
    parse_paths_section, parse_report_section, PathsSection, RawPathsSection, RawReportSection,
    ReportSection, DEFAULT_EXTENSION, DEFAULT_REPORT_PATH, DEFAULT_SOURCE_DIR,
    DEFAULT_TRANSLATED_DIR,
};
pub use taxonomy::{
    parse_priorities_section, parse_taxonomy_section, RawPrioritiesSection, RawTaxonomySection,
};

pub const CONFIG_ENV_KEY: &str = "MDC_TRACKER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "mdc-tracker.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    pub paths: PathsSection,
    pub report: ReportSection,
    pub priorities: PriorityLists,
    pub taxonomy: Taxonomy,
    /// File the values came from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawTrackerConfig {
    paths: Option<RawPathsSection>,
    report: Option<RawReportSection>,
    priorities: Option<RawPrioritiesSection>,
    taxonomy: Option<RawTaxonomySection>,
}

#[derive(Serialize)]
struct RenderedConfig<'a> {
    paths: &'a PathsSection,
    report: &'a ReportSection,
    priorities: &'a PriorityLists,
    taxonomy: &'a Taxonomy,
}

impl TrackerConfig {
    /// Built-in defaults, logged the same way as a loaded file.
    pub fn builtin(probed: PathBuf) -> Self {
        telemetry::log_builtin_defaults(&probed);
        let config = Self::default();
        telemetry::log_loaded(&config);
        config
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "mdc_tracker::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawTrackerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "mdc_tracker::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "mdc_tracker::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawTrackerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let paths = parse_paths_section(raw.paths, &path)?;
        let report = parse_report_section(raw.report, &path)?;
        let priorities = parse_priorities_section(raw.priorities, &path)?;
        let taxonomy = parse_taxonomy_section(raw.taxonomy, &path)?;

        Ok(Self {
            paths,
            report,
            priorities,
            taxonomy,
            source_path: Some(path),
        })
    }

    /// Effective configuration as a TOML document loadable by `load_from_path`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&RenderedConfig {
            paths: &self.paths,
            report: &self.report,
            priorities: &self.priorities,
            taxonomy: &self.taxonomy,
        })
    }
}
