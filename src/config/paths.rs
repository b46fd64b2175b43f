use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::lib::errors::ConfigError;

pub const DEFAULT_SOURCE_DIR: &str = "../awesome-cursor-rules-mdc/rules-mdc";
pub const DEFAULT_TRANSLATED_DIR: &str = "rules-mdc-zh";
pub const DEFAULT_REPORT_PATH: &str = "translation-progress.json";
pub const DEFAULT_EXTENSION: &str = "mdc";
pub const DEFAULT_PRIORITY2_LIMIT: usize = 10;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Corpus locations and the document extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathsSection {
    pub source_dir: PathBuf,
    pub translated_dir: PathBuf,
    pub report_path: PathBuf,
    pub extension: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            translated_dir: PathBuf::from(DEFAULT_TRANSLATED_DIR),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Console report limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub priority2_limit: usize,
    pub recent_limit: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            priority2_limit: DEFAULT_PRIORITY2_LIMIT,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPathsSection {
    pub source_dir: Option<String>,
    pub translated_dir: Option<String>,
    pub report_path: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub priority2_limit: Option<usize>,
    pub recent_limit: Option<usize>,
}

pub fn parse_paths_section(
    raw: Option<RawPathsSection>,
    path: &Path,
) -> Result<PathsSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = PathsSection::default();

    let source_dir = parse_path(raw.source_dir, "paths.source_dir", path)?;
    let translated_dir = parse_path(raw.translated_dir, "paths.translated_dir", path)?;
    let report_path = parse_path(raw.report_path, "paths.report_path", path)?;
    let extension = match raw.extension {
        Some(value) => validate_extension(value, path)?,
        None => defaults.extension,
    };

    Ok(PathsSection {
        source_dir: source_dir.unwrap_or(defaults.source_dir),
        translated_dir: translated_dir.unwrap_or(defaults.translated_dir),
        report_path: report_path.unwrap_or(defaults.report_path),
        extension,
    })
}

pub fn parse_report_section(
    raw: Option<RawReportSection>,
    path: &Path,
) -> Result<ReportSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let priority2_limit = raw.priority2_limit.unwrap_or(DEFAULT_PRIORITY2_LIMIT);
    let recent_limit = raw.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    validate_limit(priority2_limit, "report.priority2_limit", path)?;
    validate_limit(recent_limit, "report.recent_limit", path)?;
    Ok(ReportSection {
        priority2_limit,
        recent_limit,
    })
}

fn parse_path(
    value: Option<String>,
    field: &'static str,
    path: &Path,
) -> Result<Option<PathBuf>, ConfigError> {
    match value {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Path must not be empty".into(),
        }),
        Some(value) => Ok(Some(PathBuf::from(value))),
    }
}

fn validate_extension(value: String, path: &Path) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') || trimmed.contains(['/', '\\']) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "paths.extension",
            message: "Use a bare extension such as `mdc` (no dot, no separators)".into(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_limit(value: usize, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if value >= 1 {
        return Ok(());
    }
    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Use a value of at least 1".into(),
    })
}
