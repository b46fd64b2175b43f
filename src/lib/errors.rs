use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Which side of the corpus a directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    Source,
    Translated,
    Target,
}

impl DirectoryRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DirectoryRole::Source => "source",
            DirectoryRole::Translated => "translated",
            DirectoryRole::Target => "target",
        }
    }
}

impl std::fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal failures of a progress run. Any of these aborts the remaining pipeline.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{role} directory does not exist: {path}")]
    DirectoryNotFound { role: DirectoryRole, path: PathBuf },
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize progress report: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write progress report {path}: {source}")]
    ReportWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reasons a single `.mdc` document could not be repaired or validated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentIssue {
    #[error("file does not start with YAML front matter (---)")]
    MissingFrontMatter,
    #[error("malformed YAML front matter")]
    MalformedFrontMatter,
    #[error("YAML parse error: {message}")]
    YamlParse { message: String },
    #[error("front matter is missing the `{field}` field")]
    MissingField { field: &'static str },
    #[error("`globs` field must be a string")]
    GlobsNotString,
    #[error("Markdown body must not be empty")]
    EmptyBody,
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<io::Error> for DocumentIssue {
    fn from(value: io::Error) -> Self {
        DocumentIssue::Io {
            message: value.to_string(),
        }
    }
}
