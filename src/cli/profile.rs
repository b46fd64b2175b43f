//! Configuration file resolution and per-command overrides.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use super::CountArgs;
use crate::config::{TrackerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Resolved configuration file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub source: ConfigSource,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<ConfigLocation> {
    resolve_config_path_from(override_path, env::var_os(CONFIG_ENV_KEY).map(PathBuf::from))
}

fn resolve_config_path_from(
    override_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
) -> Result<ConfigLocation> {
    let (path, source) = match (override_path, env_path) {
        (Some(path), _) => (path, ConfigSource::Cli),
        (None, Some(path)) if !path.as_os_str().is_empty() => (path, ConfigSource::Env),
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
    };

    if path.is_absolute() {
        return Ok(ConfigLocation { path, source });
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(ConfigLocation {
        path: cwd.join(path),
        source,
    })
}

/// Load the configuration. Only an implicit default path may be absent.
pub fn load_config(location: ConfigLocation) -> Result<TrackerConfig> {
    if location.source == ConfigSource::Default && !location.path.exists() {
        return Ok(TrackerConfig::builtin(location.path));
    }
    if location.source == ConfigSource::Env {
        info!(
            target: "mdc_tracker::config",
            path = %location.path.display(),
            env = CONFIG_ENV_KEY,
            "Loading configuration from environment variable"
        );
    }
    let config = TrackerConfig::load_from_path(location.path)?;
    Ok(config)
}

/// Fold `count` flags into the loaded configuration.
pub fn apply_count_overrides(config: &mut TrackerConfig, args: &CountArgs) {
    if let Some(dir) = &args.source_dir {
        config.paths.source_dir = dir.clone();
    }
    if let Some(dir) = &args.translated_dir {
        config.paths.translated_dir = dir.clone();
    }
    if let Some(path) = &args.report_path {
        config.paths.report_path = path.clone();
    }
}

/// Directory for `fix-yaml`/`validate`: explicit argument or the translated corpus.
pub fn target_dir(config: &TrackerConfig, dir: Option<&Path>) -> PathBuf {
    dir.map(Path::to_path_buf)
        .unwrap_or_else(|| config.paths.translated_dir.clone())
}
