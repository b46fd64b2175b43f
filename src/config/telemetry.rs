use std::path::Path;

use tracing::{debug, info};

use super::{TrackerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_builtin_defaults(path: &Path) {
    debug!(
        target: "mdc_tracker::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &TrackerConfig) {
    let source = config
        .source_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<built-in>".to_string());
    info!(
        target: "mdc_tracker::config",
        path = %source,
        source_dir = %config.paths.source_dir.display(),
        translated_dir = %config.paths.translated_dir.display(),
        report_path = %config.paths.report_path.display(),
        extension = %config.paths.extension,
        taxonomy_version = config.taxonomy.version,
        tier1 = config.priorities.tier1.len(),
        tier2 = config.priorities.tier2.len(),
        "Configuration loaded"
    );
}
