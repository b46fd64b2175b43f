//! CLI entrypoint module structure.
use std::process::ExitCode;

use anyhow::{Context, Error, Result};
use chrono::Utc;

use crate::{mdc, progress};

pub mod args;
pub mod profile;

pub use args::{CountArgs, FixYamlArgs, TrackerArgs, TrackerCommand, ValidateArgs};
pub use profile::{
    apply_count_overrides, load_config, resolve_config_path, target_dir, ConfigLocation,
    ConfigSource,
};

/// Text for stdout plus whether the command fully succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub message: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Bundles a fatal error message with the exit code to report it under.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    exit_code: ExitCode,
}

impl CliExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("error: {err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Execute a parsed command and return its user-facing output.
pub fn execute(args: TrackerArgs) -> Result<CommandOutput> {
    let location = resolve_config_path(args.config_override)?;
    let mut config = load_config(location)?;

    match args.command {
        TrackerCommand::Count(count) => {
            apply_count_overrides(&mut config, &count);
            let report = progress::collect(&config)?;
            let mut message = report
                .console(&config.paths.extension, config.report.priority2_limit)
                .to_string();
            if !count.no_json {
                let path = &config.paths.report_path;
                report.write_json(path, Utc::now())?;
                message.push_str(&format!("\nJSON report saved to: {}\n", path.display()));
            }
            Ok(CommandOutput::ok(message))
        }
        TrackerCommand::FixYaml(fix) => {
            let dir = target_dir(&config, fix.dir.as_deref());
            let summary = mdc::fix_directory(&dir, &config.paths.extension, fix.dry_run)?;
            Ok(CommandOutput {
                message: summary.to_string(),
                success: summary.is_success(),
            })
        }
        TrackerCommand::Validate(validate) => {
            let dir = target_dir(&config, validate.dir.as_deref());
            let summary = mdc::validate_directory(&dir, &config.paths.extension)?;
            Ok(CommandOutput {
                message: summary.to_string(),
                success: summary.is_success(),
            })
        }
        TrackerCommand::ShowConfig => {
            let rendered = config
                .to_toml()
                .context("failed to render configuration as TOML")?;
            Ok(CommandOutput::ok(rendered))
        }
    }
}
