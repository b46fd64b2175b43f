//! Entry point for mdc-tracker.
use std::process::ExitCode;

use clap::Parser;
use mdc_tracker::{
    cli::{execute, CliExit, TrackerArgs},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let args = TrackerArgs::parse();
    let output = execute(args).map_err(CliExit::from_error)?;
    print!("{}", output.message);
    Ok(output.exit_code())
}
