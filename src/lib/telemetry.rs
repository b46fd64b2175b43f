//! Telemetry initialization and run-level event helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing`. Logs go to stderr so stdout stays the human report.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a per-directory batch.
pub struct BatchSpan {
    span: Span,
    started_at: Instant,
    kind: &'static str,
}

impl BatchSpan {
    /// Start a batch span over `dir`.
    pub fn start(kind: &'static str, dir: &Path) -> Self {
        let span = info_span!(
            target: "mdc_tracker::mdc",
            "mdc_batch",
            kind,
            dir = %dir.display()
        );
        Self {
            span,
            started_at: Instant::now(),
            kind,
        }
    }

    /// Close the span while recording file counts.
    pub fn finish(self, files: usize, failures: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "mdc_tracker::mdc",
            kind = self.kind,
            files,
            failures,
            elapsed_ms = elapsed_ms,
            "Completed batch"
        );
    }
}
