//! Quote bare `globs:` values so the front matter parses as YAML.
//!
//! Unquoted glob patterns such as `globs: *.tsx` start with a YAML alias
//! indicator and break strict parsers.
use std::{fmt, fs, path::Path, sync::OnceLock};

use regex::{Captures, Regex};
use tracing::debug;

use super::{display_name, run_batch, split_front_matter, BatchSummary, FileOutcome};
use crate::lib::errors::{DocumentIssue, TrackerError};

const RULE_WIDTH: usize = 60;

pub type FixSummary = BatchSummary<FixStatus>;

/// What happened to a file that was processed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    Fixed,
    /// Would have been rewritten, but the run was a dry run.
    WouldFix,
    Unchanged,
}

fn globs_line() -> &'static Regex {
    static GLOBS_LINE: OnceLock<Regex> = OnceLock::new();
    GLOBS_LINE.get_or_init(|| Regex::new(r"(?m)^globs:[ \t]*(.+)$").expect("globs pattern"))
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Return the repaired document, or `None` when nothing needed quoting.
pub fn fix_content(content: &str) -> Result<Option<String>, DocumentIssue> {
    let parts = split_front_matter(content)?;
    let yaml = globs_line().replace_all(parts.yaml, |caps: &Captures<'_>| {
        let value = caps[1].trim();
        if value.is_empty() || is_quoted(value) {
            caps[0].to_string()
        } else {
            format!("globs: {}", quote(value))
        }
    });

    if yaml == parts.yaml {
        return Ok(None);
    }
    Ok(Some(parts.render_with(&yaml)))
}

fn fix_path(path: &Path, dry_run: bool) -> Result<FixStatus, DocumentIssue> {
    let content = fs::read_to_string(path)?;
    let Some(fixed) = fix_content(&content)? else {
        return Ok(FixStatus::Unchanged);
    };
    if dry_run {
        return Ok(FixStatus::WouldFix);
    }
    // Plain write keeps the document's existing permissions.
    fs::write(path, fixed)?;
    Ok(FixStatus::Fixed)
}

/// Repair one file in place.
pub fn fix_file(path: &Path, dry_run: bool) -> FileOutcome<FixStatus> {
    let result = fix_path(path, dry_run);
    debug!(
        target: "mdc_tracker::mdc",
        path = %path.display(),
        status = ?result,
        "Processed globs repair"
    );
    FileOutcome {
        file: display_name(path),
        warnings: Vec::new(),
        result,
    }
}

/// Repair every matching file in `dir`.
pub fn fix_directory(
    dir: &Path,
    extension: &str,
    dry_run: bool,
) -> Result<FixSummary, TrackerError> {
    run_batch("fix-yaml", dir, extension, |path| fix_file(path, dry_run))
}

impl fmt::Display for FixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let count = |status: FixStatus| self.successes().filter(|(_, s)| **s == status).count();

        writeln!(f, "{rule}")?;
        writeln!(f, "YAML front matter repair: {}", self.dir.display())?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Files scanned: {}", self.total())?;
        writeln!(f, "Fixed: {}", count(FixStatus::Fixed))?;
        let planned = count(FixStatus::WouldFix);
        if planned > 0 {
            writeln!(f, "Would fix (dry run): {planned}")?;
        }
        writeln!(f, "Unchanged: {}", count(FixStatus::Unchanged))?;
        writeln!(f, "Errors: {}", self.failure_count())?;

        let changed: Vec<_> = self
            .successes()
            .filter(|(_, s)| **s != FixStatus::Unchanged)
            .collect();
        if !changed.is_empty() {
            writeln!(f, "\nRepaired files:")?;
            for (file, status) in changed {
                let suffix = if *status == FixStatus::WouldFix {
                    " (dry run)"
                } else {
                    ""
                };
                writeln!(f, "  - {file}{suffix}")?;
            }
        }

        if self.failure_count() > 0 {
            writeln!(f, "\nErrors:")?;
            for (file, issue) in self.failures() {
                writeln!(f, "  - {file}: {issue}")?;
            }
        }

        if self.is_success() {
            writeln!(f, "\nAll files processed successfully.")
        } else {
            writeln!(f, "\nSome files could not be repaired.")
        }
    }
}
