//! Per-file repair and validation of `.mdc` documents (YAML front matter + Markdown body).
use std::{
    fmt,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::lib::{
    errors::{DirectoryRole, DocumentIssue, TrackerError},
    fs::list_documents,
    telemetry::BatchSpan,
};

pub mod fix;
pub mod front_matter;
pub mod validate;

pub use fix::{fix_content, fix_directory, fix_file, FixStatus};
pub use front_matter::{split_front_matter, FrontMatter};
pub use validate::{validate_content, validate_directory, validate_file};

/// Non-fatal observation about a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentWarning {
    DescriptionNotTranslated,
    BodyNotTranslated,
    BodyWithoutHeading,
}

impl fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DocumentWarning::DescriptionNotTranslated => {
                "`description` should contain Chinese text"
            }
            DocumentWarning::BodyNotTranslated => "Markdown body should contain a Chinese translation",
            DocumentWarning::BodyWithoutHeading => "Markdown body should contain a heading",
        };
        f.write_str(message)
    }
}

/// Result of processing one file, returned to the caller rather than accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome<T> {
    pub file: String,
    pub warnings: Vec<DocumentWarning>,
    pub result: Result<T, DocumentIssue>,
}

impl<T> FileOutcome<T> {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes for every matching file in one directory, in file-name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary<T> {
    pub dir: PathBuf,
    pub outcomes: Vec<FileOutcome<T>>,
}

impl<T> BatchSummary<T> {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successes(&self) -> impl Iterator<Item = (&str, &T)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|v| (o.file.as_str(), v)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &DocumentIssue)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.file.as_str(), e)))
    }

    pub fn warnings(&self) -> impl Iterator<Item = (&str, DocumentWarning)> {
        self.outcomes
            .iter()
            .flat_map(|o| o.warnings.iter().map(move |w| (o.file.as_str(), *w)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// An empty directory counts as success.
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Apply `process` to every `.<extension>` file in `dir`.
///
/// Per-file failures are recorded in the summary; only a missing or unreadable
/// directory aborts the batch.
pub fn run_batch<T>(
    kind: &'static str,
    dir: &Path,
    extension: &str,
    mut process: impl FnMut(&Path) -> FileOutcome<T>,
) -> Result<BatchSummary<T>, TrackerError> {
    let span = BatchSpan::start(kind, dir);
    let entries = list_documents(dir, extension, DirectoryRole::Target)?;
    if entries.is_empty() {
        info!(
            target: "mdc_tracker::mdc",
            dir = %dir.display(),
            extension,
            "No matching files found"
        );
    }

    let mut outcomes = Vec::with_capacity(entries.len());
    for entry in &entries {
        let outcome = process(&entry.path);
        if let Err(issue) = &outcome.result {
            warn!(
                target: "mdc_tracker::mdc",
                kind,
                file = %outcome.file,
                reason = %issue,
                "Document failed"
            );
        }
        outcomes.push(outcome);
    }

    let summary = BatchSummary {
        dir: dir.to_path_buf(),
        outcomes,
    };
    span.finish(summary.total(), summary.failure_count());
    Ok(summary)
}

/// File name for display; falls back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// True when `text` contains a CJK unified ideograph (U+4E00..=U+9FA5).
pub(crate) fn contains_chinese(text: &str) -> bool {
    text.chars().any(|c| matches!(c, '\u{4E00}'..='\u{9FA5}'))
}
