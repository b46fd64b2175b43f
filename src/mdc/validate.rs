//! Structural checks for translated documents.
use std::{fmt, fs, path::Path};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{
    contains_chinese, display_name, run_batch, split_front_matter, BatchSummary, DocumentWarning,
    FileOutcome,
};
use crate::lib::errors::{DocumentIssue, TrackerError};

const RULE_WIDTH: usize = 60;

pub type ValidationSummary = BatchSummary<()>;

/// YAML truthiness: null, false, zero, NaN, and empty strings count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .map(|n| n != 0.0 && !n.is_nan())
            .unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}

fn required<'a>(
    metadata: &'a Mapping,
    field: &'static str,
) -> Result<&'a Value, DocumentIssue> {
    metadata
        .get(field)
        .filter(|value| is_truthy(value))
        .ok_or(DocumentIssue::MissingField { field })
}

fn check_front_matter(
    yaml: &str,
    warnings: &mut Vec<DocumentWarning>,
) -> Result<(), DocumentIssue> {
    let parsed: Value = serde_yaml::from_str(yaml).map_err(|err| DocumentIssue::YamlParse {
        message: err.to_string(),
    })?;
    let Value::Mapping(metadata) = parsed else {
        return Err(DocumentIssue::YamlParse {
            message: "front matter is not a mapping".into(),
        });
    };

    let description = required(&metadata, "description")?;
    let globs = required(&metadata, "globs")?;

    let translated = description.as_str().map(contains_chinese).unwrap_or(false);
    if !translated {
        warnings.push(DocumentWarning::DescriptionNotTranslated);
    }
    if !globs.is_string() {
        return Err(DocumentIssue::GlobsNotString);
    }
    Ok(())
}

fn check_body(body: &str, warnings: &mut Vec<DocumentWarning>) -> Result<(), DocumentIssue> {
    if body.trim().is_empty() {
        return Err(DocumentIssue::EmptyBody);
    }
    if !contains_chinese(body) {
        warnings.push(DocumentWarning::BodyNotTranslated);
    }
    if !body.contains('#') {
        warnings.push(DocumentWarning::BodyWithoutHeading);
    }
    Ok(())
}

/// Validate one document. Warnings found before a failing check are kept.
pub fn validate_content(content: &str) -> (Vec<DocumentWarning>, Result<(), DocumentIssue>) {
    let mut warnings = Vec::new();
    let result = split_front_matter(content).and_then(|parts| {
        check_front_matter(parts.yaml, &mut warnings)?;
        check_body(parts.body, &mut warnings)
    });
    (warnings, result)
}

pub fn validate_file(path: &Path) -> FileOutcome<()> {
    let (warnings, result) = match fs::read_to_string(path) {
        Ok(content) => validate_content(&content),
        Err(err) => (Vec::new(), Err(DocumentIssue::from(err))),
    };
    debug!(
        target: "mdc_tracker::mdc",
        path = %path.display(),
        valid = result.is_ok(),
        warnings = warnings.len(),
        "Validated document"
    );
    FileOutcome {
        file: display_name(path),
        warnings,
        result,
    }
}

/// Validate every matching file in `dir`.
pub fn validate_directory(dir: &Path, extension: &str) -> Result<ValidationSummary, TrackerError> {
    run_batch("validate", dir, extension, validate_file)
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let warnings: Vec<_> = self.warnings().collect();

        writeln!(f, "{rule}")?;
        writeln!(f, "Validation results: {}", self.dir.display())?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total files: {}", self.total())?;
        writeln!(f, "Valid files: {}", self.successes().count())?;
        writeln!(f, "Invalid files: {}", self.failure_count())?;
        writeln!(f, "Errors: {}", self.failure_count())?;
        writeln!(f, "Warnings: {}", warnings.len())?;

        if self.failure_count() > 0 {
            writeln!(f, "\nErrors:")?;
            for (file, issue) in self.failures() {
                writeln!(f, "  - {file}: {issue}")?;
            }
        }
        if !warnings.is_empty() {
            writeln!(f, "\nWarnings:")?;
            for (file, warning) in &warnings {
                writeln!(f, "  - {file}: {warning}")?;
            }
        }

        if self.is_success() {
            writeln!(f, "\nAll files passed validation.")
        } else {
            writeln!(f, "\nSome files failed validation.")
        }
    }
}
