//! Console and JSON renderings of a progress run.

use std::{fmt, path::Path};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{ser::SerializeMap, Serialize, Serializer};
use tracing::{error, info};

use super::{
    classify::Category,
    prioritize::PriorityBuckets,
    stats::{Percentage, ProgressStats},
    DocumentId,
};
use crate::lib::{errors::TrackerError, fs::write_atomic};

const RULE_WIDTH: usize = 80;

/// Translation coverage of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    #[serde(skip)]
    pub category: Category,
    pub total: usize,
    pub translated: usize,
    pub files: Vec<DocumentId>,
}

impl CategoryBreakdown {
    pub fn percentage(&self) -> Percentage {
        Percentage::of_or_zero(self.translated, self.total)
    }
}

/// Everything computed by one progress run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub stats: ProgressStats,
    /// One entry per category, in declared order.
    pub categories: Vec<CategoryBreakdown>,
    pub translated: Vec<DocumentId>,
    pub missing: Vec<DocumentId>,
    pub prioritized: PriorityBuckets,
    /// Translated ids with no source counterpart.
    pub orphaned: Vec<DocumentId>,
    /// Most recently modified translations, newest first.
    pub recent: Vec<DocumentId>,
}

struct Categories<'a>(&'a [CategoryBreakdown]);

impl Serialize for Categories<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for breakdown in self.0 {
            map.serialize_entry(breakdown.category.as_str(), breakdown)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct StructuredReport<'a> {
    timestamp: String,
    stats: &'a ProgressStats,
    categories: Categories<'a>,
    translated: &'a [DocumentId],
    missing: &'a [DocumentId],
    prioritized: &'a PriorityBuckets,
    orphaned: &'a [DocumentId],
}

impl ProgressReport {
    /// Pretty JSON document stamped with `timestamp`.
    pub fn to_json(&self, timestamp: DateTime<Utc>) -> Result<String, TrackerError> {
        let structured = StructuredReport {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            stats: &self.stats,
            categories: Categories(&self.categories),
            translated: &self.translated,
            missing: &self.missing,
            prioritized: &self.prioritized,
            orphaned: &self.orphaned,
        };
        let mut json = serde_json::to_string_pretty(&structured)
            .map_err(|source| TrackerError::Serialize { source })?;
        json.push('\n');
        Ok(json)
    }

    /// Serialize and atomically write the JSON report to `path`.
    pub fn write_json(&self, path: &Path, timestamp: DateTime<Utc>) -> Result<(), TrackerError> {
        let json = self.to_json(timestamp)?;
        write_atomic(path, json.as_bytes()).map_err(|source| {
            error!(
                target: "mdc_tracker::report",
                path = %path.display(),
                reason = %source,
                "Failed to write progress report"
            );
            TrackerError::ReportWriteFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(
            target: "mdc_tracker::report",
            path = %path.display(),
            bytes = json.len(),
            "Wrote progress report"
        );
        Ok(())
    }

    /// Human-readable rendering for the terminal.
    pub fn console<'a>(&'a self, extension: &'a str, priority2_limit: usize) -> ConsoleReport<'a> {
        ConsoleReport {
            report: self,
            extension,
            priority2_limit,
        }
    }
}

/// `Display` adapter for the console form.
pub struct ConsoleReport<'a> {
    report: &'a ProgressReport,
    extension: &'a str,
    priority2_limit: usize,
}

impl ConsoleReport<'_> {
    fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let stats = &report.stats;
        let ext = self.extension;

        Self::rule(f)?;
        writeln!(f, "Translation progress report")?;
        Self::rule(f)?;

        writeln!(f, "\nOverall:")?;
        writeln!(f, "   Total files: {}", stats.total)?;
        writeln!(f, "   Translated: {} ({})", stats.translated, stats.percentage)?;
        writeln!(f, "   Remaining: {}", stats.remaining)?;

        writeln!(f, "\nBy category:")?;
        for breakdown in &report.categories {
            writeln!(
                f,
                "   {}: {}/{} ({})",
                breakdown.category.label(),
                breakdown.translated,
                breakdown.total,
                breakdown.percentage()
            )?;
        }

        writeln!(f, "\nSuggested translation order:")?;
        let prioritized = &report.prioritized;
        if !prioritized.priority1.is_empty() {
            writeln!(f, "\n   Priority 1 (core technologies):")?;
            for id in &prioritized.priority1 {
                writeln!(f, "      - {id}.{ext}")?;
            }
        }
        if !prioritized.priority2.is_empty() {
            writeln!(f, "\n   Priority 2 (extended technologies):")?;
            for id in prioritized.priority2.iter().take(self.priority2_limit) {
                writeln!(f, "      - {id}.{ext}")?;
            }
            let hidden = prioritized.priority2.len().saturating_sub(self.priority2_limit);
            if hidden > 0 {
                writeln!(f, "      ... and {hidden} more files")?;
            }
        }

        writeln!(f, "\nRecently translated:")?;
        for id in &report.recent {
            writeln!(f, "   - {id}.{ext}")?;
        }

        if !report.orphaned.is_empty() {
            writeln!(f, "\nTranslated without a source document:")?;
            for id in &report.orphaned {
                writeln!(f, "   - {id}.{ext}")?;
            }
        }

        writeln!(f)?;
        Self::rule(f)?;
        writeln!(f, "Current progress: {} complete", stats.percentage)?;
        Self::rule(f)
    }
}
