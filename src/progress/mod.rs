//! Translation progress tracking: scan, classify, diff, and report.
use std::collections::HashSet;

use tracing::{info, warn};

use crate::config::TrackerConfig;
use crate::lib::{
    errors::{DirectoryRole, TrackerError},
    fs::DocumentEntry,
};

pub mod classify;
pub mod prioritize;
pub mod report;
pub mod scan;
pub mod stats;

pub use classify::{Category, CategoryAssignment, KeywordTable, Taxonomy};
pub use prioritize::{missing_ids, orphaned_ids, PriorityBuckets, PriorityLists};
pub use report::{CategoryBreakdown, ConsoleReport, ProgressReport};
pub use stats::{Percentage, ProgressStats};

/// File name stem shared by a source document and its translation.
pub type DocumentId = String;

/// Scan both corpus directories and compute the report. Nothing is written.
pub fn collect(config: &TrackerConfig) -> Result<ProgressReport, TrackerError> {
    let paths = &config.paths;
    let source = scan::scan(&paths.source_dir, &paths.extension, DirectoryRole::Source)?;
    let translated = scan::scan(
        &paths.translated_dir,
        &paths.extension,
        DirectoryRole::Translated,
    )?;

    Ok(build_report(
        &source,
        &translated,
        &config.taxonomy,
        &config.priorities,
        config.report.recent_limit,
    ))
}

/// Pure computation of a report from two scanned directories.
pub fn build_report(
    source: &[DocumentEntry],
    translated: &[DocumentEntry],
    taxonomy: &Taxonomy,
    priorities: &PriorityLists,
    recent_limit: usize,
) -> ProgressReport {
    let source_ids = scan::ids(source);
    let translated_ids = scan::ids(translated);
    let source_set: HashSet<&str> = source_ids.iter().map(String::as_str).collect();
    let translated_set: HashSet<&str> = translated_ids.iter().map(String::as_str).collect();

    let assignment = taxonomy.assign(&source_ids);
    let categories = assignment
        .iter()
        .map(|(category, files)| CategoryBreakdown {
            category,
            total: files.len(),
            translated: files
                .iter()
                .filter(|id| translated_set.contains(id.as_str()))
                .count(),
            files: files.to_vec(),
        })
        .collect();

    let missing = missing_ids(&source_ids, &translated_set);
    let prioritized = priorities.bucket(&missing);
    let orphaned = orphaned_ids(&translated_ids, &source_set);
    if !orphaned.is_empty() {
        warn!(
            target: "mdc_tracker::scan",
            count = orphaned.len(),
            ids = ?orphaned,
            "Translated documents have no source counterpart"
        );
    }

    let stats = ProgressStats::compute(source_ids.len(), translated_ids.len());
    info!(
        target: "mdc_tracker::report",
        total = stats.total,
        translated = stats.translated,
        remaining = stats.remaining,
        percentage = %stats.percentage,
        taxonomy_version = taxonomy.version,
        "Computed translation progress"
    );

    ProgressReport {
        stats,
        categories,
        recent: scan::most_recent(translated, recent_limit),
        translated: translated_ids,
        missing,
        prioritized,
        orphaned,
    }
}
