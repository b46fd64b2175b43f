//! Directory scanning for the source and translated corpora.
use std::path::Path;

use tracing::{error, info};

use super::DocumentId;
use crate::lib::{
    errors::{DirectoryRole, TrackerError},
    fs::{list_documents, DocumentEntry},
};

/// Read one corpus directory and log how many documents it holds.
pub fn scan(
    dir: &Path,
    extension: &str,
    role: DirectoryRole,
) -> Result<Vec<DocumentEntry>, TrackerError> {
    let entries = list_documents(dir, extension, role).map_err(|err| {
        error!(
            target: "mdc_tracker::scan",
            role = %role,
            dir = %dir.display(),
            reason = %err,
            "Failed to scan document directory"
        );
        err
    })?;

    info!(
        target: "mdc_tracker::scan",
        role = %role,
        dir = %dir.display(),
        count = entries.len(),
        "Scanned document directory"
    );
    Ok(entries)
}

pub fn ids(entries: &[DocumentEntry]) -> Vec<DocumentId> {
    entries.iter().map(|entry| entry.id.clone()).collect()
}

/// Up to `limit` ids with the newest modification time first; ties by id.
pub fn most_recent(entries: &[DocumentEntry], limit: usize) -> Vec<DocumentId> {
    let mut sorted: Vec<&DocumentEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.id.cmp(&b.id)));
    sorted
        .into_iter()
        .take(limit)
        .map(|entry| entry.id.clone())
        .collect()
}
