//! Directory listing and atomic write helpers for document corpora.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    time::SystemTime,
};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::lib::errors::{DirectoryRole, TrackerError};

/// One document found in a corpus directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// File name without the document extension.
    pub id: String,
    pub path: PathBuf,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
}

/// List every regular file in `dir` ending in `.<extension>`, sorted by id.
///
/// A missing directory is reported as `DirectoryNotFound` tagged with `role`.
/// Subdirectories are not descended into.
pub fn list_documents(
    dir: &Path,
    extension: &str,
    role: DirectoryRole,
) -> Result<Vec<DocumentEntry>, TrackerError> {
    if !dir.is_dir() {
        return Err(TrackerError::DirectoryNotFound {
            role,
            path: dir.to_path_buf(),
        });
    }

    let read_err = |source| TrackerError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{extension}");

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            warn!(
                target: "mdc_tracker::scan",
                path = %path.display(),
                "Skipping file with a non UTF-8 name"
            );
            continue;
        };
        let Some(id) = name.strip_suffix(&suffix) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        let modified = entry.metadata().and_then(|m| m.modified()).ok();
        out.push(DocumentEntry {
            id: id.to_string(),
            path,
            modified,
        });
    }

    out.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(out)
}

/// Write `contents` to `destination` through a temp file in the same directory.
///
/// The destination is either fully replaced or left untouched.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> Result<(), io::Error> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut file = NamedTempFile::new_in(&parent)?;
    file.write_all(contents)?;
    file.flush()?;
    if let Some(permissions) = target_permissions(destination)? {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(destination).map_err(|err| err.error)?;
    Ok(())
}

/// Permissions the replaced file should carry: the existing file's, or 0644 for a new one.
fn target_permissions(destination: &Path) -> Result<Option<fs::Permissions>, io::Error> {
    match fs::metadata(destination) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
