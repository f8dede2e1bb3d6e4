//! Materialization of normalized entries onto disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::WriteError;
use crate::core::model::{EntryReport, EntryStatus, NormalizedEntry};
use crate::core::paths::resolve_target;
use crate::core::util::hash_bytes;

/// Write one entry below `out_dir`, creating missing parent directories.
///
/// An existing file at the target is overwritten, so with duplicate paths the
/// last entry wins.
pub fn write_entry(out_dir: &Path, entry: &NormalizedEntry) -> Result<PathBuf, WriteError> {
    let target = resolve_target(out_dir, &entry.path)?;

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                dir: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(&target, entry.content.as_bytes()).map_err(|source| WriteError::Write {
        path: target.clone(),
        source,
    })?;

    Ok(target)
}

/// Write (or, in a dry run, only validate) an entry and record the outcome
pub fn materialize(out_dir: &Path, entry: &NormalizedEntry, dry_run: bool) -> EntryReport {
    let outcome = if dry_run {
        resolve_target(out_dir, &entry.path).map(|_| EntryStatus::Planned)
    } else {
        write_entry(out_dir, entry).map(|_| EntryStatus::Created)
    };

    let (status, error) = match outcome {
        Ok(status) => (status, None),
        Err(e) => (EntryStatus::Failed, Some(e.to_string())),
    };

    EntryReport {
        path: entry.display(),
        status,
        line: entry.line,
        language: entry.language.clone(),
        bytes: entry.content.len(),
        hash: hash_bytes(entry.content.as_bytes()),
        error,
    }
}
