//! Path normalization utilities
//!
//! Heading paths may use '/' or '\' regardless of the host. They are converted
//! to the host separator before touching the filesystem, and reported with '/'.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use crate::core::error::WriteError;

/// Convert every '/' and '\' to the host path separator
pub fn to_host_separators(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// A relative path that stays below its base: no root, no drive prefix, no `..`
pub fn is_contained(path: &Path) -> bool {
    let mut has_name = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    has_name
}

/// Resolve an entry path against the output directory
pub fn resolve_target(out_dir: &Path, relative: &Path) -> Result<PathBuf, WriteError> {
    if !is_contained(relative) {
        return Err(WriteError::UnsafePath(display_path(relative)));
    }
    if out_dir.as_os_str().is_empty() || out_dir == Path::new(".") {
        Ok(relative.to_path_buf())
    } else {
        Ok(out_dir.join(relative))
    }
}
