//! Input acquisition
//!
//! Reads the whole input document into memory as UTF-8. Fails before any
//! side effect when the file is missing, unreadable or not UTF-8.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::UnpackError;
use crate::core::model::Document;

const UTF8_BOM: char = '\u{feff}';

/// Read the input document
pub fn read_document(path: &Path) -> Result<Document, UnpackError> {
    if path.is_dir() {
        return Err(UnpackError::InputUnreadable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        });
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => UnpackError::InputNotFound(path.to_path_buf()),
        _ => UnpackError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text =
        String::from_utf8(bytes).map_err(|_| UnpackError::InputNotUtf8(path.to_path_buf()))?;

    let text = match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    };

    Ok(Document::new(path, text))
}
