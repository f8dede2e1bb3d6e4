//! Data model of an unpack run
//!
//! Document -> Match (raw, in document order) -> NormalizedEntry -> EntryReport.
//! Nothing here outlives a single run.

use serde::Serialize;
use std::path::PathBuf;

use crate::core::paths::{display_path, to_host_separators};

/// The full text of the input file, immutable once read
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// A raw (path, content) pair extracted from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Path token as written in the heading
    pub raw_path: String,

    /// Lines between the fences, joined with '\n'
    pub raw_content: String,

    /// 1-indexed line of the heading
    pub line: u32,

    /// Fence info string (e.g. "python"), if any
    pub language: Option<String>,
}

/// A match ready to be written: trimmed path with host separators, trimmed content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub path: PathBuf,
    pub content: String,
    pub line: u32,
    pub language: Option<String>,
}

impl NormalizedEntry {
    /// Normalize a raw match. Returns `None` when the path is empty after trimming.
    pub fn from_match(m: &Match) -> Option<Self> {
        let trimmed = m.raw_path.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            path: PathBuf::from(to_host_separators(trimmed)),
            content: m.raw_content.trim().to_string(),
            line: m.line,
            language: m.language.clone(),
        })
    }

    /// Path with '/' separators, for reporting
    pub fn display(&self) -> String {
        display_path(&self.path)
    }
}

/// Outcome of a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Created,
    Failed,
    /// Dry run: would have been written
    Planned,
}

/// Per-entry record of the run report
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub path: String,
    pub status: EntryStatus,
    pub line: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Length in bytes of the content that was (or would be) written
    pub bytes: usize,

    /// xxh3 of the content
    pub hash: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of an unpack run
#[derive(Debug, Clone, Default)]
pub struct UnpackReport {
    pub input: String,
    /// Raw matches found, before empty paths are discarded
    pub matches: usize,
    pub dry_run: bool,
    pub entries: Vec<EntryReport>,
    pub warnings: Vec<String>,
}

impl UnpackReport {
    pub fn new(input: impl Into<String>, matches: usize, dry_run: bool) -> Self {
        Self {
            input: input.into(),
            matches,
            dry_run,
            entries: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: EntryReport) {
        self.entries.push(entry);
    }

    /// Number of files successfully written
    pub fn created_count(&self) -> usize {
        self.count(EntryStatus::Created)
    }

    pub fn failed_count(&self) -> usize {
        self.count(EntryStatus::Failed)
    }

    pub fn planned_count(&self) -> usize {
        self.count(EntryStatus::Planned)
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    fn count(&self, status: EntryStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(path: &str, content: &str) -> Match {
        Match {
            raw_path: path.to_string(),
            raw_content: content.to_string(),
            line: 1,
            language: None,
        }
    }

    #[test]
    fn test_normalize_trims_path_and_content() {
        let entry =
            NormalizedEntry::from_match(&raw("  src/main.rs ", "\n\nfn main() {}\n  ")).unwrap();
        assert_eq!(entry.display(), "src/main.rs");
        assert_eq!(entry.content, "fn main() {}");
    }

    #[test]
    fn test_normalize_discards_empty_path() {
        assert!(NormalizedEntry::from_match(&raw("   ", "x")).is_none());
    }

    #[test]
    fn test_normalize_backslash_path() {
        let entry = NormalizedEntry::from_match(&raw(r"src\utils\helper.js", "x")).unwrap();
        let parts: Vec<_> = entry
            .path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        assert_eq!(parts, vec!["src", "utils", "helper.js"]);
    }

    #[test]
    fn test_report_counts() {
        let mut report = UnpackReport::new("doc.md", 3, false);
        for (path, status) in [
            ("a.rs", EntryStatus::Created),
            ("b.rs", EntryStatus::Failed),
            ("c.rs", EntryStatus::Created),
        ] {
            report.push(EntryReport {
                path: path.to_string(),
                status,
                line: 1,
                language: None,
                bytes: 0,
                hash: String::new(),
                error: None,
            });
        }
        assert_eq!(report.created_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.planned_count(), 0);
        assert!(report.has_failures());
    }

    #[test]
    fn test_entry_status_serializes_lowercase() {
        let json = serde_json::to_string(&EntryStatus::Planned).unwrap();
        assert_eq!(json, "\"planned\"");
    }
}
