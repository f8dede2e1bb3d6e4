//! Unpack flow
//!
//! read document -> scan -> normalize -> write each entry in document order.
//! Fatal conditions (bad output dir, missing input, no matches) stop the run before anything
//! is written; per-file failures are recorded and the loop continues.

use std::path::{Path, PathBuf};

use crate::core::error::UnpackError;
use crate::core::file_reader::read_document;
use crate::core::model::{NormalizedEntry, UnpackReport};
use crate::core::paths::display_path;
use crate::extract::scanner::scan;
use crate::writer::materialize::materialize;
use crate::writer::progress::Progress;

/// Input file used when none is given
pub const DEFAULT_INPUT: &str = "01base.md";

/// Options of an unpack run
#[derive(Debug, Clone)]
pub struct UnpackOptions {
    /// Directory relative target paths are resolved against
    pub out_dir: PathBuf,
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            dry_run: false,
        }
    }
}

/// Materialize every heading + code block pair of `input`
pub fn unpack(
    input: &Path,
    options: &UnpackOptions,
    progress: &mut dyn Progress,
) -> Result<UnpackReport, UnpackError> {
    if options.out_dir.is_file() {
        return Err(UnpackError::OutputNotDirectory(options.out_dir.clone()));
    }

    let document = read_document(input)?;
    let scanned = scan(&document.text);

    for diagnostic in &scanned.diagnostics {
        progress.on_diagnostic(diagnostic);
    }

    if scanned.matches.is_empty() {
        return Err(UnpackError::NoMatchesFound);
    }

    let mut report = UnpackReport::new(
        display_path(&document.path),
        scanned.matches.len(),
        options.dry_run,
    );
    report.warnings = scanned
        .diagnostics
        .iter()
        .filter(|d| d.is_warning())
        .map(|d| d.to_string())
        .collect();

    progress.on_matches(scanned.matches.len());

    for entry in scanned.matches.iter().filter_map(NormalizedEntry::from_match) {
        let outcome = materialize(&options.out_dir, &entry, options.dry_run);
        progress.on_entry(&outcome);
        report.push(outcome);
    }

    progress.on_summary(&report);
    Ok(report)
}
