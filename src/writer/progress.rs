//! Progress reporting
//!
//! The unpack flow reports through this trait so that it can run without
//! console side effects (JSON output, tests).

use colored::Colorize;

use crate::core::model::{EntryReport, EntryStatus, UnpackReport};
use crate::core::util::plural;
use crate::extract::scanner::Diagnostic;

/// Observer of an unpack run. Every hook defaults to doing nothing.
pub trait Progress {
    /// Total matches found, before anything is written
    fn on_matches(&mut self, _count: usize) {}

    /// One entry was processed
    fn on_entry(&mut self, _entry: &EntryReport) {}

    /// The scanner skipped something
    fn on_diagnostic(&mut self, _diagnostic: &Diagnostic) {}

    /// The run finished
    fn on_summary(&mut self, _report: &UnpackReport) {}
}

/// Discards all progress
#[derive(Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {}

/// Human-readable progress lines; the final summary is left to the renderer
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    pub quiet: bool,
    pub verbose: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

impl Progress for ConsoleProgress {
    fn on_matches(&mut self, count: usize) {
        if self.quiet {
            return;
        }
        println!(
            "Found {} to create. Starting project generation...\n",
            plural(count, "file")
        );
    }

    fn on_entry(&mut self, entry: &EntryReport) {
        match entry.status {
            EntryStatus::Created if !self.quiet => {
                println!("{} {}", "-> Created file:".green(), entry.path);
            }
            EntryStatus::Planned if !self.quiet => {
                println!("{} {}", "-> Would create:".cyan(), entry.path);
            }
            EntryStatus::Failed => {
                eprintln!(
                    "   {} Failed to create file {}: {}",
                    "[ERROR]".red().bold(),
                    entry.path,
                    entry.error.as_deref().unwrap_or("unknown error")
                );
            }
            _ => {}
        }
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.is_warning() {
            eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
        } else if self.verbose {
            eprintln!("{} {}", "skipped:".dimmed(), diagnostic);
        }
    }
}
