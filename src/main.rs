//! mdunpack - Materialize a markdown project description as files on disk
//!
//! mdunpack provides:
//! - Heading + fenced code block extraction with prose-heading rejection
//! - Path normalization and containment below an output directory
//! - Per-file error reporting that never aborts the run
//! - Human (text) or machine-readable (jsonl/json) reports

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod core;
mod extract;
mod flows;
mod writer;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
