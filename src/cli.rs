//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::flows::unpack::{unpack, UnpackOptions, DEFAULT_INPUT};
use crate::writer::progress::{ConsoleProgress, Progress, SilentProgress};

/// Exit status when `--strict` is set and some files could not be written
const EXIT_FILE_FAILURES: u8 = 1;

/// Exit status for fatal conditions (missing input, no matches, bad output dir)
const EXIT_FATAL: u8 = 2;

/// mdunpack - turn a markdown project description into files on disk.
#[derive(Parser, Debug)]
#[command(name = "mdunpack")]
#[command(
    author,
    version,
    about,
    long_about = r#"mdunpack reads a markdown document (typically AI-generated output describing
a multi-file project) and writes every code block to the file named by the
heading above it.

A file entry looks like:

    #### src/utils/helper.js
    Optional description...
    ```javascript
    export const add = (a, b) => a + b;
    ```

Headings may wrap the path in ** / _ / ` markers. Headings whose first word
is not a file path (e.g. `### Backend (Java Spring Boot)`) are ignored.

Examples:
    mdunpack
    mdunpack answer.md --out-dir my-project
    mdunpack answer.md --dry-run
    mdunpack answer.md --format jsonl
"#
)]
pub struct Cli {
    /// Markdown document to unpack.
    #[arg(
        value_name = "INPUT",
        default_value = DEFAULT_INPUT,
        long_help = "Markdown document to unpack (defaults to 01base.md in the current directory).\n\n\
The whole file is read as UTF-8 before anything is written."
    )]
    pub input: PathBuf,

    /// Directory that file paths are resolved against.
    #[arg(
        short,
        long,
        default_value = ".",
        value_name = "DIR",
        long_help = "Directory that relative file paths are resolved against (defaults to the\n\
current directory). Missing directories are created.\n\n\
Absolute paths and paths containing '..' are refused."
    )]
    pub out_dir: PathBuf,

    /// Show what would be written without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): progress lines and a summary\n\
- jsonl: one JSON record per file, then a summary record\n\
- json: a single JSON report"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (only errors, warnings and the summary).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (also explain skipped headings).
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit with status 1 when any file could not be written.
    #[arg(long)]
    pub strict: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));

    let options = UnpackOptions {
        out_dir: cli.out_dir,
        dry_run: cli.dry_run,
    };

    let mut console = ConsoleProgress::new(cli.quiet, cli.verbose);
    let mut silent = SilentProgress;
    let progress: &mut dyn Progress = if format.is_text() {
        &mut console
    } else {
        &mut silent
    };

    match unpack(&cli.input, &options, progress) {
        Ok(report) => {
            println!("{}", renderer.render(&report));
            if cli.strict && report.has_failures() {
                Ok(ExitCode::from(EXIT_FILE_FAILURES))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Err(err) => {
            if format.is_text() {
                eprintln!("{}", renderer.render_error(&err));
            } else {
                println!("{}", renderer.render_error(&err));
            }
            Ok(ExitCode::from(EXIT_FATAL))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mdunpack"]);
        assert_eq!(cli.input, PathBuf::from("01base.md"));
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert_eq!(cli.format, "text");
        assert!(!cli.dry_run);
        assert!(!cli.strict);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "mdunpack",
            "answer.md",
            "-o",
            "out",
            "--dry-run",
            "--format",
            "jsonl",
            "--strict",
        ]);
        assert_eq!(cli.input, PathBuf::from("answer.md"));
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert!(cli.dry_run);
        assert_eq!(cli.format, "jsonl");
        assert!(cli.strict);
    }
}
