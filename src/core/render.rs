//! Renderer module
//!
//! Renders the outcome of a run: a human summary (text), one record per line
//! (jsonl) or a single report object (json).

use colored::Colorize;
use serde::Serialize;

use crate::core::error::UnpackError;
use crate::core::model::{EntryReport, UnpackReport};
use crate::core::util::plural;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl OutputFormat {
    /// Whether progress lines should be printed while the run proceeds
    pub fn is_text(self) -> bool {
        self == OutputFormat::Text
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Counters shared by the jsonl summary record and the json report
#[derive(Debug, Serialize)]
struct Summary<'a> {
    input: &'a str,
    matches: usize,
    created: usize,
    failed: usize,
    dry_run: bool,
}

impl<'a> Summary<'a> {
    fn of(report: &'a UnpackReport) -> Self {
        Self {
            input: &report.input,
            matches: report.matches,
            created: report.created_count(),
            failed: report.failed_count(),
            dry_run: report.dry_run,
        }
    }
}

/// One jsonl line
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Record<'a> {
    Warning { message: &'a str },
    Entry(&'a EntryReport),
    Summary(Summary<'a>),
    Error { code: &'a str, message: String },
}

/// The json document
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: Summary<'a>,
    entries: &'a [EntryReport],
    #[serde(skip_serializing_if = "no_warnings")]
    warnings: &'a [String],
}

fn no_warnings(warnings: &&[String]) -> bool {
    warnings.is_empty()
}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    error: &'a str,
    message: String,
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a finished run
    pub fn render(&self, report: &UnpackReport) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.to_json(&JsonReport {
                summary: Summary::of(report),
                entries: &report.entries,
                warnings: &report.warnings,
            }),
        }
    }

    /// Render a fatal error
    pub fn render_error(&self, error: &UnpackError) -> String {
        match self.config.format {
            OutputFormat::Text => {
                let mut out = format!("{} {}", "Error:".red().bold(), error);
                match error {
                    UnpackError::InputNotFound(_) => out.push_str(
                        "\nPlease save the AI's output into a file with that name in the same directory.",
                    ),
                    UnpackError::NoMatchesFound => out.push_str(
                        ". Please check the format of the input file.\n\
Ensure headers like '#### path/to/file.js' are followed by a ```code block```.",
                    ),
                    _ => {}
                }
                out
            }
            OutputFormat::Jsonl => self.to_json(&Record::Error {
                code: error.code(),
                message: error.to_string(),
            }),
            OutputFormat::Json => self.to_json(&JsonError {
                error: error.code(),
                message: error.to_string(),
            }),
        }
    }

    fn render_text(&self, report: &UnpackReport) -> String {
        let failed = report.failed_count();
        let failed_note = if failed > 0 {
            format!(" ({} failed)", failed).red().to_string()
        } else {
            String::new()
        };

        if report.dry_run {
            format!(
                "\nDry run complete. {} would be created{}.",
                plural(report.planned_count(), "file"),
                failed_note
            )
        } else {
            format!(
                "\n{} Project generation complete. {} created successfully{}.",
                "✅".green(),
                plural(report.created_count(), "file"),
                failed_note
            )
        }
    }

    /// Render as JSON Lines: warnings, entries in run order, then the summary
    fn render_jsonl(&self, report: &UnpackReport) -> String {
        let records = report
            .warnings
            .iter()
            .map(|message| Record::Warning {
                message: message.as_str(),
            })
            .chain(report.entries.iter().map(Record::Entry))
            .chain(std::iter::once(Record::Summary(Summary::of(report))));

        records
            .map(|record| self.to_json(&record))
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    fn to_json<T: Serialize>(&self, value: &T) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::EntryStatus;
    use serde_json::Value;
    use std::path::PathBuf;

    fn sample_report() -> UnpackReport {
        let mut report = UnpackReport::new("01base.md", 2, false);
        report.push(EntryReport {
            path: "main.py".to_string(),
            status: EntryStatus::Created,
            line: 1,
            language: Some("python".to_string()),
            bytes: 11,
            hash: "00000000deadbeef".to_string(),
            error: None,
        });
        report.push(EntryReport {
            path: "../x.txt".to_string(),
            status: EntryStatus::Failed,
            line: 5,
            language: None,
            bytes: 1,
            hash: "0000000000000001".to_string(),
            error: Some("refusing to write outside the output directory: ../x.txt".to_string()),
        });
        report
    }

    fn renderer(format: OutputFormat) -> Renderer {
        Renderer::with_config(RenderConfig::with_pretty(format, false))
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSONL".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_jsonl() {
        let out = renderer(OutputFormat::Jsonl).render(&sample_report());
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["kind"], "entry");
        assert_eq!(lines[0]["path"], "main.py");
        assert_eq!(lines[0]["status"], "created");
        assert_eq!(lines[0]["language"], "python");
        assert_eq!(lines[1]["status"], "failed");
        assert!(lines[1].get("language").is_none());
        assert_eq!(lines[2]["kind"], "summary");
        assert_eq!(lines[2]["created"], 1);
        assert_eq!(lines[2]["failed"], 1);
        assert_eq!(lines[2]["matches"], 2);
    }

    #[test]
    fn test_render_json() {
        let out = renderer(OutputFormat::Json).render(&sample_report());
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["input"], "01base.md");
        assert_eq!(value["created"], 1);
        assert_eq!(value["entries"].as_array().unwrap().len(), 2);
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn test_render_text_summary() {
        colored::control::set_override(false);
        let out = renderer(OutputFormat::Text).render(&sample_report());
        assert!(out.contains("1 file created successfully"));
        assert!(out.contains("(1 failed)"));
    }

    #[test]
    fn test_render_error_json() {
        let err = UnpackError::InputNotFound(PathBuf::from("missing.md"));
        let out = renderer(OutputFormat::Json).render_error(&err);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "INPUT_NOT_FOUND");
        assert!(value["message"].as_str().unwrap().contains("missing.md"));
    }

    #[test]
    fn test_render_error_text_gives_guidance() {
        colored::control::set_override(false);
        let out = renderer(OutputFormat::Text).render_error(&UnpackError::NoMatchesFound);
        assert!(out.contains("No files and code blocks were found"));
        assert!(out.contains("followed by a ```code block```"));
    }
}
