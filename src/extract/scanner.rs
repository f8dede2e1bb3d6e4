//! Line scanner
//!
//! State machine over the document lines:
//!
//! ```text
//! SeekHeader --path heading--> SeekFence --open fence--> InCode --close fence--> emit, SeekHeader
//!      \--open fence (orphan)--> InCode (skipped) --close fence--> SeekHeader
//! ```
//!
//! The first opening fence after a path heading belongs to that heading; any
//! headings in between are ignored.

use std::fmt;

use crate::core::model::Match;
use crate::extract::fence::{parse_open, FenceOpen};
use crate::extract::heading::{parse_heading, Heading};

/// Something the scanner skipped, kept for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Heading whose text is not a file path
    RejectedHeading { line: u32, text: String },
    /// Path heading seen while an earlier one was still waiting for its block
    IgnoredHeading {
        line: u32,
        path: String,
        pending: String,
    },
    /// Path heading with no code block after it
    MissingBlock { line: u32, path: String },
    /// Code block still open at end of document
    Unterminated { line: u32, path: Option<String> },
}

impl Diagnostic {
    /// Warnings are always reported; the rest only in verbose mode
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Diagnostic::Unterminated { path: Some(_), .. } | Diagnostic::MissingBlock { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RejectedHeading { line, text } => {
                write!(f, "line {}: heading '{}' is not a file path", line, text)
            }
            Diagnostic::IgnoredHeading {
                line,
                path,
                pending,
            } => write!(
                f,
                "line {}: heading '{}' ignored, '{}' is still waiting for its code block",
                line, path, pending
            ),
            Diagnostic::MissingBlock { line, path } => {
                write!(f, "line {}: '{}' is not followed by a code block", line, path)
            }
            Diagnostic::Unterminated {
                line,
                path: Some(path),
            } => write!(
                f,
                "line {}: code block for '{}' is never closed, skipped",
                line, path
            ),
            Diagnostic::Unterminated { line, path: None } => {
                write!(f, "line {}: code block is never closed", line)
            }
        }
    }
}

/// Matches in document order, plus what was skipped
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub matches: Vec<Match>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Path heading waiting for (or owning) a code block
#[derive(Debug)]
struct Pending {
    path: String,
    line: u32,
}

#[derive(Debug)]
enum State<'a> {
    SeekHeader,
    SeekFence(Pending),
    InCode {
        owner: Option<Pending>,
        fence: FenceOpen,
        opened_at: u32,
        body: Vec<&'a str>,
    },
}

struct Scanner<'a> {
    state: State<'a>,
    result: ScanResult,
}

impl<'a> Scanner<'a> {
    fn new() -> Self {
        Self {
            state: State::SeekHeader,
            result: ScanResult::default(),
        }
    }

    fn feed(&mut self, line_no: u32, line: &'a str) {
        let state = std::mem::replace(&mut self.state, State::SeekHeader);
        self.state = match state {
            State::SeekHeader => self.seek_header(line_no, line),
            State::SeekFence(pending) => self.seek_fence(pending, line_no, line),
            State::InCode {
                owner,
                fence,
                opened_at,
                mut body,
            } => {
                if fence.is_closed_by(line) {
                    if let Some(owner) = owner {
                        self.result.matches.push(Match {
                            raw_path: owner.path,
                            raw_content: body.join("\n"),
                            line: owner.line,
                            language: fence.language,
                        });
                    }
                    State::SeekHeader
                } else {
                    body.push(line);
                    State::InCode {
                        owner,
                        fence,
                        opened_at,
                        body,
                    }
                }
            }
        };
    }

    fn seek_header(&mut self, line_no: u32, line: &'a str) -> State<'a> {
        if let Some(fence) = parse_open(line) {
            return State::InCode {
                owner: None,
                fence,
                opened_at: line_no,
                body: Vec::new(),
            };
        }

        match parse_heading(line) {
            Some(Heading::Path(path)) => State::SeekFence(Pending {
                path,
                line: line_no,
            }),
            Some(Heading::Rejected(text)) => {
                self.result
                    .diagnostics
                    .push(Diagnostic::RejectedHeading { line: line_no, text });
                State::SeekHeader
            }
            None => State::SeekHeader,
        }
    }

    fn seek_fence(&mut self, pending: Pending, line_no: u32, line: &'a str) -> State<'a> {
        if let Some(fence) = parse_open(line) {
            return State::InCode {
                owner: Some(pending),
                fence,
                opened_at: line_no,
                body: Vec::new(),
            };
        }

        match parse_heading(line) {
            Some(Heading::Path(path)) => {
                self.result.diagnostics.push(Diagnostic::IgnoredHeading {
                    line: line_no,
                    path,
                    pending: pending.path.clone(),
                });
            }
            Some(Heading::Rejected(text)) => {
                self.result
                    .diagnostics
                    .push(Diagnostic::RejectedHeading { line: line_no, text });
            }
            None => {}
        }
        State::SeekFence(pending)
    }

    fn finish(mut self) -> ScanResult {
        match self.state {
            State::SeekHeader => {}
            State::SeekFence(pending) => {
                self.result.diagnostics.push(Diagnostic::MissingBlock {
                    line: pending.line,
                    path: pending.path,
                });
            }
            State::InCode {
                owner, opened_at, ..
            } => {
                self.result.diagnostics.push(Diagnostic::Unterminated {
                    line: opened_at,
                    path: owner.map(|o| o.path),
                });
            }
        }
        self.result
    }
}

/// Scan a document for heading + code block pairs, in order of appearance
pub fn scan(text: &str) -> ScanResult {
    let mut scanner = Scanner::new();
    for (idx, line) in text.lines().enumerate() {
        scanner.feed(u32::try_from(idx + 1).unwrap_or(u32::MAX), line);
    }
    scanner.finish()
}
