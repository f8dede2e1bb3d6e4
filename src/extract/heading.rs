//! Heading recognition
//!
//! A heading names a file when its first token, once emphasis/inline-code
//! wrappers are removed, is a bare path:
//!
//! ```text
//! #### src/main.py            -> src/main.py
//! ### **config/app.yml** (new) -> config/app.yml
//! ## `Dockerfile`              -> Dockerfile
//! ### Backend (Java Spring)    -> rejected
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Markdown heading: one or more '#', whitespace, then the heading text
pub static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+[ \t]+(.*)$").expect("Invalid HEADING_RE regex"));

/// Leading run of path characters plus wrapper characters
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9/\\._*`\-]+").expect("Invalid TOKEN_RE regex"));

/// Extensionless file names that are still unambiguously files
const KNOWN_FILENAMES: &[&str] = &[
    "Dockerfile",
    "Containerfile",
    "Makefile",
    "GNUmakefile",
    "Justfile",
    "Procfile",
    "Gemfile",
    "Rakefile",
    "Brewfile",
    "Pipfile",
    "Vagrantfile",
    "Jenkinsfile",
    "Caddyfile",
    "LICENSE",
    "CODEOWNERS",
    "gradlew",
    "mvnw",
];

/// Conventional upper-case file names; matched case-sensitively so prose
/// headings such as `## Version history` stay rejected
const UPPERCASE_FILENAMES: &[&str] = &[
    "README",
    "CHANGELOG",
    "NOTICE",
    "VERSION",
    "AUTHORS",
    "CONTRIBUTING",
];

/// Classification of a heading line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    /// The heading names a file
    Path(String),
    /// A heading, but its text is prose rather than a path
    Rejected(String),
}

/// Classify a line. Returns `None` when the line is not a heading at all.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = HEADING_RE.captures(line)?;
    let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");

    let path = TOKEN_RE
        .find(text)
        .and_then(|m| unwrap_token(m.as_str()))
        .filter(|p| looks_like_path(p));

    Some(match path {
        Some(p) => Heading::Path(p.to_string()),
        None => Heading::Rejected(text.trim().to_string()),
    })
}

fn is_wrapper(c: char) -> bool {
    c == '*' || c == '`'
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '\\' | '.' | '_' | '-')
}

/// Strip `**`, `*`, `` ` `` and paired `_` wrappers, then trailing sentence dots
fn unwrap_token(token: &str) -> Option<&str> {
    let mut t = token;
    loop {
        let before = t.len();
        t = t.trim_start_matches(is_wrapper).trim_end_matches(is_wrapper);
        // '_' is a legal path character; only strip it as a matching pair
        if t.len() > 2 && t.starts_with('_') && t.ends_with('_') {
            t = &t[1..t.len() - 1];
        }
        if t.len() == before {
            break;
        }
    }

    let t = t.trim_end_matches('.');
    if t.is_empty() || !t.chars().all(is_path_char) {
        return None;
    }
    Some(t)
}

/// Decide whether a token is a file path rather than a prose word
pub fn looks_like_path(token: &str) -> bool {
    if !token.chars().any(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    let name = match token.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() => name,
        _ => return false,
    };

    if token.contains(['/', '\\']) {
        return true;
    }

    if let Some((_, ext)) = name.rsplit_once('.') {
        if ext.chars().any(|c| c.is_ascii_alphabetic()) {
            return true;
        }
    }

    UPPERCASE_FILENAMES.contains(&name)
        || KNOWN_FILENAMES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name))
}
