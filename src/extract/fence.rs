//! Fenced code block delimiters
//!
//! An opening fence is a run of at least three backticks followed by an
//! optional info string; the closing fence must be at least as long as the
//! opening one, so a ```` block can carry ``` lines as content.

use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(`{3,})([^`]*)$").expect("Invalid OPEN_RE regex"));

static CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(`{3,})[ \t]*$").expect("Invalid CLOSE_RE regex"));

/// An opening fence line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    /// Number of backticks in the fence
    pub ticks: usize,
    /// First word of the info string, e.g. "python"
    pub language: Option<String>,
}

impl FenceOpen {
    /// Whether `line` closes this fence
    pub fn is_closed_by(&self, line: &str) -> bool {
        CLOSE_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().len() >= self.ticks)
            .unwrap_or(false)
    }
}

/// Parse an opening fence line
pub fn parse_open(line: &str) -> Option<FenceOpen> {
    let caps = OPEN_RE.captures(line)?;
    let ticks = caps.get(1)?.as_str().len();
    let language = caps
        .get(2)
        .and_then(|m| m.as_str().split_whitespace().next())
        .map(|s| s.to_string());

    Some(FenceOpen { ticks, language })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open() {
        assert_eq!(
            parse_open("```python"),
            Some(FenceOpen {
                ticks: 3,
                language: Some("python".to_string())
            })
        );
        assert_eq!(
            parse_open("```"),
            Some(FenceOpen {
                ticks: 3,
                language: None
            })
        );
        assert_eq!(parse_open("````c++ title=x").unwrap().language.as_deref(), Some("c++"));
        assert_eq!(parse_open("   ```js").unwrap().ticks, 3);
    }

    #[test]
    fn test_not_an_open_fence() {
        assert!(parse_open("``inline``").is_none());
        assert!(parse_open("text ```js").is_none());
        assert!(parse_open("```js```").is_none());
    }

    #[test]
    fn test_closing_fence() {
        let fence = parse_open("```rust").unwrap();
        assert!(fence.is_closed_by("```"));
        assert!(fence.is_closed_by("  ```  "));
        assert!(fence.is_closed_by("`````"));
        assert!(!fence.is_closed_by("```rust"));
        assert!(!fence.is_closed_by("let s = \"```\";"));
    }

    #[test]
    fn test_longer_fence_needs_longer_close() {
        let fence = parse_open("````markdown").unwrap();
        assert!(!fence.is_closed_by("```"));
        assert!(fence.is_closed_by("````"));
    }
}
