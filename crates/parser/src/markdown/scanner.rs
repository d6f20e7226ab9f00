//! Line scanner and line classification
//!
//! The scanner owns the document as an indexed sequence of lines; every
//! other stage advances an integer cursor over it and never scans backward.
//! `LineKind` is the single classification table: each line maps to exactly
//! one kind, with deeper header prefixes checked before shallower ones so
//! precedence between markers is explicit.

use fleet_openapi_converter_common::HttpMethod;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the operation marker, e.g. `` `POST /api/v1/fleet/login` ``
static METHOD_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^`(?i:(GET|POST|PUT|PATCH|DELETE|HEAD))\s+(/[^`]+)`").expect("valid regex")
});

/// Matches the status marker, e.g. `` `Status: 200` ``
static STATUS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^`Status:\s*(\d+)`").expect("valid regex"));

/// Read-only view of the document as lines
pub struct LineScanner {
    lines: Vec<String>,
}

impl LineScanner {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.lines().map(String::from).collect(),
        }
    }

    /// Raw line at `idx`; callers stay in bounds via `len`
    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    /// Classified form of the line at `idx`
    pub fn kind(&self, idx: usize) -> LineKind<'_> {
        LineKind::classify(&self.lines[idx])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// What a single line means to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## ` resource section header
    Section(&'a str),
    /// `### ` endpoint header
    Endpoint(&'a str),
    /// `#### ` block header (Parameters, Example)
    Block(&'a str),
    /// `##### ` sub-block header (Request body, responses)
    SubBlock(&'a str),
    /// `` `METHOD /path` `` operation marker
    MethodMarker { method: HttpMethod, path: &'a str },
    /// `` `Status: NNN` `` response status marker
    StatusMarker(&'a str),
    /// Opening or closing ``` fence
    Fence,
    /// `|`-delimited table row
    TableRow(&'a str),
    /// Empty or whitespace-only line
    Blank,
    /// Anything else
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a single line. Exactly one kind per line; header depth is
    /// decided by the length of the leading `#` run.
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }

        if trimmed.starts_with('#') {
            let depth = trimmed.chars().take_while(|c| *c == '#').count();
            let text = trimmed[depth..].trim();
            match depth {
                2 => return Self::Section(text),
                3 => return Self::Endpoint(text),
                4 => return Self::Block(text),
                5 => return Self::SubBlock(text),
                // Depths the format does not assign meaning to fall through
                // as plain text.
                _ => return Self::Text(trimmed),
            }
        }

        if let Some(caps) = METHOD_MARKER.captures(trimmed) {
            // The alternation only admits the six known keywords
            if let (Some(method), Some(path)) = (
                caps.get(1).and_then(|m| HttpMethod::from_keyword(m.as_str())),
                caps.get(2),
            ) {
                return Self::MethodMarker {
                    method,
                    path: path.as_str(),
                };
            }
        }

        if let Some(caps) = STATUS_MARKER.captures(trimmed) {
            if let Some(code) = caps.get(1) {
                return Self::StatusMarker(code.as_str());
            }
        }

        if trimmed.starts_with("```") {
            return Self::Fence;
        }

        if trimmed.starts_with('|') {
            return Self::TableRow(trimmed);
        }

        Self::Text(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_depths() {
        assert_eq!(
            LineKind::classify("## Authentication"),
            LineKind::Section("Authentication")
        );
        assert_eq!(LineKind::classify("### Log in"), LineKind::Endpoint("Log in"));
        assert_eq!(
            LineKind::classify("#### Parameters"),
            LineKind::Block("Parameters")
        );
        assert_eq!(
            LineKind::classify("##### Default response"),
            LineKind::SubBlock("Default response")
        );
    }

    #[test]
    fn test_deeper_prefix_wins() {
        // A depth-5 header must never classify as a section even though it
        // shares the `##` prefix.
        assert!(matches!(
            LineKind::classify("##### Request body"),
            LineKind::SubBlock("Request body")
        ));
    }

    #[test]
    fn test_method_marker() {
        match LineKind::classify("`POST /api/v1/fleet/login`") {
            LineKind::MethodMarker { method, path } => {
                assert_eq!(method, HttpMethod::Post);
                assert_eq!(path, "/api/v1/fleet/login");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_method_marker_keyword_case_insensitive() {
        match LineKind::classify("`get /api/v1/fleet/Hosts`") {
            LineKind::MethodMarker { method, path } => {
                assert_eq!(method, HttpMethod::Get);
                // Path case is preserved
                assert_eq!(path, "/api/v1/fleet/Hosts");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_non_marker_backtick_line_is_text() {
        assert!(matches!(
            LineKind::classify("`OPTIONS /api/v1/fleet/login`"),
            LineKind::Text(_)
        ));
    }

    #[test]
    fn test_status_marker() {
        assert_eq!(
            LineKind::classify("`Status: 404`"),
            LineKind::StatusMarker("404")
        );
        assert_eq!(
            LineKind::classify("`Status:200`"),
            LineKind::StatusMarker("200")
        );
    }

    #[test]
    fn test_fence_table_blank_text() {
        assert_eq!(LineKind::classify("```json"), LineKind::Fence);
        assert_eq!(LineKind::classify("```"), LineKind::Fence);
        assert_eq!(
            LineKind::classify("| name | string | body | Token |"),
            LineKind::TableRow("| name | string | body | Token |")
        );
        assert_eq!(LineKind::classify("   "), LineKind::Blank);
        assert_eq!(
            LineKind::classify("Returns the session token."),
            LineKind::Text("Returns the session token.")
        );
    }

    #[test]
    fn test_scanner_access() {
        let scanner = LineScanner::new("## A\n\n### B");
        assert_eq!(scanner.len(), 3);
        assert_eq!(scanner.line(0), "## A");
        assert_eq!(scanner.kind(1), LineKind::Blank);
        assert_eq!(scanner.kind(2), LineKind::Endpoint("B"));
    }
}
