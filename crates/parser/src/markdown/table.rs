//! `#### Parameters` table parsing
//!
//! Tables have a fixed four-column layout: Name | Type | In | Description.
//! Unrecognized locations fall back to `query`; the reserved `body` location
//! tags the row for request-body construction instead of the operation's
//! parameter list.

use super::scanner::{LineKind, LineScanner};

/// Fallback when the `In` cell is not a recognized location
pub const DEFAULT_PARAMETER_LOCATION: ParameterLocation = ParameterLocation::Query;

/// The two literal phrasings that mark a parameter as required. Exactly
/// these; other wordings classify as not-required.
pub const REQUIRED_MARKER_BOLD: &str = "**Required**";
pub const REQUIRED_MARKER_PLAIN: &str = "Required.";

/// Where a documented parameter lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
    /// Reserved label: redirected into request-body construction
    Body,
}

impl ParameterLocation {
    /// Parse the `In` cell; anything unrecognized becomes the default
    pub fn from_label(label: &str) -> Self {
        match label {
            "query" => Self::Query,
            "path" => Self::Path,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            "body" => Self::Body,
            _ => DEFAULT_PARAMETER_LOCATION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Body => "body",
        }
    }

    pub fn is_body(&self) -> bool {
        matches!(self, Self::Body)
    }
}

/// One data row of a parameters table
#[derive(Debug, Clone)]
pub struct ParsedParameter {
    pub name: String,
    pub declared_type: String,
    pub location: ParameterLocation,
    pub description: String,
    pub required: bool,
}

/// Parse a parameters table starting at (or after blank lines before) `start`.
///
/// Skips the header row and the dash separator, then reads data rows until a
/// blank line or any non-row line. Returns the index of the first line not
/// consumed and the rows in source order.
pub fn parse_table(scanner: &LineScanner, start: usize) -> (usize, Vec<ParsedParameter>) {
    let mut i = start;
    let mut parameters = Vec::new();

    while i < scanner.len() && scanner.kind(i) == LineKind::Blank {
        i += 1;
    }

    if i >= scanner.len() {
        return (i, parameters);
    }

    // Header row, then the |---|---| separator
    if scanner.line(i).contains('|') {
        i += 1;
        if i < scanner.len() && scanner.line(i).contains('|') && scanner.line(i).contains('-') {
            i += 1;
        }
    }

    while i < scanner.len() {
        let row = match scanner.kind(i) {
            LineKind::TableRow(row) => row,
            _ => break,
        };

        if let Some(parameter) = parse_row(row) {
            parameters.push(parameter);
        }

        i += 1;
    }

    (i, parameters)
}

/// Parse one `|`-delimited row; rows with fewer than four cells are skipped
fn parse_row(row: &str) -> Option<ParsedParameter> {
    let mut cells: Vec<&str> = row.split('|').map(str::trim).collect();

    // The leading and trailing `|` produce empty outer cells
    if cells.len() >= 2 {
        cells.remove(0);
        cells.pop();
    }

    if cells.len() < 4 {
        return None;
    }

    let description = cells[3];
    let required = description.contains(REQUIRED_MARKER_BOLD)
        || description.contains(REQUIRED_MARKER_PLAIN);

    Some(ParsedParameter {
        name: cells[0].to_string(),
        declared_type: cells[1].to_string(),
        location: ParameterLocation::from_label(cells[2]),
        description: strip_required_markers(description),
        required,
    })
}

/// Remove both required-marker phrasings from a description cell
fn strip_required_markers(description: &str) -> String {
    description
        .replace("**Required**. ", "")
        .replace("**Required**.", "")
        .replace("Required. ", "")
        .replace("Required.", "")
        .trim()
        .to_string()
}
