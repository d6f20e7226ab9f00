//! `#### Example` block extraction
//!
//! An example block holds depth-5 sub-blocks: `Request body` / `Request
//! query parameters` (a fenced JSON payload that becomes the request body)
//! and any header containing "response" (a status marker plus an optional
//! fenced payload). Malformed or missing payloads degrade to "no example";
//! they never fail the parse.

use fleet_openapi_converter_common::{MediaType, Response};
use indexmap::IndexMap;
use serde_json::Value;

use super::scanner::{LineKind, LineScanner};
use super::schema::infer_schema;

/// Media type attached to every example-derived schema
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Everything extracted from one `#### Example` block
#[derive(Debug, Default)]
pub struct ExampleBlock {
    pub request_body: Option<Value>,
    pub responses: IndexMap<String, Response>,
}

/// Extract an example block starting just after the `#### Example` header.
///
/// Stops exclusively at the next endpoint or section header and returns the
/// index it stopped at. A repeated status code overwrites the earlier
/// response (last one wins).
pub fn extract_example(scanner: &LineScanner, start: usize) -> (usize, ExampleBlock) {
    let mut i = start;
    let mut example = ExampleBlock::default();

    while i < scanner.len() {
        match scanner.kind(i) {
            LineKind::Section(_) | LineKind::Endpoint(_) => break,
            LineKind::SubBlock(text) => {
                if text.starts_with("Request body") || text.starts_with("Request query parameters")
                {
                    let (next, value) = parse_json_block(scanner, i + 1);
                    example.request_body = value;
                    i = next;
                    continue;
                }

                if text.to_lowercase().contains("response") {
                    // The header remainder is only a provisional label; the
                    // status key comes from the `Status:` marker inside.
                    let (next, status, response) = parse_response_block(scanner, i + 1);
                    if let Some(code) = status {
                        example.responses.insert(code, response);
                    }
                    i = next;
                    continue;
                }

                i += 1;
            }
            _ => i += 1,
        }
    }

    (i, example)
}

/// Collect and decode a fenced JSON payload.
///
/// Skips leading blank lines, then expects an opening fence (bare or
/// `json`-tagged). Aborts with no value if a header of any depth arrives
/// before a fence, or if the collected text fails to decode. On success
/// returns the index just past the closing fence.
pub fn parse_json_block(scanner: &LineScanner, start: usize) -> (usize, Option<Value>) {
    let mut i = start;
    let mut collected: Vec<&str> = Vec::new();
    let mut in_block = false;

    while i < scanner.len() {
        let kind = scanner.kind(i);

        if !in_block && kind == LineKind::Blank {
            i += 1;
            continue;
        }

        if kind == LineKind::Fence {
            if in_block {
                break;
            }
            in_block = true;
            i += 1;
            continue;
        }

        if in_block {
            // Raw line, indentation preserved
            collected.push(scanner.line(i));
        } else if is_header(&kind) {
            // Fence never opened; re-offer the header to the caller
            return (i, None);
        }

        i += 1;
    }

    if collected.is_empty() {
        return (i, None);
    }

    match serde_json::from_str::<Value>(&collected.join("\n")) {
        Ok(value) => (i + 1, Some(value)),
        Err(_) => (i, None),
    }
}

/// Parse a response sub-block: optional description text, a `Status:`
/// marker, then an optional fenced body.
///
/// Gives up (no status code) if a header arrives before the marker. The
/// description defaults to `Response with status <code>` when no text was
/// captured.
pub fn parse_response_block(
    scanner: &LineScanner,
    start: usize,
) -> (usize, Option<String>, Response) {
    let mut i = start;
    let mut status: Option<String> = None;
    let mut description_parts: Vec<&str> = Vec::new();

    while i < scanner.len() {
        match scanner.kind(i) {
            LineKind::Blank => {
                i += 1;
            }
            LineKind::StatusMarker(code) => {
                status = Some(code.to_string());
                i += 1;
                break;
            }
            kind if is_header(&kind) => break,
            _ => {
                description_parts.push(scanner.line(i).trim());
                i += 1;
            }
        }
    }

    let (next, body) = parse_json_block(scanner, i);

    let description = if description_parts.is_empty() {
        match &status {
            Some(code) => format!("Response with status {}", code),
            None => "Response".to_string(),
        }
    } else {
        description_parts.join(" ").trim().to_string()
    };

    let mut content = IndexMap::new();
    if let Some(ref value) = body {
        content.insert(
            JSON_MEDIA_TYPE.to_string(),
            MediaType {
                schema: infer_schema(value),
            },
        );
    }

    (next, status, Response { description, content })
}

fn is_header(kind: &LineKind<'_>) -> bool {
    matches!(
        kind,
        LineKind::Section(_) | LineKind::Endpoint(_) | LineKind::Block(_) | LineKind::SubBlock(_)
    )
}
