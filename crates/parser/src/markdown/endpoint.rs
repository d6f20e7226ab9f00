//! Endpoint block extraction
//!
//! An endpoint block spans from one `### ` heading to the next heading at
//! endpoint or section level. The block is only kept if a
//! `` `METHOD /path` `` marker was found; descriptive-only subsections are
//! expected and silently dropped.

use fleet_openapi_converter_common::{HttpMethod, Response};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::example;
use super::scanner::{LineKind, LineScanner};
use super::table::{self, ParsedParameter};

/// Matches `:param` path segments for rewriting into `{param}` form
static PATH_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r":(\w+)").expect("valid regex"));

/// Everything extracted from one endpoint block
#[derive(Debug)]
pub struct EndpointBlock {
    pub summary: String,
    pub tags: Vec<String>,
    pub method: HttpMethod,
    pub path: String,
    pub description: String,
    pub parameters: Vec<ParsedParameter>,
    pub request_body: Option<Value>,
    pub responses: IndexMap<String, Response>,
}

/// Rewrite `:param` path segments to `{param}`.
///
/// Idempotent: the output contains no `:` tokens left to convert.
pub fn convert_path_params(path: &str) -> String {
    PATH_PARAM.replace_all(path, "{$1}").into_owned()
}

/// Extract an endpoint block starting just after its `### ` heading.
///
/// Returns the index of the header that ended the block (not consumed, so
/// the walker re-classifies it) and the extracted block, or `None` when no
/// method marker was found.
pub fn extract_endpoint(
    scanner: &LineScanner,
    start: usize,
    summary: &str,
    tags: &[String],
) -> (usize, Option<EndpointBlock>) {
    let mut i = start;
    let mut method_path: Option<(HttpMethod, String)> = None;
    let mut description_parts: Vec<&str> = Vec::new();
    let mut parameters: Vec<ParsedParameter> = Vec::new();
    let mut request_body: Option<Value> = None;
    let mut responses: IndexMap<String, Response> = IndexMap::new();

    while i < scanner.len() {
        match scanner.kind(i) {
            LineKind::Section(_) | LineKind::Endpoint(_) => break,
            LineKind::MethodMarker { method, path } => {
                method_path = Some((method, convert_path_params(path)));
                i += 1;
            }
            LineKind::Block("Parameters") => {
                let (next, params) = table::parse_table(scanner, i + 1);
                parameters = params;
                i = next;
            }
            LineKind::Block("Example") => {
                let (next, block) = example::extract_example(scanner, i + 1);
                request_body = block.request_body;
                responses = block.responses;
                i = next;
            }
            kind => {
                // Free text before the method marker becomes the
                // description; list items and backtick lines do not.
                if method_path.is_none() {
                    if let LineKind::Text(text) = kind {
                        if !text.starts_with('-') && !text.starts_with('`') {
                            description_parts.push(text);
                        }
                    }
                }
                i += 1;
            }
        }
    }

    let block = method_path.map(|(method, path)| EndpointBlock {
        summary: summary.to_string(),
        tags: tags.to_vec(),
        method,
        path,
        description: description_parts.join(" ").trim().to_string(),
        parameters,
        request_body,
        responses,
    });

    (i, block)
}
