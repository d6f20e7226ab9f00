//! Structural document walk
//!
//! Drives the top-level traversal: `## ` headers open a resource section
//! and reset the active tag list, `### ` headers open an endpoint block.
//! Everything else is skipped. The cursor only moves forward; once a header
//! is classified the walker never reconsiders earlier lines.

use super::endpoint::{self, EndpointBlock};
use super::scanner::{LineKind, LineScanner};

/// Walk the whole document and collect its endpoint blocks in source order.
pub fn walk(scanner: &LineScanner) -> Vec<EndpointBlock> {
    let mut i = 0;
    let mut current_tags: Vec<String> = Vec::new();
    let mut endpoints = Vec::new();

    while i < scanner.len() {
        match scanner.kind(i) {
            LineKind::Section(name) => {
                current_tags = vec![name.to_string()];
                i += 1;
            }
            LineKind::Endpoint(name) => {
                let (next, block) = endpoint::extract_endpoint(scanner, i + 1, name, &current_tags);
                if let Some(block) = block {
                    endpoints.push(block);
                }
                i = next;
            }
            _ => i += 1,
        }
    }

    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_openapi_converter_common::HttpMethod;

    #[test]
    fn test_walk_empty_document() {
        let scanner = LineScanner::new("Just a preamble.\n\nNo sections here.\n");
        assert!(walk(&scanner).is_empty());
    }

    #[test]
    fn test_walk_tracks_sections_as_tags() {
        let doc = "\
## Authentication

### Log in

`POST /api/v1/fleet/login`

### About sessions

Sessions are bearer tokens. No operation here.

## Hosts

### List hosts

`GET /api/v1/fleet/hosts`
";
        let scanner = LineScanner::new(doc);
        let endpoints = walk(&scanner);

        // The descriptive-only subsection contributes nothing
        assert_eq!(endpoints.len(), 2);

        assert_eq!(endpoints[0].summary, "Log in");
        assert_eq!(endpoints[0].method, HttpMethod::Post);
        assert_eq!(endpoints[0].tags, vec!["Authentication".to_string()]);

        assert_eq!(endpoints[1].summary, "List hosts");
        assert_eq!(endpoints[1].tags, vec!["Hosts".to_string()]);
    }

    #[test]
    fn test_endpoint_before_any_section_has_no_tags() {
        let doc = "### Orphan\n\n`GET /api/v1/fleet/version`\n";
        let scanner = LineScanner::new(doc);
        let endpoints = walk(&scanner);

        assert_eq!(endpoints.len(), 1);
        assert!(endpoints[0].tags.is_empty());
    }
}
