//! Markdown REST API documentation parser
//!
//! Parses the documentation format used by the Fleet REST API reference:
//!
//! - `## ` headers group endpoints into resource sections (tags)
//! - `### ` headers introduce one endpoint each
//! - a `` `METHOD /path` `` line identifies the operation; `:param` path
//!   segments are rewritten to `{param}`
//! - `#### Parameters` introduces a Name | Type | In | Description table
//! - `#### Example` introduces `##### ` sub-blocks with fenced JSON
//!   payloads for the request body and per-status responses
//!
//! The parse is best-effort: blocks without an operation marker and
//! payloads that fail to decode are skipped, never fatal. The only fatal
//! condition is an unreadable input file.

pub mod assemble;
pub mod endpoint;
pub mod example;
pub mod scanner;
pub mod schema;
pub mod table;
pub mod walker;

pub use endpoint::EndpointBlock;
pub use scanner::{LineKind, LineScanner};
pub use table::{ParameterLocation, ParsedParameter};

use fleet_openapi_converter_common::{
    Components, Contact, ConverterError, Info, OpenApiDocument, Result, SecurityScheme, Server,
};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Markdown documentation parser
///
/// Loads the whole document into memory, then walks it once, forward only,
/// and assembles the OpenAPI output document.
pub struct MarkdownParser {
    scanner: LineScanner,
}

impl MarkdownParser {
    /// Load documentation from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = MarkdownParser::from_file("rest-api.md")?;
    /// let document = parser.parse()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConverterError::Parse(format!(
                "Failed to read documentation file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Self::from_markdown(&content))
    }

    /// Parse documentation from a markdown string
    pub fn from_markdown(content: &str) -> Self {
        Self {
            scanner: LineScanner::new(content),
        }
    }

    /// Walk the document and build the OpenAPI output document
    pub fn parse(&self) -> Result<OpenApiDocument> {
        let mut document = base_document();

        for block in walker::walk(&self.scanner) {
            assemble::add_endpoint(&mut document, block);
        }

        Ok(document)
    }

    /// Number of lines in the loaded document
    pub fn line_count(&self) -> usize {
        self.scanner.len()
    }
}

/// The output document skeleton: info, server, and the bearer-token
/// security scheme, before any paths are added.
pub fn base_document() -> OpenApiDocument {
    let mut security_schemes = IndexMap::new();
    security_schemes.insert(
        "BearerAuth".to_string(),
        SecurityScheme {
            scheme_type: "http".to_string(),
            scheme: "bearer".to_string(),
            bearer_format: Some("JWT".to_string()),
            description: Some(
                "API token authentication. Get your token from My Account > Get API token \
                 in the Fleet UI."
                    .to_string(),
            ),
        },
    );

    let mut bearer = IndexMap::new();
    bearer.insert("BearerAuth".to_string(), Vec::new());

    OpenApiDocument {
        openapi: "3.1.0".to_string(),
        info: Info {
            title: "Fleet REST API".to_string(),
            description: Some("REST API for Fleet device management platform".to_string()),
            version: "1.0.0".to_string(),
            contact: Some(Contact {
                name: "Fleet".to_string(),
                url: "https://fleetdm.com".to_string(),
            }),
        },
        servers: vec![Server {
            url: "https://fleet.example.com".to_string(),
            description: Some("Fleet server".to_string()),
        }],
        security: vec![bearer],
        components: Components {
            security_schemes,
            ..Components::default()
        },
        paths: IndexMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_document_shape() {
        let doc = base_document();
        assert_eq!(doc.openapi, "3.1.0");
        assert_eq!(doc.info.title, "Fleet REST API");
        assert_eq!(doc.servers.len(), 1);
        assert!(doc.components.security_schemes.contains_key("BearerAuth"));
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_parse_empty_document() {
        let parser = MarkdownParser::from_markdown("");
        let doc = parser.parse().unwrap();
        assert!(doc.paths.is_empty());
        // Info and security sections are still well-formed
        assert_eq!(doc.security.len(), 1);
    }

    #[test]
    fn test_from_file_missing_path_is_fatal() {
        let result = MarkdownParser::from_file("/nonexistent/rest-api.md");
        assert!(matches!(result, Err(ConverterError::Parse(_))));
    }
}
