//! Markdown documentation parsing for the Fleet OpenAPI converter
//!
//! This crate turns semi-structured markdown REST API documentation into an
//! OpenAPI 3.1 document model (`OpenApiDocument`).
//!
//! ## Parsing strategy
//!
//! The document is treated as an indexed sequence of lines with a single
//! forward-moving cursor. Each stage consumes a window of lines and returns
//! the index it stopped at, so control flows strictly forward:
//!
//! - the structural walker recognizes `## ` resource sections and `### `
//!   endpoint headings
//! - the endpoint extractor pulls out the `` `METHOD /path` `` marker,
//!   description text, the `#### Parameters` table, and the `#### Example`
//!   block
//! - example payloads inside fenced JSON blocks feed structural schema
//!   inference

pub mod markdown;

pub use markdown::MarkdownParser;
