//! Common types and utilities for the Fleet OpenAPI converter
//!
//! This crate contains the error taxonomy and the serializable OpenAPI 3.1
//! document model shared by the parser, generator, and CLI components.

use thiserror::Error;

pub mod openapi;

pub use openapi::{
    Components, Contact, HttpMethod, Info, MediaType, OpenApiDocument, Operation, Parameter,
    PathItem, RequestBody, Response, Schema, SecurityRequirement, SecurityScheme, Server,
};

/// Errors that can occur while converting documentation
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;
