//! Output writing for the Fleet OpenAPI converter
//!
//! Serializes the assembled OpenAPI document into its two equivalent
//! forms: human-readable YAML and pretty-printed JSON. The JSON file name
//! is derived from the YAML file name by extension substitution.

use fleet_openapi_converter_common::{ConverterError, OpenApiDocument, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Specification writer
///
/// Owns an assembled document and writes both serialized forms next to
/// each other.
pub struct SpecWriter {
    document: OpenApiDocument,
}

/// Paths of the files produced by a write
#[derive(Debug)]
pub struct WrittenSpec {
    pub yaml: PathBuf,
    pub json: PathBuf,
}

impl SpecWriter {
    pub fn new(document: OpenApiDocument) -> Self {
        Self { document }
    }

    /// Human-readable YAML form
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.document)?)
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Write both forms; the JSON path is the YAML path with a `json`
    /// extension.
    pub fn write(&self, yaml_path: &Path) -> Result<WrittenSpec> {
        let json_path = yaml_path.with_extension("json");

        fs::write(yaml_path, self.to_yaml()?).map_err(|e| {
            ConverterError::Generation(format!(
                "Failed to write {}: {}",
                yaml_path.display(),
                e
            ))
        })?;

        fs::write(&json_path, self.to_json()?).map_err(|e| {
            ConverterError::Generation(format!("Failed to write {}: {}", json_path.display(), e))
        })?;

        Ok(WrittenSpec {
            yaml: yaml_path.to_path_buf(),
            json: json_path,
        })
    }

    /// The document being written
    pub fn document(&self) -> &OpenApiDocument {
        &self.document
    }
}

/// Serialize and write a document (convenience function)
pub fn write_spec(document: OpenApiDocument, yaml_path: &Path) -> Result<WrittenSpec> {
    SpecWriter::new(document).write(yaml_path)
}
