//! OpenAPI 3.1 output document model
//!
//! Serializable representation of the generated specification. Field order
//! matches the emitted key order, and every string-keyed map that must keep
//! encounter order (paths, responses, schema properties) is an `IndexMap`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security requirement: scheme name -> required scopes
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (e.g., "3.1.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Servers
    #[serde(default)]
    pub servers: Vec<Server>,

    /// Document-wide security requirements
    #[serde(default)]
    pub security: Vec<SecurityRequirement>,

    /// Reusable components
    #[serde(default)]
    pub components: Components,

    /// API paths, in the order their endpoints appear in the source
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// API information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API description
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// API version
    pub version: String,

    /// Contact information
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Contact information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name
    pub name: String,

    /// Contact URL
    pub url: String,
}

/// Server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    pub url: String,

    /// Server description
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reusable components
///
/// The converter only registers security schemes; `schemas` and `responses`
/// stay empty but are always emitted, matching the original output shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    /// Security schemes
    #[serde(rename = "securitySchemes")]
    #[serde(default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,

    /// Named schemas
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,

    /// Named responses
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Security scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type (e.g., "http")
    #[serde(rename = "type")]
    pub scheme_type: String,

    /// HTTP auth scheme (e.g., "bearer")
    pub scheme: String,

    /// Bearer token format (e.g., "JWT")
    #[serde(rename = "bearerFormat")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,

    /// Description
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// HTTP method recognized by the documentation format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    /// Parse a method keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            _ => None,
        }
    }

    /// Lowercase method name as used for path item keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path item (operations for a path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    /// POST operation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    /// PUT operation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    /// PATCH operation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// DELETE operation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    /// HEAD operation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
}

impl PathItem {
    /// Mutable slot for the given method
    pub fn operation_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Head => &mut self.head,
        }
    }

    /// Operation for the given method, if present
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
        }
    }

    /// Methods documented on this path, in key order
    pub fn methods(&self) -> Vec<HttpMethod> {
        let all = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Head,
        ];
        all.into_iter()
            .filter(|m| self.operation(*m).is_some())
            .collect()
    }
}

/// HTTP operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Summary (the endpoint heading text)
    pub summary: String,

    /// Free-text description
    pub description: String,

    /// Tags (the enclosing resource section)
    pub tags: Vec<String>,

    /// Query/path/header/cookie parameters, in source order
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Request body
    #[serde(rename = "requestBody")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,
}

/// Parameter definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: query, path, header, cookie
    #[serde(rename = "in")]
    pub location: String,

    /// Description
    pub description: String,

    /// Required flag
    pub required: bool,

    /// Declared schema
    pub schema: Schema,
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Required flag
    pub required: bool,

    /// Content types
    pub content: IndexMap<String, MediaType>,
}

/// Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Description
    pub description: String,

    /// Content types
    #[serde(default)]
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema
    pub schema: Schema,
}

/// Schema definition
///
/// Covers the shapes the converter produces: primitives, nullable string,
/// objects with ordered properties, arrays, and the unconstrained `{}`
/// schema used for empty-array items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Type: string, integer, number, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Nullable flag (set only for null-derived schemas)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// Description
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Properties (for object type), in encounter order
    #[serde(default)]
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    /// Required property names (for object type)
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// Schema with only a type name
    pub fn typed(type_name: &str) -> Self {
        Self {
            schema_type: Some(type_name.to_string()),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::typed("string")
    }

    pub fn integer() -> Self {
        Self::typed("integer")
    }

    pub fn number() -> Self {
        Self::typed("number")
    }

    pub fn boolean() -> Self {
        Self::typed("boolean")
    }

    /// The `{"type": "string", "nullable": true}` shape produced for null
    /// example values
    pub fn nullable_string() -> Self {
        Self {
            schema_type: Some("string".to_string()),
            nullable: Some(true),
            ..Self::default()
        }
    }

    /// Object schema with the given properties
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Self {
            schema_type: Some("object".to_string()),
            properties,
            ..Self::default()
        }
    }

    /// Array schema with the given item schema
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Unconstrained schema, serialized as `{}`
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Attach a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_keyword_parsing() {
        assert_eq!(HttpMethod::from_keyword("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_keyword("post"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_keyword("Delete"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::from_keyword("OPTIONS"), None);
    }

    #[test]
    fn test_unconstrained_schema_serializes_empty() {
        let json = serde_json::to_value(Schema::unconstrained()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_nullable_string_shape() {
        let json = serde_json::to_value(Schema::nullable_string()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "string", "nullable": true})
        );
    }

    #[test]
    fn test_path_item_method_slots() {
        let mut item = PathItem::default();
        assert!(item.methods().is_empty());

        *item.operation_mut(HttpMethod::Post) = Some(Operation {
            summary: "Log in".to_string(),
            description: String::new(),
            tags: vec!["Authentication".to_string()],
            parameters: vec![],
            request_body: None,
            responses: IndexMap::new(),
        });

        assert_eq!(item.methods(), vec![HttpMethod::Post]);
        assert!(item.operation(HttpMethod::Get).is_none());
        assert!(item.operation(HttpMethod::Post).is_some());
    }
}
