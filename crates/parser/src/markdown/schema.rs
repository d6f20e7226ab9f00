//! Structural schema inference
//!
//! Derives a schema from a concrete example value, and maps declared table
//! types to schemas. Inference is total: every JSON value shape has exactly
//! one schema counterpart.

use fleet_openapi_converter_common::Schema;
use indexmap::IndexMap;
use serde_json::Value;

/// Fallback schema type for declared types outside the mapping table
pub const FALLBACK_SCHEMA_TYPE: &str = "string";

/// Infer a schema from a decoded example value.
///
/// Objects keep their property order; arrays take their item schema from the
/// first element (unconstrained when empty); `null` becomes a nullable
/// string.
pub fn infer_schema(value: &Value) -> Schema {
    match value {
        Value::Object(map) => {
            let properties: IndexMap<String, Schema> = map
                .iter()
                .map(|(key, v)| (key.clone(), infer_schema(v)))
                .collect();
            Schema::object(properties)
        }
        Value::Array(items) => match items.first() {
            Some(first) => Schema::array(infer_schema(first)),
            None => Schema::array(Schema::unconstrained()),
        },
        // Booleans are checked before integers on purpose; representations
        // where a boolean is structurally an integer must not reach the
        // integer arm.
        Value::Bool(_) => Schema::boolean(),
        Value::Number(n) if n.is_i64() || n.is_u64() => Schema::integer(),
        Value::Number(_) => Schema::number(),
        Value::String(_) => Schema::string(),
        Value::Null => Schema::nullable_string(),
    }
}

/// Map a declared table type (the `Type` cell) to a schema
pub fn schema_for_type(declared: &str) -> Schema {
    match declared.trim().to_lowercase().as_str() {
        "string" => Schema::string(),
        "integer" | "int" => Schema::integer(),
        "number" => Schema::number(),
        "boolean" | "bool" => Schema::boolean(),
        "object" => Schema::typed("object"),
        "array" | "list" => Schema::array(Schema::unconstrained()),
        _ => Schema::typed(FALLBACK_SCHEMA_TYPE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_mixed_object() {
        let schema = infer_schema(&json!({"a": 1, "b": [true, false], "c": null}));

        assert_eq!(schema.schema_type.as_deref(), Some("object"));
        let keys: Vec<&String> = schema.properties.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);

        assert_eq!(schema.properties["a"].schema_type.as_deref(), Some("integer"));

        let b = &schema.properties["b"];
        assert_eq!(b.schema_type.as_deref(), Some("array"));
        let items = b.items.as_ref().unwrap();
        assert_eq!(items.schema_type.as_deref(), Some("boolean"));

        let c = &schema.properties["c"];
        assert_eq!(c.schema_type.as_deref(), Some("string"));
        assert_eq!(c.nullable, Some(true));
    }

    #[test]
    fn test_infer_empty_shapes() {
        let empty_array = infer_schema(&json!([]));
        assert_eq!(empty_array.schema_type.as_deref(), Some("array"));
        let items = empty_array.items.as_ref().unwrap();
        assert!(items.schema_type.is_none());
        assert!(items.properties.is_empty());

        let empty_object = infer_schema(&json!({}));
        assert_eq!(empty_object.schema_type.as_deref(), Some("object"));
        assert!(empty_object.properties.is_empty());
    }

    #[test]
    fn test_infer_primitives() {
        assert_eq!(
            infer_schema(&json!(1.5)).schema_type.as_deref(),
            Some("number")
        );
        assert_eq!(
            infer_schema(&json!("x")).schema_type.as_deref(),
            Some("string")
        );
        assert_eq!(
            infer_schema(&json!(true)).schema_type.as_deref(),
            Some("boolean")
        );
    }

    #[test]
    fn test_declared_type_mapping() {
        assert_eq!(schema_for_type("int").schema_type.as_deref(), Some("integer"));
        assert_eq!(schema_for_type("Bool").schema_type.as_deref(), Some("boolean"));
        assert_eq!(
            schema_for_type("list").schema_type.as_deref(),
            Some("array")
        );
        // Unknown declared types fall back to string
        assert_eq!(
            schema_for_type("timestamp").schema_type.as_deref(),
            Some("string")
        );
    }
}
