//! Document assembly
//!
//! Folds extracted endpoint blocks into the output document: body-tagged
//! parameters are synthesized into a request body when no example payload
//! was decoded, every operation gets at least one response, and endpoints
//! sharing a path template merge into the same path entry.

use fleet_openapi_converter_common::{
    MediaType, OpenApiDocument, Operation, Parameter, RequestBody, Response, Schema,
};
use indexmap::IndexMap;

use super::endpoint::EndpointBlock;
use super::example::JSON_MEDIA_TYPE;
use super::schema::{infer_schema, schema_for_type};

/// Tag applied when an endpoint appears outside any resource section
pub const DEFAULT_TAG: &str = "General";

/// Description of the synthesized response for operations documenting none
pub const DEFAULT_RESPONSE_DESCRIPTION: &str = "Successful response";

/// Merge one endpoint block into the document.
pub fn add_endpoint(document: &mut OpenApiDocument, block: EndpointBlock) {
    let (body_params, ordinary): (Vec<_>, Vec<_>) = block
        .parameters
        .into_iter()
        .partition(|p| p.location.is_body());

    let parameters: Vec<Parameter> = ordinary
        .into_iter()
        .map(|p| Parameter {
            name: p.name,
            location: p.location.as_str().to_string(),
            description: p.description,
            required: p.required,
            schema: schema_for_type(&p.declared_type),
        })
        .collect();

    let request_body = if let Some(ref example) = block.request_body {
        Some(body_from_schema(infer_schema(example)))
    } else if !body_params.is_empty() {
        let mut properties = IndexMap::new();
        let mut required = Vec::new();
        for p in &body_params {
            let schema = schema_for_type(&p.declared_type).with_description(&p.description);
            properties.insert(p.name.clone(), schema);
            if p.required {
                required.push(p.name.clone());
            }
        }
        let mut schema = Schema::object(properties);
        schema.required = required;
        Some(body_from_schema(schema))
    } else {
        None
    };

    let tags = if block.tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        block.tags
    };

    let responses = if block.responses.is_empty() {
        let mut defaults = IndexMap::new();
        defaults.insert(
            "200".to_string(),
            Response {
                description: DEFAULT_RESPONSE_DESCRIPTION.to_string(),
                content: IndexMap::new(),
            },
        );
        defaults
    } else {
        block.responses
    };

    let operation = Operation {
        summary: block.summary,
        description: block.description,
        tags,
        parameters,
        request_body,
        responses,
    };

    let entry = document.paths.entry(block.path).or_default();
    *entry.operation_mut(block.method) = Some(operation);
}

fn body_from_schema(schema: Schema) -> RequestBody {
    let mut content = IndexMap::new();
    content.insert(JSON_MEDIA_TYPE.to_string(), MediaType { schema });
    RequestBody {
        required: true,
        content,
    }
}
