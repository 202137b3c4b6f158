//! Helpers for turning Rust type information into JSON Schema that can be
//! shipped alongside a prompt, and for reading the model's JSON answer back.
//!
//! The schema is produced with [`schemars`] and forwarded to providers that
//! support structured responses (e.g. OpenAI's
//! `response_format = json_schema`).

use schemars::{
    JsonSchema,
    r#gen::{SchemaGenerator, SchemaSettings},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{error::Result, generic::ResponseFormat};

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// ```
/// use pantry_core::schema_util::derive_response_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_response_schema::<Foo>().unwrap();
/// assert_eq!(schema["properties"]["bar"]["type"], "string");
/// ```
pub fn derive_response_schema<T>() -> Result<Value>
where
    T: JsonSchema + 'static,
{
    // Some providers do not resolve `$ref`s, so everything is inlined.
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    let mut schema = serde_json::to_value(root)?;
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    Ok(schema)
}

/// Bundle the inlined schema of `T` with a provider-safe name.
pub fn response_format<T>() -> Result<ResponseFormat>
where
    T: JsonSchema + 'static,
{
    let name = T::schema_name()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .take(64)
        .collect();

    Ok(ResponseFormat {
        name,
        schema: derive_response_schema::<T>()?,
    })
}

/// Parse the model's text answer into `T`.
///
/// Returns `Ok(None)` when the model produced nothing usable at all (no
/// content, whitespace, or a bare JSON `null`). A markdown ```` ```json ````
/// fence around the payload is tolerated.
pub fn parse_structured<T>(text: Option<&str>) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let Some(text) = text else {
        return Ok(None);
    };

    let payload = strip_code_fence(text.trim());
    if payload.is_empty() || payload == "null" {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(payload)?))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
