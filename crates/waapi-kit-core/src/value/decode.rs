//! Field readers shared by payload and row decoding.
//!
//! Absent and `null` fields decode to the matching sentinel; a present field
//! of the wrong shape is an error.

use crate::{
    types::{Guid, Name, Path},
    value::DecodeError,
};
use serde_json::{Map, Value as JsonValue};

pub(crate) fn guid(field: &str, raw: &JsonValue) -> Result<Guid, DecodeError> {
    match raw {
        JsonValue::Null => Ok(Guid::NULL),
        JsonValue::String(text) => {
            Guid::parse(text).map_err(|e| DecodeError::identifier(field, e))
        }
        other => Err(DecodeError::shape(field, "a guid string", other)),
    }
}

pub(crate) fn name(field: &str, raw: &JsonValue) -> Result<Name, DecodeError> {
    match raw {
        JsonValue::Null => Ok(Name::null()),
        JsonValue::String(text) if text.is_empty() => Ok(Name::null()),
        JsonValue::String(text) => {
            Name::new(text.as_str()).map_err(|e| DecodeError::identifier(field, e))
        }
        other => Err(DecodeError::shape(field, "a name string", other)),
    }
}

pub(crate) fn path(field: &str, raw: &JsonValue) -> Result<Path, DecodeError> {
    match raw {
        JsonValue::Null => Ok(Path::null()),
        JsonValue::String(text) if text.is_empty() => Ok(Path::null()),
        JsonValue::String(text) => {
            Path::new(text.as_str()).map_err(|e| DecodeError::identifier(field, e))
        }
        other => Err(DecodeError::shape(field, "a path string", other)),
    }
}

/// Optional text field; absent or `null` yields an empty string.
pub(crate) fn text(map: &Map<String, JsonValue>, field: &str) -> Result<String, DecodeError> {
    match map.get(field) {
        None | Some(JsonValue::Null) => Ok(String::new()),
        Some(JsonValue::String(text)) => Ok(text.clone()),
        Some(other) => Err(DecodeError::shape(field, "a string", other)),
    }
}

pub(crate) fn opt_guid(map: &Map<String, JsonValue>, field: &str) -> Result<Guid, DecodeError> {
    map.get(field)
        .map_or(Ok(Guid::NULL), |raw| guid(field, raw))
}

pub(crate) fn opt_name(map: &Map<String, JsonValue>, field: &str) -> Result<Name, DecodeError> {
    map.get(field)
        .map_or_else(|| Ok(Name::null()), |raw| name(field, raw))
}

pub(crate) fn opt_path(map: &Map<String, JsonValue>, field: &str) -> Result<Path, DecodeError> {
    map.get(field)
        .map_or_else(|| Ok(Path::null()), |raw| path(field, raw))
}

/// Required nested object.
pub(crate) fn object<'a>(
    map: &'a Map<String, JsonValue>,
    field: &str,
) -> Result<&'a Map<String, JsonValue>, DecodeError> {
    match map.get(field) {
        None => Err(DecodeError::MissingField {
            field: field.to_string(),
        }),
        Some(JsonValue::Object(inner)) => Ok(inner),
        Some(other) => Err(DecodeError::shape(field, "an object", other)),
    }
}

/// Optional array; absent or `null` yields an empty slice.
pub(crate) fn array<'a>(
    map: &'a Map<String, JsonValue>,
    field: &str,
) -> Result<&'a [JsonValue], DecodeError> {
    match map.get(field) {
        None | Some(JsonValue::Null) => Ok(&[]),
        Some(JsonValue::Array(items)) => Ok(items),
        Some(other) => Err(DecodeError::shape(field, "an array", other)),
    }
}
