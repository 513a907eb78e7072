use crate::{
    entity::EntityInfo,
    types::Guid,
    value::{DecodeError, decode},
};
use serde_json::Value as JsonValue;
use waapi_kit_schema::{schema::TypeDescriptor, types::Primitive};

///
/// PropertyValue
///
/// Untyped property value, shaped by a linked schema binding rather than a
/// Rust type. Used where the attribute is only known at runtime.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
    Enum {
        ident: &'static str,
        value: i64,
    },
    Reference(Guid),
    Object(EntityInfo),
}

impl PropertyValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Referenced id, if this value points at an entity.
    #[must_use]
    pub const fn reference_id(&self) -> Option<Guid> {
        match self {
            Self::Reference(id) => Some(*id),
            Self::Object(info) => Some(info.id),
            _ => None,
        }
    }

    /// Decode `raw` as described by `ty`.
    pub fn decode(field: &str, ty: &TypeDescriptor, raw: &JsonValue) -> Result<Self, DecodeError> {
        if raw.is_null() {
            return Ok(Self::Null);
        }

        match ty {
            TypeDescriptor::Primitive(primitive) => Self::decode_primitive(field, *primitive, raw),
            TypeDescriptor::Enum(schema) => {
                let value = raw
                    .as_i64()
                    .ok_or_else(|| DecodeError::shape(field, "an enum wire value", raw))?;

                schema
                    .member_by_value(value)
                    .map(|member| Self::Enum {
                        ident: member.ident,
                        value: member.value,
                    })
                    .ok_or_else(|| DecodeError::NoMatchingEnumMember {
                        enum_name: schema.name.to_string(),
                        value: raw.clone(),
                    })
            }
            TypeDescriptor::Reference(_) => match raw {
                JsonValue::Object(row) => EntityInfo::from_row(row).map(Self::Object),
                other => decode::guid(field, other).map(Self::Reference),
            },
        }
    }

    fn decode_primitive(
        field: &str,
        primitive: Primitive,
        raw: &JsonValue,
    ) -> Result<Self, DecodeError> {
        if primitive == Primitive::Bool {
            return raw
                .as_bool()
                .map(Self::Bool)
                .ok_or_else(|| DecodeError::shape(field, "a boolean", raw));
        }
        if primitive.is_int() {
            return raw
                .as_i64()
                .map(Self::Int)
                .ok_or_else(|| DecodeError::shape(field, "an integer", raw));
        }
        if primitive.is_real() {
            return raw
                .as_f64()
                .map(Self::Real)
                .ok_or_else(|| DecodeError::shape(field, "a number", raw));
        }

        // identifiers are validated, then carried in their canonical text form
        match primitive {
            Primitive::Guid => decode::guid(field, raw).map(|id| Self::Text(id.to_string())),
            Primitive::Name => decode::name(field, raw).map(|name| Self::Text(name.into_string())),
            Primitive::Path => decode::path(field, raw).map(|path| Self::Text(path.to_string())),
            _ => raw
                .as_str()
                .map(|text| Self::Text(text.to_string()))
                .ok_or_else(|| DecodeError::shape(field, "a string", raw)),
        }
    }

    /// Wire form. Entity objects are reduced to their id.
    #[must_use]
    pub fn to_wire(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(n) => JsonValue::from(*n),
            Self::Real(n) => JsonValue::from(*n),
            Self::Text(text) => JsonValue::String(text.clone()),
            Self::Enum { value, .. } => JsonValue::from(*value),
            Self::Reference(id) => JsonValue::String(id.to_string()),
            Self::Object(info) => JsonValue::String(info.id.to_string()),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Guid> for PropertyValue {
    fn from(value: Guid) -> Self {
        Self::Reference(value)
    }
}

impl From<EntityInfo> for PropertyValue {
    fn from(value: EntityInfo) -> Self {
        Self::Object(value)
    }
}
