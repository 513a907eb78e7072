//! Wire value conversion.
//!
//! `WireValue` is the typed boundary between local Rust values and the JSON
//! the gateway speaks. Decoding is strict: a shape the remote system should
//! never send is a `DecodeError`, not a silent default.

pub(crate) mod decode;
mod dynamic;
mod r#enum;


pub use dynamic::PropertyValue;
pub use r#enum::{WireEnum, decode_enum};

use crate::types::{Guid, IdentifierError, Name, Path, ShortId};
use serde_json::Value as JsonValue;
use thiserror::Error as ThisError;
use waapi_kit_schema::{node::DeclaredType, types::Primitive};

///
/// DecodeError
///
/// The remote payload does not match the shape this crate expects.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum DecodeError {
    #[error("field '{field}' holds an invalid identifier: {source}")]
    InvalidIdentifier {
        field: String,
        source: IdentifierError,
    },

    #[error("payload is missing required field '{field}'")]
    MissingField { field: String },

    #[error("no member of enum '{enum_name}' has wire value {value}")]
    NoMatchingEnumMember { enum_name: String, value: JsonValue },

    #[error("field '{field}' expected {expected}, found {found}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
        found: JsonValue,
    },
}

impl DecodeError {
    pub(crate) fn shape(field: &str, expected: &'static str, found: &JsonValue) -> Self {
        Self::UnexpectedShape {
            field: field.to_string(),
            expected,
            found: found.clone(),
        }
    }

    pub(crate) fn identifier(field: &str, source: IdentifierError) -> Self {
        Self::InvalidIdentifier {
            field: field.to_string(),
            source,
        }
    }
}

///
/// WireValue
///
/// Values that can be read from and written to a remote attribute.
///

pub trait WireValue: Sized {
    /// Schema type used when the owning property is declared.
    fn declared_type() -> DeclaredType;

    fn to_wire(&self) -> JsonValue;

    /// Decode `raw`; `field` only labels errors.
    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError>;
}

impl WireValue for bool {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Bool)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        raw.as_bool()
            .ok_or_else(|| DecodeError::shape(field, "a boolean", raw))
    }
}

// integers narrow through i64/u64 and reject anything out of range
macro_rules! impl_wire_int {
    ($($ty:ty => $primitive:ident via $read:ident),* $(,)?) => {
        $(
            impl WireValue for $ty {
                fn declared_type() -> DeclaredType {
                    DeclaredType::Primitive(Primitive::$primitive)
                }

                fn to_wire(&self) -> JsonValue {
                    JsonValue::from(*self)
                }

                fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
                    raw.$read()
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| DecodeError::shape(field, stringify!($ty), raw))
                }
            }
        )*
    };
}

impl_wire_int! {
    i16 => Int16 via as_i64,
    i32 => Int32 via as_i64,
    i64 => Int64 via as_i64,
    u32 => Uint32 via as_u64,
}

impl WireValue for f64 {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Real64)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::from(*self)
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        raw.as_f64()
            .ok_or_else(|| DecodeError::shape(field, "a number", raw))
    }
}

impl WireValue for f32 {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Real32)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::from(f64::from(*self))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        f64::from_wire(field, raw).map(|n| n as Self)
    }
}

impl WireValue for String {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Text)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        raw.as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::shape(field, "a string", raw))
    }
}

impl WireValue for Guid {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Guid)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        decode::guid(field, raw)
    }
}

impl WireValue for Name {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Name)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        decode::name(field, raw)
    }
}

impl WireValue for Path {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::Path)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        decode::path(field, raw)
    }
}

impl WireValue for ShortId {
    fn declared_type() -> DeclaredType {
        DeclaredType::Primitive(Primitive::ShortId)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::from(self.get())
    }

    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        let n = u32::from_wire(field, raw)?;

        Ok(ShortId::new(n).unwrap_or(ShortId::NULL))
    }
}
