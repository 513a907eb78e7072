use crate::value::{DecodeError, PropertyValue, WireValue};
use serde_json::Value as JsonValue;
use std::{fmt, marker::PhantomData};
use waapi_kit_schema::{node::PropertyDecl, schema::PropertyBinding};

///
/// Accessor
///
/// Stateless description of one remote attribute: its name, its reference
/// flag and how its values cross the wire. Handles supply the object id.
///

pub trait Accessor {
    type Value;

    fn attribute(&self) -> &'static str;

    /// Writes go through `setReference` instead of `setProperty`.
    fn is_reference(&self) -> bool;

    /// Returned when the attribute is absent or the read failed.
    fn default_value(&self) -> Self::Value;

    fn decode(&self, raw: &JsonValue) -> Result<Self::Value, DecodeError>;

    fn encode(&self, value: &Self::Value) -> JsonValue;
}

///
/// Property
///
/// Typed attribute binding. `const`-constructible so kinds can expose their
/// attributes as associated constants shared by every handle.
///

pub struct Property<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: WireValue> Property<T> {
    /// Schema declaration of this attribute.
    #[must_use]
    pub fn decl(&self) -> PropertyDecl {
        PropertyDecl::new(self.name, T::declared_type())
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.name).finish()
    }
}

impl<T: WireValue + Default> Accessor for Property<T> {
    type Value = T;

    fn attribute(&self) -> &'static str {
        self.name
    }

    fn is_reference(&self) -> bool {
        T::declared_type().is_reference()
    }

    fn default_value(&self) -> T {
        T::default()
    }

    fn decode(&self, raw: &JsonValue) -> Result<T, DecodeError> {
        T::from_wire(self.name, raw)
    }

    fn encode(&self, value: &T) -> JsonValue {
        value.to_wire()
    }
}

///
/// DynProperty
///
/// Accessor built from a linked schema binding.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DynProperty {
    binding: PropertyBinding,
}

impl DynProperty {
    #[must_use]
    pub const fn new(binding: PropertyBinding) -> Self {
        Self { binding }
    }

    #[must_use]
    pub const fn binding(&self) -> &PropertyBinding {
        &self.binding
    }
}

impl Accessor for DynProperty {
    type Value = PropertyValue;

    fn attribute(&self) -> &'static str {
        self.binding.name
    }

    fn is_reference(&self) -> bool {
        self.binding.is_reference
    }

    fn default_value(&self) -> PropertyValue {
        PropertyValue::Null
    }

    fn decode(&self, raw: &JsonValue) -> Result<PropertyValue, DecodeError> {
        PropertyValue::decode(self.binding.name, &self.binding.ty, raw)
    }

    fn encode(&self, value: &PropertyValue) -> JsonValue {
        value.to_wire()
    }
}

///
/// TESTS
///
