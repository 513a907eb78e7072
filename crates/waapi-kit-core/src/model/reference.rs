use crate::{
    entity::{Entity, EntityInfo},
    model::{AnyKind, Kind},
    types::Guid,
    value::{DecodeError, WireValue, decode},
};
use serde_json::Value as JsonValue;
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};
use waapi_kit_schema::node::DeclaredType;

///
/// Reference
///
/// Id-only pointer to an entity of kind `K`, as stored in a reference
/// attribute. Goes on the wire as the bare guid text.
///

pub struct Reference<K = AnyKind> {
    id: Guid,
    _marker: PhantomData<fn() -> K>,
}

impl<K> Reference<K> {
    #[must_use]
    pub const fn new(id: Guid) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::new(Guid::NULL)
    }

    #[must_use]
    pub const fn id(&self) -> Guid {
        self.id
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
    }

    /// Drop the static kind.
    #[must_use]
    pub const fn erase(self) -> Reference<AnyKind> {
        Reference::new(self.id)
    }
}

impl<K> Clone for Reference<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Reference<K> {}

impl<K> Default for Reference<K> {
    fn default() -> Self {
        Self::null()
    }
}

impl<K> PartialEq for Reference<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K> Eq for Reference<K> {}

impl<K> Hash for Reference<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K> fmt::Debug for Reference<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reference").field(&self.id).finish()
    }
}

impl<K> fmt::Display for Reference<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<K> From<Guid> for Reference<K> {
    fn from(id: Guid) -> Self {
        Self::new(id)
    }
}

impl<K> From<&EntityInfo> for Reference<K> {
    fn from(info: &EntityInfo) -> Self {
        Self::new(info.id)
    }
}

impl<K: Kind> From<&Entity<K>> for Reference<K> {
    fn from(entity: &Entity<K>) -> Self {
        Self::new(entity.id())
    }
}

impl<K: Kind> WireValue for Reference<K> {
    fn declared_type() -> DeclaredType {
        let target = (!K::NAME.is_empty()).then_some(K::NAME);

        DeclaredType::Entity(target)
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.id.to_string())
    }

    /// Accepts the guid text, or an object carrying `id`.
    fn from_wire(field: &str, raw: &JsonValue) -> Result<Self, DecodeError> {
        match raw {
            JsonValue::Object(row) => decode::opt_guid(row, "id").map(Self::new),
            other => decode::guid(field, other).map(Self::new),
        }
    }
}
