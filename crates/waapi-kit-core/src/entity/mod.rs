//! Entity handles.
//!
//! A handle is a guid plus a client. It caches nothing: every read is one
//! remote call, every write is one remote call with no read-back.

mod info;


pub use info::EntityInfo;

use crate::{
    Error,
    client::Client,
    gateway::{self, Args, endpoint},
    model::{Accessor, AnyKind, Kind, Reference},
    query::Query,
    types::{Guid, Name, ObjectRef, Path},
    value::{DecodeError, decode},
};
use serde_json::{Value as JsonValue, json};
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};
use tracing::debug;

/// Identity fields requested by [`Entity::info`].
const IDENTITY: [&str; 4] = ["id", "name", "type", "path"];

///
/// Entity
///
/// Handle to one remote object of kind `K`. Equality and hashing use the
/// id only.
///

pub struct Entity<K: Kind = AnyKind> {
    id: Guid,
    client: Client,
    platform: Option<Guid>,
    _marker: PhantomData<fn() -> K>,
}

impl<K: Kind> Entity<K> {
    /// No remote call is made.
    pub(crate) fn new(client: Client, id: Guid) -> Self {
        let platform = client.config().platform;

        Self {
            id,
            client,
            platform,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Guid {
        self.id
    }

    #[must_use]
    pub const fn platform(&self) -> Option<Guid> {
        self.platform
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Override the platform used by property reads and writes.
    #[must_use]
    pub fn with_platform(mut self, platform: Option<Guid>) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub const fn reference(&self) -> Reference<K> {
        Reference::new(self.id)
    }

    /// Reinterpret the handle as another kind. Nothing is checked remotely.
    #[must_use]
    pub fn cast<K2: Kind>(self) -> Entity<K2> {
        Entity {
            id: self.id,
            client: self.client,
            platform: self.platform,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn erase(self) -> Entity {
        self.cast()
    }

    ///
    /// IDENTITY
    ///

    /// All four identity fields in one call.
    pub fn info(&self) -> Result<EntityInfo, Error> {
        match self.fetch(&IDENTITY, None)? {
            Some(row) => Ok(EntityInfo::from_row(&row)?),
            None => Ok(EntityInfo::null()),
        }
    }

    pub fn name(&self) -> Result<Name, Error> {
        self.read_identity("name", decode::opt_name)
    }

    pub fn path(&self) -> Result<Path, Error> {
        self.read_identity("path", decode::opt_path)
    }

    /// Remote kind name (the `type` field).
    pub fn kind_name(&self) -> Result<Name, Error> {
        self.read_identity("type", decode::opt_name)
    }

    fn read_identity<T: Default>(
        &self,
        field: &str,
        read: fn(&Args, &str) -> Result<T, DecodeError>,
    ) -> Result<T, Error> {
        match self.fetch(&[field], None)? {
            Some(row) => Ok(read(&row, field)?),
            None => Ok(T::default()),
        }
    }

    /// First row of an `object.get` on this id, carrying `fields`.
    fn fetch(&self, fields: &[&str], platform: Option<Guid>) -> Result<Option<Args>, Error> {
        let args = gateway::args([("from", json!({ "id": [self.id.to_string()] }))]);
        let mut options = gateway::args([("return", json!(fields))]);
        if let Some(platform) = platform {
            options.insert("platform".to_string(), json!(platform.to_string()));
        }

        let row = self
            .client
            .call(endpoint::OBJECT_GET, &args, Some(&options))?
            .and_then(|result| gateway::returned_rows(&result).next().cloned());

        Ok(row)
    }

    ///
    /// PROPERTIES
    ///

    /// get
    /// Read one attribute. A failed call or an absent value yields the
    /// accessor's default; a malformed value is an error.
    pub fn get<A: Accessor>(&self, accessor: &A) -> Result<A::Value, Error> {
        let attribute = accessor.attribute();
        self.check_attribute(attribute)?;

        let key = format!("@{attribute}");
        let Some(row) = self.fetch(&[key.as_str()], self.platform)? else {
            return Ok(accessor.default_value());
        };

        match row.get(&key) {
            None | Some(JsonValue::Null) => Ok(accessor.default_value()),
            Some(raw) => Ok(accessor.decode(raw)?),
        }
    }

    /// set
    /// Write one attribute; reference attributes go through `setReference`.
    pub fn set<A: Accessor>(&self, accessor: &A, value: &A::Value) -> Result<bool, Error> {
        let attribute = accessor.attribute();
        self.check_attribute(attribute)?;

        let (endpoint, key) = if accessor.is_reference() {
            (endpoint::OBJECT_SET_REFERENCE, "reference")
        } else {
            (endpoint::OBJECT_SET_PROPERTY, "property")
        };

        let mut args = gateway::args([
            ("object", self.object_arg()),
            (key, json!(attribute)),
            ("value", accessor.encode(value)),
        ]);
        if let Some(platform) = self.platform {
            args.insert("platform".to_string(), json!(platform.to_string()));
        }

        debug!(id = %self.id, attribute, endpoint, "set attribute");
        self.client.call_ok(endpoint, &args, None)
    }

    fn check_attribute(&self, attribute: &str) -> Result<(), Error> {
        if K::NAME.is_empty() {
            return Ok(());
        }

        self.client.check_binding(K::NAME, attribute)
    }

    fn object_arg(&self) -> JsonValue {
        json!(self.id.to_string())
    }

    ///
    /// MUTATIONS
    ///

    pub fn set_name(&self, name: &Name) -> Result<bool, Error> {
        let args = gateway::args([
            ("object", self.object_arg()),
            ("value", json!(name.as_str())),
        ]);

        self.client.call_ok(endpoint::OBJECT_SET_NAME, &args, None)
    }

    pub fn set_notes(&self, notes: &str) -> Result<bool, Error> {
        let args = gateway::args([("object", self.object_arg()), ("value", json!(notes))]);

        self.client.call_ok(endpoint::OBJECT_SET_NOTES, &args, None)
    }

    /// set_path
    /// Move under `path`. When the last segment of `path` equals the current
    /// name it is taken to name this object, and the move targets its parent.
    pub fn set_path(&self, path: &Path) -> Result<bool, Error> {
        let name = self.name()?;

        let target = match (path.last_segment(), path.parent()) {
            (Some(last), Some(parent)) if name.is_valid() && last == name.as_str() => parent,
            _ => path.clone(),
        };

        self.move_to(target)
    }

    pub fn move_to(&self, parent: impl Into<ObjectRef>) -> Result<bool, Error> {
        let parent = parent.into();
        let args = gateway::args([
            ("object", self.object_arg()),
            ("parent", json!(parent.to_string())),
        ]);

        self.client.call_ok(endpoint::OBJECT_MOVE, &args, None)
    }

    pub fn delete(&self) -> Result<bool, Error> {
        let args = gateway::args([("object", self.object_arg())]);

        self.client.call_ok(endpoint::OBJECT_DELETE, &args, None)
    }

    ///
    /// NAVIGATION
    ///

    /// Parent object, or `None` for top-level objects and failed calls.
    pub fn parent(&self) -> Result<Option<Entity>, Error> {
        let found = self.navigate("parent")?;

        Ok(found.into_iter().next())
    }

    pub fn children(&self) -> Result<Vec<Entity>, Error> {
        self.navigate("children")
    }

    fn navigate(&self, selector: &str) -> Result<Vec<Entity>, Error> {
        let query = Query::new().from_ids([self.id]).select([selector]);

        let found = self
            .client
            .query(&query)?
            .into_iter()
            .filter(EntityInfo::is_valid)
            .map(|info| self.client.entity(info.id))
            .collect();

        Ok(found)
    }
}

impl<K: Kind> Clone for Entity<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            client: self.client.clone(),
            platform: self.platform,
            _marker: PhantomData,
        }
    }
}

impl<K: Kind> fmt::Debug for Entity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("kind", &K::NAME)
            .field("id", &self.id)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl<K: Kind> PartialEq for Entity<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: Kind> Eq for Entity<K> {}

impl<K: Kind> Hash for Entity<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: Kind> From<&Entity<K>> for ObjectRef {
    fn from(entity: &Entity<K>) -> Self {
        Self::Id(entity.id)
    }
}
