//! Typed notification payloads.
//!
//! Identity fields are required; every other field falls back to its null
//! sentinel when the remote side leaves it out.

use crate::{
    entity::EntityInfo,
    gateway::Args,
    types::{Guid, Name},
    value::{DecodeError, decode},
};
use serde_json::Value as JsonValue;

///
/// EventArgs
///
/// Payload type of a topic, decoded from the raw notification map.
///

pub trait EventArgs: Sized + Send + Sync + 'static {
    fn decode(payload: &Args) -> Result<Self, DecodeError>;
}

fn entity(payload: &Args, field: &str) -> Result<EntityInfo, DecodeError> {
    decode::object(payload, field).and_then(EntityInfo::from_row)
}

// `object.created`, `preDeleted` and `postDeleted` carry just the object
macro_rules! object_payload {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Clone, Debug, Eq, PartialEq)]
            pub struct $name {
                pub object: EntityInfo,
            }

            impl EventArgs for $name {
                fn decode(payload: &Args) -> Result<Self, DecodeError> {
                    Ok(Self {
                        object: entity(payload, "object")?,
                    })
                }
            }
        )*
    };
}

object_payload!(ObjectCreated, ObjectPreDeleted, ObjectPostDeleted);

///
/// NameChanged
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameChanged {
    pub object: EntityInfo,
    pub old_name: Name,
    pub new_name: Name,
}

impl EventArgs for NameChanged {
    fn decode(payload: &Args) -> Result<Self, DecodeError> {
        Ok(Self {
            object: entity(payload, "object")?,
            old_name: decode::opt_name(payload, "oldName")?,
            new_name: decode::opt_name(payload, "newName")?,
        })
    }
}

///
/// NotesChanged
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NotesChanged {
    pub object: EntityInfo,
    pub old_notes: String,
    pub new_notes: String,
}

impl EventArgs for NotesChanged {
    fn decode(payload: &Args) -> Result<Self, DecodeError> {
        Ok(Self {
            object: entity(payload, "object")?,
            old_notes: decode::text(payload, "oldNotes")?,
            new_notes: decode::text(payload, "newNotes")?,
        })
    }
}

macro_rules! child_payload {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Clone, Debug, Eq, PartialEq)]
            pub struct $name {
                pub parent: EntityInfo,
                pub child: EntityInfo,
            }

            impl EventArgs for $name {
                fn decode(payload: &Args) -> Result<Self, DecodeError> {
                    Ok(Self {
                        parent: entity(payload, "parent")?,
                        child: entity(payload, "child")?,
                    })
                }
            }
        )*
    };
}

child_payload!(ChildAdded, ChildRemoved);

///
/// PropertyChanged
///
/// Carries which object and attribute changed, both values as sent, and
/// the platform scope (`Guid::NULL` when the change is not platform-linked).
///

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyChanged {
    pub object: EntityInfo,
    pub property: Name,
    pub old_value: JsonValue,
    pub new_value: JsonValue,
    pub platform: Guid,
}

impl EventArgs for PropertyChanged {
    fn decode(payload: &Args) -> Result<Self, DecodeError> {
        let platform = match payload.get("platform") {
            Some(JsonValue::Object(row)) => decode::opt_guid(row, "id")?,
            Some(other) => decode::guid("platform", other)?,
            None => Guid::NULL,
        };

        Ok(Self {
            object: entity(payload, "object")?,
            property: decode::opt_name(payload, "propertyName")?,
            old_value: payload.get("oldValue").cloned().unwrap_or_default(),
            new_value: payload.get("newValue").cloned().unwrap_or_default(),
            platform,
        })
    }
}

macro_rules! unit_payload {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
            pub struct $name;

            impl EventArgs for $name {
                fn decode(_: &Args) -> Result<Self, DecodeError> {
                    Ok(Self)
                }
            }
        )*
    };
}

unit_payload!(ProjectLoaded, ProjectPostClosed, ProjectSaved);

///
/// SelectionChanged
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionChanged {
    pub objects: Vec<EntityInfo>,
}

impl EventArgs for SelectionChanged {
    fn decode(payload: &Args) -> Result<Self, DecodeError> {
        let objects = decode::array(payload, "objects")?
            .iter()
            .map(|item| match item {
                JsonValue::Object(row) => EntityInfo::from_row(row),
                other => Err(DecodeError::shape("objects", "an object", other)),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { objects })
    }
}
