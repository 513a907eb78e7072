//! Core runtime for waapi-kit: identifiers, the gateway boundary, typed
//! entity handles, event bridges and the WAQL query builder.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod gateway;
pub mod model;
pub mod obs;
pub mod query;
pub mod types;
pub mod value;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Error;

/// Paths used by exported macros; not part of the public API.
#[doc(hidden)]
pub mod __reexports {
    pub use serde_json;
    pub use waapi_kit_schema;
}

///
/// Prelude
///
/// Domain vocabulary only. Errors, gateways and metrics stay in their
/// modules.
///

pub mod prelude {
    pub use crate::{
        client::Client,
        entity::{Entity, EntityInfo},
        event::{Bridge, EventArgs, PropertyWatch, Topic, topic},
        model::{Accessor, AnyKind, Kind, Property, Reference},
        query::{Condition, Query, QueryValue},
        types::{Guid, Identifier, KindName, Name, ObjectRef, Path, ShortId},
        value::{WireEnum, WireValue},
        kind, wire_enum,
    };
}
