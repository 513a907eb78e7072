//! Declarative schema for remote entity kinds.
//!
//! Kinds, their properties and the enumerations those properties use are
//! declared independently of each other (phase one) and resolved into a
//! linked [`Schema`](schema::Schema) in an explicit pass (phase two). Kinds may
//! therefore reference each other freely, including cyclically.

pub mod build;
pub mod error;
pub mod node;
pub mod schema;
pub mod types;

/// Maximum length for kind, property and enum identifiers.
pub const MAX_IDENT_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::SchemaBuilder,
        err,
        error::ErrorTree,
        node::*,
        schema::{EnumSchema, KindSchema, PropertyBinding, Schema, TypeDescriptor},
        types::Primitive,
    };
}
