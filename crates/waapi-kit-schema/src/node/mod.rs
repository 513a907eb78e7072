//! Phase-one declarations.
//!
//! Nodes name the kinds and enums they depend on by string only; nothing in
//! here is resolved until [`SchemaBuilder::link`](crate::build::SchemaBuilder::link).

mod r#enum;
mod kind;
mod property;

pub use kind::KindDecl;
pub use property::{DeclaredType, PropertyDecl};
pub use r#enum::{EnumDecl, EnumMember};
