//! Typed model of remote entity kinds and their attributes.

mod kind;
mod property;
mod reference;

pub use kind::{AnyKind, Kind};
pub use property::{Accessor, DynProperty, Property};
pub use reference::Reference;
