//! Validated identifier value types.
//!
//! Every identifier is immutable once built and has a null sentinel that no
//! validly constructed value can equal.

mod guid;
mod kind_name;
mod name;
mod object_ref;
mod path;
mod short_id;

pub use guid::Guid;
pub use kind_name::KindName;
pub use name::Name;
pub use object_ref::ObjectRef;
pub use path::Path;
pub use short_id::ShortId;

use thiserror::Error as ThisError;

///
/// IdentifierError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum IdentifierError {
    #[error("name is empty")]
    EmptyName,

    #[error("invalid guid '{0}': expected {{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}}")]
    InvalidGuid(String),

    #[error("invalid kind '{kind}': {reason}")]
    InvalidKind { kind: String, reason: &'static str },

    #[error("invalid object reference '{0}'")]
    InvalidObjectRef(String),

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("invalid short id '{0}'")]
    InvalidShortId(String),

    #[error("name '{0}' contains a path separator")]
    NameContainsSeparator(String),
}

///
/// Identifier
///
/// Shared sentinel contract of the identifier kinds.
///

pub trait Identifier: Sized + PartialEq {
    /// The canonical null/invalid value.
    fn null() -> Self;

    fn is_valid(&self) -> bool {
        *self != Self::null()
    }
}

impl Identifier for Guid {
    fn null() -> Self {
        Self::NULL
    }
}

impl Identifier for Name {
    fn null() -> Self {
        Self::null()
    }
}

impl Identifier for Path {
    fn null() -> Self {
        Self::null()
    }
}

impl Identifier for ShortId {
    fn null() -> Self {
        Self::NULL
    }
}

///
/// TESTS
///
