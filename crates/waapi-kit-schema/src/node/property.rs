use crate::types::Primitive;
use serde::Serialize;

///
/// PropertyDecl
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyDecl {
    pub name: &'static str,
    pub ty: DeclaredType,
}

impl PropertyDecl {
    #[must_use]
    pub const fn new(name: &'static str, ty: DeclaredType) -> Self {
        Self { name, ty }
    }
}

///
/// DeclaredType
///
/// Unresolved property type. `Enum` and `Entity` carry names that the link
/// pass must find among the declared enums and kinds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DeclaredType {
    Primitive(Primitive),
    Enum(&'static str),

    /// Reference to another entity; `None` accepts any kind.
    Entity(Option<&'static str>),
}

impl DeclaredType {
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Entity(_))
    }
}
