use crate::node::{DeclaredType, PropertyDecl};
use serde::Serialize;

///
/// KindDecl
///
/// One remote entity kind and the attributes it exposes.
///

#[derive(Clone, Debug, Serialize)]
pub struct KindDecl {
    pub name: &'static str,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDecl>,
}

impl KindDecl {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            properties: Vec::new(),
        }
    }

    /// Append a property declaration.
    #[must_use]
    pub fn property(mut self, name: &'static str, ty: DeclaredType) -> Self {
        self.properties.push(PropertyDecl::new(name, ty));
        self
    }

    /// Append an already-built declaration.
    #[must_use]
    pub fn with(mut self, decl: PropertyDecl) -> Self {
        self.properties.push(decl);
        self
    }
}
