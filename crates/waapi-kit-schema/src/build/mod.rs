//! Two-phase schema construction.
//!
//! Phase one records declarations in any order. Phase two (`link`) validates
//! them and resolves cross references between kinds and enums.

mod validate;

#[cfg(test)]
mod tests;

use crate::{
    error::ErrorTree,
    node::{DeclaredType, EnumDecl, KindDecl},
    schema::{EnumSchema, KindSchema, PropertyBinding, Schema, TypeDescriptor},
};
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("schema validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// SchemaBuilder
///

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    kinds: Vec<KindDecl>,
    enums: Vec<EnumDecl>,
}

impl SchemaBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kinds: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Record a kind. Duplicates are reported by `link`, not here.
    pub fn declare_kind(&mut self, decl: KindDecl) -> &mut Self {
        self.kinds.push(decl);
        self
    }

    /// Record an enumerated type.
    pub fn declare_enum(&mut self, decl: EnumDecl) -> &mut Self {
        self.enums.push(decl);
        self
    }

    /// Validate every declaration and resolve cross references.
    pub fn link(self) -> Result<Schema, BuildError> {
        let mut errs = ErrorTree::new();
        validate::validate_declarations(&self.kinds, &self.enums, &mut errs);

        // enums first; kinds resolve against them
        let mut enums = BTreeMap::new();
        for decl in &self.enums {
            enums.entry(decl.name).or_insert_with(|| {
                Arc::new(EnumSchema {
                    name: decl.name,
                    members: decl.members.clone(),
                })
            });
        }

        let kind_names: Vec<&'static str> = self.kinds.iter().map(|k| k.name).collect();

        let mut kinds = BTreeMap::new();
        for decl in &self.kinds {
            let mut properties = BTreeMap::new();
            for property in &decl.properties {
                let route = format!("{}.{}", decl.name, property.name);
                match resolve(property.ty, &kind_names, &enums) {
                    Ok(ty) => {
                        properties
                            .entry(property.name)
                            .or_insert_with(|| PropertyBinding::new(property.name, ty));
                    }
                    Err(message) => errs.add_at(route, message),
                }
            }

            kinds.entry(decl.name).or_insert(KindSchema {
                name: decl.name,
                properties,
            });
        }

        errs.result().map_err(BuildError::Validation)?;

        Ok(Schema::from_parts(kinds, enums))
    }
}

// resolve
// turn a declared type into a descriptor, or explain why it cannot be
fn resolve(
    ty: DeclaredType,
    kinds: &[&'static str],
    enums: &BTreeMap<&'static str, Arc<EnumSchema>>,
) -> Result<TypeDescriptor, String> {
    match ty {
        DeclaredType::Primitive(primitive) => Ok(TypeDescriptor::Primitive(primitive)),
        DeclaredType::Enum(name) => enums
            .get(name)
            .map(|e| TypeDescriptor::Enum(Arc::clone(e)))
            .ok_or_else(|| format!("unknown enum '{name}'")),
        DeclaredType::Entity(None) => Ok(TypeDescriptor::Reference(None)),
        DeclaredType::Entity(Some(kind)) => {
            if kinds.contains(&kind) {
                Ok(TypeDescriptor::Reference(Some(kind)))
            } else {
                Err(format!("reference to undeclared kind '{kind}'"))
            }
        }
    }
}
