use crate::{node::EnumMember, types::Primitive};
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};

///
/// Schema
///
/// Linked, read-only view of every declared kind. Only produced by
/// `SchemaBuilder::link`, so every reference inside it resolves.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    kinds: BTreeMap<&'static str, KindSchema>,
    enums: BTreeMap<&'static str, Arc<EnumSchema>>,
}

impl Schema {
    pub(crate) const fn from_parts(
        kinds: BTreeMap<&'static str, KindSchema>,
        enums: BTreeMap<&'static str, Arc<EnumSchema>>,
    ) -> Self {
        Self { kinds, enums }
    }

    #[must_use]
    pub fn kind(&self, name: &str) -> Option<&KindSchema> {
        self.kinds.get(name)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &KindSchema> {
        self.kinds.values()
    }

    /// Look up the binding for `attribute` on `kind`.
    #[must_use]
    pub fn binding(&self, kind: &str, attribute: &str) -> Option<&PropertyBinding> {
        self.kind(kind).and_then(|k| k.binding(attribute))
    }

    #[must_use]
    pub fn enumeration(&self, name: &str) -> Option<&Arc<EnumSchema>> {
        self.enums.get(name)
    }

    /// Kinds holding at least one reference property targeting `kind`
    /// (or targeting any kind).
    #[must_use]
    pub fn referrers(&self, kind: &str) -> Vec<&'static str> {
        self.kinds
            .values()
            .filter(|k| {
                k.properties.values().any(|p| match p.ty {
                    TypeDescriptor::Reference(Some(target)) => target == kind,
                    TypeDescriptor::Reference(None) => true,
                    _ => false,
                })
            })
            .map(|k| k.name)
            .collect()
    }
}

///
/// KindSchema
///

#[derive(Clone, Debug, Serialize)]
pub struct KindSchema {
    pub name: &'static str,
    pub properties: BTreeMap<&'static str, PropertyBinding>,
}

impl KindSchema {
    #[must_use]
    pub fn binding(&self, attribute: &str) -> Option<&PropertyBinding> {
        self.properties.get(attribute)
    }
}

///
/// PropertyBinding
///
/// Stateless description of one remote attribute, shared by every handle
/// of the owning kind.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyBinding {
    pub name: &'static str,
    pub ty: TypeDescriptor,
    pub is_reference: bool,
}

impl PropertyBinding {
    pub(crate) const fn new(name: &'static str, ty: TypeDescriptor) -> Self {
        let is_reference = matches!(ty, TypeDescriptor::Reference(_));

        Self {
            name,
            ty,
            is_reference,
        }
    }
}

///
/// TypeDescriptor
/// resolved property type
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Enum(Arc<EnumSchema>),
    Reference(Option<&'static str>),
}

///
/// EnumSchema
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnumSchema {
    pub name: &'static str,
    pub members: Vec<EnumMember>,
}

impl EnumSchema {
    /// Find the member whose wire value equals `value`.
    #[must_use]
    pub fn member_by_value(&self, value: i64) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.value == value)
    }
}
