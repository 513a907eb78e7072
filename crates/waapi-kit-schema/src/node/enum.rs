use serde::Serialize;

///
/// EnumDecl
///
/// Enumerated property type. Members are matched on the wire by `value`,
/// never by position or identifier.
///

#[derive(Clone, Debug, Serialize)]
pub struct EnumDecl {
    pub name: &'static str,
    pub members: Vec<EnumMember>,
}

impl EnumDecl {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn member(mut self, ident: &'static str, value: i64) -> Self {
        self.members.push(EnumMember { ident, value });
        self
    }
}

///
/// EnumMember
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct EnumMember {
    pub ident: &'static str,
    pub value: i64,
}
