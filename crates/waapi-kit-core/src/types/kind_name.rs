use crate::types::{IdentifierError, Name};
use std::fmt;

/// Kind of the global-scope short id form, never a valid kind part.
pub(crate) const GLOBAL_KIND: &str = "Global";

///
/// KindName
///
/// `Kind:Name` pair for kinds with globally unique names. The kind part
/// can't contain `:`, open with `{` or be `Global`, so the text form always
/// parses back to the same pair.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KindName {
    kind: Name,
    name: Name,
}

impl KindName {
    pub fn new(kind: Name, name: Name) -> Result<Self, IdentifierError> {
        let invalid = |reason| IdentifierError::InvalidKind {
            kind: kind.to_string(),
            reason,
        };

        if kind.contains(':') {
            return Err(invalid("kind contains ':'"));
        }
        if kind.starts_with('{') {
            return Err(invalid("kind starts with '{'"));
        }
        if kind == GLOBAL_KIND {
            return Err(invalid("kind is reserved"));
        }

        Ok(Self { kind, name })
    }

    #[must_use]
    pub const fn kind(&self) -> &Name {
        &self.kind
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn into_parts(self) -> (Name, Name) {
        (self.kind, self.name)
    }
}

impl fmt::Display for KindName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> Name {
        Name::new(text).unwrap()
    }

    #[test]
    fn ambiguous_kinds_are_rejected() {
        for kind in ["A:B", "Global", "{Foo"] {
            assert!(
                matches!(
                    KindName::new(name(kind), name("C")),
                    Err(IdentifierError::InvalidKind { .. })
                ),
                "accepted {kind:?}"
            );
        }
    }

    #[test]
    fn name_part_may_hold_a_colon() {
        let pair = KindName::new(name("Event"), name("Play:Foo")).unwrap();

        assert_eq!(pair.to_string(), "Event:Play:Foo");
        assert_eq!(pair.kind(), "Event");
        assert_eq!(pair.name(), "Play:Foo");
    }
}
