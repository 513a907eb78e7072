use crate::types::{Guid, IdentifierError, KindName, Name, Path, ShortId, kind_name::GLOBAL_KIND};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

///
/// ObjectRef
///
/// The interchangeable textual forms the remote system accepts wherever an
/// object is referenced.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ObjectRef {
    /// bare `{GUID}`
    Id(Guid),

    /// `Kind:Name`, for kinds with globally unique names
    KindName(KindName),

    /// `Global:<shortId>`
    Global(ShortId),

    /// `\Parent\Child`
    Path(Path),
}

impl ObjectRef {
    pub fn kind_name(kind: Name, name: Name) -> Result<Self, IdentifierError> {
        KindName::new(kind, name).map(Self::KindName)
    }

    /// The id, when this reference carries one directly.
    #[must_use]
    pub const fn as_guid(&self) -> Option<Guid> {
        match self {
            Self::Id(guid) => Some(*guid),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(guid) => write!(f, "{guid}"),
            Self::KindName(pair) => write!(f, "{pair}"),
            Self::Global(id) => write!(f, "{GLOBAL_KIND}:{id}"),
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

impl FromStr for ObjectRef {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('{') {
            return Guid::parse(s).map(Self::Id);
        }
        if s.starts_with('\\') {
            return Path::new(s).map(Self::Path);
        }

        let Some((prefix, rest)) = s.split_once(':') else {
            return Err(IdentifierError::InvalidObjectRef(s.to_string()));
        };

        if prefix == GLOBAL_KIND {
            return ShortId::from_str(rest).map(Self::Global);
        }

        let invalid = |_| IdentifierError::InvalidObjectRef(s.to_string());
        let kind = Name::new(prefix).map_err(invalid)?;
        let name = Name::new(rest).map_err(invalid)?;

        Self::kind_name(kind, name)
    }
}

impl From<Guid> for ObjectRef {
    fn from(guid: Guid) -> Self {
        Self::Id(guid)
    }
}

impl From<KindName> for ObjectRef {
    fn from(pair: KindName) -> Self {
        Self::KindName(pair)
    }
}

impl From<Path> for ObjectRef {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<ShortId> for ObjectRef {
    fn from(id: ShortId) -> Self {
        Self::Global(id)
    }
}

impl Serialize for ObjectRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_str(&text).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_wire_form() {
        let guid = Guid::parse("{1C2B3A4D-5E6F-4A1B-9C8D-0E1F2A3B4C5D}").unwrap();
        let cases = [
            (ObjectRef::Id(guid), "{1C2B3A4D-5E6F-4A1B-9C8D-0E1F2A3B4C5D}"),
            (
                ObjectRef::kind_name(Name::new("Event").unwrap(), Name::new("Play_Foo").unwrap())
                    .unwrap(),
                "Event:Play_Foo",
            ),
            (ObjectRef::Global(ShortId::new(1234).unwrap()), "Global:1234"),
            (
                ObjectRef::Path(Path::new("\\Events\\Play_Foo").unwrap()),
                "\\Events\\Play_Foo",
            ),
        ];

        for (r, text) in cases {
            assert_eq!(r.to_string(), text);
            assert_eq!(ObjectRef::from_str(text).unwrap(), r);
        }
    }

    #[test]
    fn rejects_unprefixed_text() {
        assert!(matches!(
            ObjectRef::from_str("Play_Foo"),
            Err(IdentifierError::InvalidObjectRef(_))
        ));
        assert!(ObjectRef::from_str("Global:zero").is_err());
        assert!(ObjectRef::from_str(":Foo").is_err());
    }

    #[test]
    fn kind_name_text_parses_back_to_the_same_pair() {
        let name = |text: &str| Name::new(text).unwrap();

        assert!(ObjectRef::kind_name(name("Global"), name("12")).is_err());
        assert!(ObjectRef::kind_name(name("A:B"), name("C")).is_err());

        let pair = ObjectRef::kind_name(name("Bus"), name("A:B")).unwrap();
        assert_eq!(ObjectRef::from_str(&pair.to_string()).unwrap(), pair);

        assert_eq!(
            ObjectRef::from_str("Global:12").unwrap(),
            ObjectRef::Global(ShortId::new(12).unwrap())
        );
        assert!(matches!(
            ObjectRef::from_str("Global:Foo"),
            Err(IdentifierError::InvalidShortId(_))
        ));
        assert!(matches!(
            ObjectRef::from_str("{Foo:Bar"),
            Err(IdentifierError::InvalidGuid(_))
        ));
    }
}
