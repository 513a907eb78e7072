use crate::types::IdentifierError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use uuid::Uuid;

///
/// Guid
///
/// Opaque remote object id. Only the braced, hyphenated text form is
/// accepted: `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Guid(Uuid);

impl Guid {
    /// Length of the braced text form.
    pub const TEXT_LEN: usize = 38;

    pub const NULL: Self = Self(Uuid::nil());

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// parse
    /// Strict parse of the braced form; bare or urn forms are rejected.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let invalid = || IdentifierError::InvalidGuid(text.to_string());

        let bytes = text.as_bytes();
        if bytes.len() != Self::TEXT_LEN || bytes[0] != b'{' || bytes[Self::TEXT_LEN - 1] != b'}' {
            return Err(invalid());
        }

        let inner = &text[1..Self::TEXT_LEN - 1];
        let well_formed = inner.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        });
        if !well_formed {
            return Err(invalid());
        }

        Uuid::parse_str(inner).map(Self).map_err(|_| invalid())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self != Self::NULL
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.braced())
    }
}

impl FromStr for Guid {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
