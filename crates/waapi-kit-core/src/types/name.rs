use crate::types::IdentifierError;
use derive_more::{Deref, Display};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

///
/// Name
///
/// Unique, non-empty object or kind name. The empty name is the null
/// sentinel and is only reachable through [`Name::null`].
///

#[derive(Clone, Debug, Default, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();

        if name.is_empty() {
            return Err(IdentifierError::EmptyName);
        }
        if name.contains(crate::types::path::SEPARATOR) {
            return Err(IdentifierError::NameContainsSeparator(name));
        }

        Ok(Self(name))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for Name {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::new(text).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_separator_names_are_rejected() {
        assert_eq!(Name::new(""), Err(IdentifierError::EmptyName));
        assert!(matches!(
            Name::new("a\\b"),
            Err(IdentifierError::NameContainsSeparator(_))
        ));
    }

    #[test]
    fn null_is_distinct_from_every_valid_name() {
        let name = Name::new("Footsteps").unwrap();
        assert!(name.is_valid());
        assert!(!Name::null().is_valid());
        assert_ne!(name, Name::null());
        assert_eq!(name, "Footsteps");
    }
}
