use crate::types::IdentifierError;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

///
/// ShortId
///
/// 32-bit numeric id assigned by the remote system. Zero is the null sentinel.
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct ShortId(u32);

impl ShortId {
    pub const NULL: Self = Self(0);

    pub fn new(id: u32) -> Result<Self, IdentifierError> {
        if id == 0 {
            return Err(IdentifierError::InvalidShortId(id.to_string()));
        }

        Ok(Self(id))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl FromStr for ShortId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IdentifierError::InvalidShortId(s.to_string());
        let id = s.parse::<u32>().map_err(|_| invalid())?;

        Self::new(id).map_err(|_| invalid())
    }
}

impl TryFrom<u32> for ShortId {
    type Error = IdentifierError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_reserved_for_the_sentinel() {
        assert!(ShortId::new(0).is_err());
        assert!(ShortId::from_str("0").is_err());
        assert!(ShortId::from_str("-4").is_err());
        assert!(!ShortId::NULL.is_valid());
        assert_eq!(ShortId::from_str("42").unwrap().get(), 42);
    }
}
