use crate::types::{IdentifierError, Name};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

pub(crate) const SEPARATOR: char = '\\';

///
/// Path
///
/// Hierarchical object path such as `\Actor-Mixer Hierarchy\Default Work Unit\Foo`.
/// Immutable: `join` and `parent` build new values. A single trailing
/// separator is normalised away at construction; `\` alone is the root.
///

#[derive(Clone, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Path(String);

impl Path {
    pub fn new(path: impl Into<String>) -> Result<Self, IdentifierError> {
        let mut path = path.into();
        let invalid = |path: &str, reason| IdentifierError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        if path.is_empty() {
            return Err(invalid(&path, "path is empty"));
        }
        if !path.starts_with(SEPARATOR) {
            return Err(invalid(&path, "path must start with a separator"));
        }
        if path.len() > 1 && path.ends_with(SEPARATOR) {
            path.pop();
        }
        if path.len() > 1 && path[1..].split(SEPARATOR).any(str::is_empty) {
            return Err(invalid(&path, "path contains an empty segment"));
        }

        Ok(Self(path))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
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
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Segments below the root, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(SEPARATOR)
            .skip(1)
            .filter(|segment| !segment.is_empty())
    }

    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Path of the containing object; `None` for the root and the null path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if !self.is_valid() || self.is_root() {
            return None;
        }

        match self.0.rfind(SEPARATOR) {
            Some(0) => Some(Self::root()),
            Some(i) => Some(Self(self.0[..i].to_string())),
            None => None,
        }
    }

    /// Child path built from this path and `name`.
    #[must_use]
    pub fn join(&self, name: &Name) -> Self {
        if self.is_root() {
            Self(format!("{SEPARATOR}{name}"))
        } else {
            Self(format!("{}{SEPARATOR}{name}", self.0))
        }
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Path {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Path {
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
