use crate::{
    gateway::Args,
    types::{Guid, Name, Path},
    value::{DecodeError, decode},
};
use serde::Serialize;

///
/// EntityInfo
///
/// Identity projection of one remote object. Fields the remote side left
/// out are replaced by their null sentinels.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct EntityInfo {
    pub id: Guid,
    pub name: Name,
    pub kind: Name,
    pub path: Path,
}

impl EntityInfo {
    #[must_use]
    pub const fn null() -> Self {
        Self {
            id: Guid::NULL,
            name: Name::null(),
            kind: Name::null(),
            path: Path::null(),
        }
    }

    /// Decode an identity row (`id`, `name`, `type`, `path`).
    pub fn from_row(row: &Args) -> Result<Self, DecodeError> {
        Ok(Self {
            id: decode::opt_guid(row, "id")?,
            name: decode::opt_name(row, "name")?,
            kind: decode::opt_name(row, "type")?,
            path: decode::opt_path(row, "path")?,
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
    }
}
