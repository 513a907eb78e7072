use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Primitive
///
/// Scalar wire shapes a remote property can carry.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Guid,
    Int16,
    Int32,
    Int64,
    Name,
    Path,
    Real32,
    Real64,
    ShortId,
    Text,
    Uint32,
}

impl Primitive {
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(
            self,
            Self::Int16 | Self::Int32 | Self::Int64 | Self::Uint32 | Self::ShortId
        )
    }

    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real32 | Self::Real64)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn primitive_display_round_trips_through_from_str() {
        for primitive in [Primitive::Bool, Primitive::Real64, Primitive::ShortId] {
            let text = primitive.to_string();
            assert_eq!(Primitive::from_str(&text).ok(), Some(primitive));
        }
    }

    #[test]
    fn primitive_families_are_disjoint() {
        assert!(Primitive::Int32.is_int());
        assert!(!Primitive::Int32.is_real());
        assert!(Primitive::Real32.is_real());
    }
}
