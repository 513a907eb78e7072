use crate::value::DecodeError;
use serde_json::Value as JsonValue;
use waapi_kit_schema::node::EnumDecl;

///
/// WireEnum
///
/// Enumerated property type whose members carry explicit wire values.
/// Usually generated with [`wire_enum!`](crate::wire_enum).
///

pub trait WireEnum: Copy + Eq + 'static {
    const NAME: &'static str;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    fn wire_value(self) -> i64;

    fn ident(self) -> &'static str;

    /// Member whose wire value equals `value`.
    #[must_use]
    fn from_wire_value(value: i64) -> Option<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|member| member.wire_value() == value)
    }

    /// Schema declaration for this enumeration.
    #[must_use]
    fn decl() -> EnumDecl {
        Self::members()
            .iter()
            .fold(EnumDecl::new(Self::NAME), |decl, member| {
                decl.member(member.ident(), member.wire_value())
            })
    }
}

/// decode_enum
/// Match `raw` against the members by wire value.
pub fn decode_enum<E: WireEnum>(field: &str, raw: &JsonValue) -> Result<E, DecodeError> {
    if !raw.is_number() {
        return Err(DecodeError::shape(field, "an enum wire value", raw));
    }

    raw.as_i64()
        .and_then(E::from_wire_value)
        .ok_or_else(|| DecodeError::NoMatchingEnumMember {
            enum_name: E::NAME.to_string(),
            value: raw.clone(),
        })
}

///
/// wire_enum!
///
/// Declares a `Copy` enum with explicit wire values. The first member is the
/// `Default`.
///
/// ```ignore
/// wire_enum! {
///     pub enum SpeakerPanning {
///         DirectAssignment = 0,
///         BalanceFade = 1,
///     }
/// }
/// ```
///

#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $first:ident = $first_value:expr
            $(, $member:ident = $value:expr)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis enum $name {
            #[default]
            $first,
            $($member,)*
        }

        impl $crate::value::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn members() -> &'static [Self] {
                &[Self::$first, $(Self::$member,)*]
            }

            fn wire_value(self) -> i64 {
                match self {
                    Self::$first => $first_value,
                    $(Self::$member => $value,)*
                }
            }

            fn ident(self) -> &'static str {
                match self {
                    Self::$first => stringify!($first),
                    $(Self::$member => stringify!($member),)*
                }
            }
        }

        impl $crate::value::WireValue for $name {
            fn declared_type() -> $crate::__reexports::waapi_kit_schema::node::DeclaredType {
                $crate::__reexports::waapi_kit_schema::node::DeclaredType::Enum(stringify!($name))
            }

            fn to_wire(&self) -> $crate::__reexports::serde_json::Value {
                $crate::__reexports::serde_json::Value::from(
                    <Self as $crate::value::WireEnum>::wire_value(*self),
                )
            }

            fn from_wire(
                field: &str,
                raw: &$crate::__reexports::serde_json::Value,
            ) -> ::std::result::Result<Self, $crate::value::DecodeError> {
                $crate::value::decode_enum(field, raw)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as $crate::value::WireEnum>::ident(*self))
            }
        }
    };
}
