use waapi_kit_schema::node::KindDecl;

///
/// Kind
///
/// Compile-time marker for a remote entity kind. `declare` feeds the schema
/// builder; handles use `NAME` to check attributes against a linked schema.
///

pub trait Kind: 'static {
    const NAME: &'static str;

    fn declare() -> KindDecl;
}

///
/// AnyKind
///
/// Kind of a handle whose type is not known statically. Never checked
/// against the schema.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct AnyKind;

impl Kind for AnyKind {
    const NAME: &'static str = "";

    fn declare() -> KindDecl {
        KindDecl::new(Self::NAME)
    }
}

///
/// kind!
///
/// Declares a kind marker with one typed `Property` constant per attribute
/// and the matching `Kind` impl.
///
/// ```ignore
/// kind! {
///     pub struct Sound = "Sound" {
///         VOLUME: f64 = "Volume",
///         OUTPUT_BUS: Reference<Bus> = "OutputBus",
///     }
/// }
/// ```
///

#[macro_export]
macro_rules! kind {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $wire:literal {
            $(
                $(#[$prop_meta:meta])*
                $prop:ident : $ty:ty = $attr:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$prop_meta])*
                pub const $prop: $crate::model::Property<$ty> = $crate::model::Property::new($attr);
            )*
        }

        impl $crate::model::Kind for $name {
            const NAME: &'static str = $wire;

            fn declare() -> $crate::__reexports::waapi_kit_schema::node::KindDecl {
                $crate::__reexports::waapi_kit_schema::node::KindDecl::new($wire)
                    $(.with(Self::$prop.decl()))*
            }
        }
    };
}
