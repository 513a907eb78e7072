use crate::{
    query::quote,
    types::{Guid, KindName, Name, ObjectRef, Path, ShortId},
};
use std::fmt;

///
/// QueryValue
///
/// Right-hand side of a condition. Regular expressions are only reachable
/// through [`QueryValue::regex`], never from a plain string.
///

#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
    Guid(Guid),
    Name(Name),
    Path(Path),
    KindName(KindName),
    Regex(String),
}

impl QueryValue {
    /// Validated regular expression, rendered as `/pattern/`. An unescaped
    /// `/` in the pattern is escaped so it cannot close the delimiter.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        regex::Regex::new(pattern)?;

        Ok(Self::Regex(pattern.to_string()))
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(n) => {
                let text = n.to_string();
                if n.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            Self::Text(text) => f.write_str(&quote(text)),
            Self::Guid(id) => f.write_str(&quote(&id.to_string())),
            Self::Name(name) => f.write_str(&quote(name)),
            Self::Path(path) => f.write_str(&quote(path.as_str())),
            Self::KindName(pair) => f.write_str(&quote(&pair.to_string())),
            Self::Regex(pattern) => write!(f, "/{}/", escape_delimiter(pattern)),
        }
    }
}

// `/` becomes `\/` unless it is already escaped
fn escape_delimiter(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;

    for c in pattern.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }

    out
}

macro_rules! impl_from {
    ($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(
            impl From<$ty> for QueryValue {
                fn from($v: $ty) -> Self {
                    $body
                }
            }
        )*
    };
}

impl_from! {
    bool => |v| Self::Bool(v),
    i32 => |v| Self::Int(v.into()),
    i64 => |v| Self::Int(v),
    u32 => |v| Self::Int(v.into()),
    f32 => |v| Self::Real(v.into()),
    f64 => |v| Self::Real(v),
    &str => |v| Self::Text(v.to_string()),
    String => |v| Self::Text(v),
    Guid => |v| Self::Guid(v),
    Name => |v| Self::Name(v),
    Path => |v| Self::Path(v),
    KindName => |v| Self::KindName(v),
    ShortId => |v| Self::Int(v.get().into()),
}

impl From<ObjectRef> for QueryValue {
    fn from(reference: ObjectRef) -> Self {
        match reference {
            ObjectRef::Id(id) => Self::Guid(id),
            ObjectRef::KindName(pair) => Self::KindName(pair),
            ObjectRef::Path(path) => Self::Path(path),
            global @ ObjectRef::Global(_) => Self::Text(global.to_string()),
        }
    }
}
