//! WAQL query builder.
//!
//! [`Query`] is an ordered clause accumulator: it renders exactly what was
//! asked for, in the order it was asked, and validates nothing about the
//! resulting grammar.

mod builder;
mod condition;
mod value;

#[cfg(test)]
mod tests;

pub use builder::Query;
pub use condition::{Condition, normalize_operator};
pub use value::QueryValue;

/// Start-of-query marker.
pub const QUERY_MARKER: &str = "$";

/// Render a WAQL string literal. Only `"` is escaped; `\` is the path
/// separator and is kept verbatim, so a path renders the same whether it
/// arrives as text or as a [`Path`](crate::types::Path).
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}
