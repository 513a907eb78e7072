use crate::query::QueryValue;
use std::fmt;

/// normalize_operator
/// Map caller-friendly aliases onto the grammar's tokens. Anything else is
/// passed through unchanged.
#[must_use]
pub fn normalize_operator(op: &str) -> &str {
    match op {
        "==" | "is" => "=",
        "&" | "&&" => "and",
        "|" | "||" => "or",
        "not" => "!",
        other => other,
    }
}

///
/// Condition
///
/// `attribute operator value`, with the operator already normalised.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    attribute: String,
    operator: String,
    value: QueryValue,
}

impl Condition {
    pub fn new(attribute: impl Into<String>, operator: &str, value: impl Into<QueryValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: normalize_operator(operator).to_string(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    #[must_use]
    pub const fn value(&self) -> &QueryValue {
        &self.value
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.operator, self.value)
    }
}

impl<V: Into<QueryValue>> From<(&str, &str, V)> for Condition {
    fn from((attribute, operator, value): (&str, &str, V)) -> Self {
        Self::new(attribute, operator, value)
    }
}
