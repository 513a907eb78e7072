use crate::{
    query::{Condition, QUERY_MARKER, quote},
    types::{Guid, ObjectRef},
};
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Clause {
    Source(String),
    Other(String),
}

impl Clause {
    fn as_str(&self) -> &str {
        match self {
            Self::Source(text) | Self::Other(text) => text,
        }
    }
}

///
/// Query
///
/// Fluent WAQL builder. Source clauses (`from_*`) own the first slot: the
/// first one seeds it and later ones replace it. Every other clause is
/// appended in call order.
///
/// ```ignore
/// let q = Query::new()
///     .from_kinds(["Sound"])
///     .where_(("Volume", "<", -6.0), false)
///     .take(10);
/// assert_eq!(q.to_string(), "$ from type Sound where Volume < -6.0 take 10");
/// ```
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Rendered clauses, in order, without the start marker.
    pub fn clauses(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(Clause::as_str)
    }

    ///
    /// SOURCES
    ///

    #[must_use]
    pub fn from_ids(self, ids: impl IntoIterator<Item = Guid>) -> Self {
        let ids = join(ids.into_iter().map(|id| quote(&id.to_string())));

        self.source(format!("from object {ids}"))
    }

    /// Any reference form: id, `Kind:Name`, `Global:n` or path.
    #[must_use]
    pub fn from_refs<R: Into<ObjectRef>>(self, refs: impl IntoIterator<Item = R>) -> Self {
        let refs = join(refs.into_iter().map(|r| quote(&r.into().to_string())));

        self.source(format!("from object {refs}"))
    }

    #[must_use]
    pub fn from_kinds<S: AsRef<str>>(self, kinds: impl IntoIterator<Item = S>) -> Self {
        let kinds = join(kinds.into_iter().map(|k| k.as_ref().to_string()));

        self.source(format!("from type {kinds}"))
    }

    /// Results of a saved query, referenced by id or path.
    #[must_use]
    pub fn from_named_query(self, query: impl Into<ObjectRef>) -> Self {
        let query = quote(&query.into().to_string());

        self.source(format!("from query {query}"))
    }

    #[must_use]
    pub fn from_text_search(self, text: &str) -> Self {
        self.source(format!("from search {}", quote(text)))
    }

    #[must_use]
    pub fn from_everything(self) -> Self {
        self.source("from project".to_string())
    }

    fn source(mut self, clause: String) -> Self {
        if matches!(self.clauses.first(), Some(Clause::Source(_))) {
            self.clauses[0] = Clause::Source(clause);
        } else {
            self.clauses.insert(0, Clause::Source(clause));
        }

        self
    }

    ///
    /// FILTERS
    ///

    /// `where <condition>`, optionally opening a bracket.
    #[must_use]
    pub fn where_(self, condition: impl Into<Condition>, open: bool) -> Self {
        self.filter("where", &condition.into(), open, false)
    }

    #[must_use]
    pub fn and_where(self, condition: impl Into<Condition>, open: bool, close: bool) -> Self {
        self.filter("and", &condition.into(), open, close)
    }

    #[must_use]
    pub fn or_where(self, condition: impl Into<Condition>, open: bool, close: bool) -> Self {
        self.filter("or", &condition.into(), open, close)
    }

    fn filter(self, keyword: &str, condition: &Condition, open: bool, close: bool) -> Self {
        let open = if open { "(" } else { "" };
        let close = if close { ")" } else { "" };

        self.push(format!("{keyword} {open}{condition}{close}"))
    }

    ///
    /// SHAPING
    ///

    #[must_use]
    pub fn skip(self, n: usize) -> Self {
        self.push(format!("skip {n}"))
    }

    #[must_use]
    pub fn take(self, n: usize) -> Self {
        self.push(format!("take {n}"))
    }

    #[must_use]
    pub fn distinct(self) -> Self {
        self.push("distinct".to_string())
    }

    #[must_use]
    pub fn select<S: AsRef<str>>(self, fields: impl IntoIterator<Item = S>) -> Self {
        let fields = join(fields.into_iter().map(|f| f.as_ref().to_string()));

        self.push(format!("select {fields}"))
    }

    fn push(mut self, clause: String) -> Self {
        self.clauses.push(Clause::Other(clause));
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(QUERY_MARKER)?;
        for clause in self.clauses() {
            write!(f, " {clause}")?;
        }

        Ok(())
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
