use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Accumulates validation messages, optionally routed under a key
/// (`Sound`, `Sound.OutputBus`, ...), so a single build reports every
/// problem at once instead of stopping at the first.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Record a message at this level.
    pub fn add(&mut self, message: impl fmt::Display) {
        self.messages.push(message.to_string());
    }

    /// Record a message under a route key.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl fmt::Display) {
        self.children.entry(route.into()).or_default().add(message);
    }

    /// Merge another tree under a route key; empty trees are dropped.
    pub fn merge_at(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let entry = self.children.entry(route.into()).or_default();
        entry.messages.extend(other.messages);
        for (key, child) in other.children {
            entry.merge_at(key, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages, including routed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `route: message` lines, depth-first in route order.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.flatten_into(None, &mut out);

        out
    }

    fn flatten_into(&self, prefix: Option<&str>, out: &mut Vec<String>) {
        for message in &self.messages {
            match prefix {
                Some(route) => out.push(format!("{route}: {message}")),
                None => out.push(message.clone()),
            }
        }

        for (key, child) in &self.children {
            let route = match prefix {
                Some(route) => format!("{route}.{key}"),
                None => key.clone(),
            };
            child.flatten_into(Some(&route), out);
        }
    }

    /// Ok when nothing was recorded, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flatten().join("; "))
    }
}

impl std::error::Error for ErrorTree {}

///
/// err
/// format a message straight into an ErrorTree
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn routed_messages_flatten_with_prefix() {
        let mut errs = ErrorTree::new();
        errs.add("top");
        errs.add_at("Sound", "bad kind");

        let mut child = ErrorTree::new();
        err!(child, "unknown kind '{}'", "Bus");
        errs.merge_at("Sound", child);

        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs.flatten(),
            vec![
                "top".to_string(),
                "Sound: bad kind".to_string(),
                "Sound: unknown kind 'Bus'".to_string(),
            ]
        );
    }

    #[test]
    fn merging_an_empty_tree_records_nothing() {
        let mut errs = ErrorTree::new();
        errs.merge_at("Sound", ErrorTree::new());

        assert!(errs.is_empty());
        assert!(errs.result().is_ok());
    }
}
