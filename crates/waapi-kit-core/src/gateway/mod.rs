//! Transport boundary.
//!
//! Everything that talks to the remote authoring application goes through a
//! [`Gateway`]. The crate never opens a connection itself; callers inject an
//! implementation (a websocket client, a test double) behind an `Arc`.

pub mod endpoint;

use crate::Error;
use serde_json::{Map, Value as JsonValue};
use std::{fmt, sync::Arc};

/// Argument and result maps exchanged with the remote system.
pub type Args = Map<String, JsonValue>;

/// Callback invoked by the gateway for each published payload. An `Err`
/// is handed back to the gateway's executor.
pub type RawHandler = Arc<dyn Fn(&Args) -> Result<(), Error> + Send + Sync>;

///
/// SubscriptionId
///
/// Opaque handle returned by [`Gateway::subscribe`].
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

///
/// Gateway
///
/// `None` is the only failure signal. An empty map is a successful call.
///

pub trait Gateway: Send + Sync {
    fn call(&self, endpoint: &str, args: &Args, options: Option<&Args>) -> Option<Args>;

    fn subscribe(
        &self,
        topic: &str,
        handler: RawHandler,
        options: Option<&Args>,
    ) -> Option<SubscriptionId>;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

impl<G: Gateway + ?Sized> Gateway for Arc<G> {
    fn call(&self, endpoint: &str, args: &Args, options: Option<&Args>) -> Option<Args> {
        (**self).call(endpoint, args, options)
    }

    fn subscribe(
        &self,
        topic: &str,
        handler: RawHandler,
        options: Option<&Args>,
    ) -> Option<SubscriptionId> {
        (**self).subscribe(topic, handler, options)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        (**self).unsubscribe(id)
    }
}

/// Rows of a query result (`"return"` array); non-object entries are skipped.
pub(crate) fn returned_rows(result: &Args) -> impl Iterator<Item = &Args> {
    result
        .get("return")
        .and_then(JsonValue::as_array)
        .into_iter()
        .flatten()
        .filter_map(JsonValue::as_object)
}

/// Build an `Args` map from `(key, value)` pairs.
pub(crate) fn args<const N: usize>(pairs: [(&str, JsonValue); N]) -> Args {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
