//! Typed event subscriptions.
//!
//! Gateway notifications arrive as raw argument maps. A [`Bridge`] registers
//! one raw handler per subscription; each handler runs the shared
//! [`dispatch`] step, which decodes into the topic's payload type only when
//! the local [`Event`] has listeners.

mod bridge;
mod dispatch;
mod multicast;
mod payload;
mod subscription;
pub mod topic;
mod watch;

#[cfg(test)]
mod tests;

pub use bridge::Bridge;
pub use dispatch::{Dispatch, dispatch};
pub use multicast::{Event, Listener, ListenerId};
pub use payload::{
    ChildAdded, ChildRemoved, EventArgs, NameChanged, NotesChanged, ObjectCreated,
    ObjectPostDeleted, ObjectPreDeleted, ProjectLoaded, ProjectPostClosed, ProjectSaved,
    PropertyChanged, SelectionChanged,
};
pub use subscription::{Decoder, SubscriptionBuilder, SubscriptionRecord};
pub use topic::Topic;
pub use watch::PropertyWatch;
