use crate::{
    Error,
    client::Client,
    entity::Entity,
    event::{Bridge, Event, ListenerId, PropertyChanged, topic},
    gateway,
    model::{Accessor, Kind},
    types::Guid,
};
use serde_json::json;
use std::sync::Arc;

///
/// PropertyWatch
///
/// Fan-in over `propertyChanged`: one narrowed subscription per watched
/// (object, attribute) pair, all delivering into a single event.
///

#[derive(Debug)]
pub struct PropertyWatch {
    bridge: Bridge<PropertyChanged>,
}

impl PropertyWatch {
    #[must_use]
    pub fn new(client: &Client) -> Self {
        Self {
            bridge: Bridge::new(client, topic::PROPERTY_CHANGED),
        }
    }

    #[must_use]
    pub const fn event(&self) -> &Arc<Event<PropertyChanged>> {
        self.bridge.event()
    }

    pub fn connect(
        &self,
        listener: impl Fn(&PropertyChanged) + Send + Sync + 'static,
    ) -> ListenerId {
        self.bridge.connect(listener)
    }

    pub fn disconnect(&self, id: ListenerId) -> bool {
        self.bridge.disconnect(id)
    }

    pub fn watch<K: Kind, A: Accessor>(
        &mut self,
        entity: &Entity<K>,
        accessor: &A,
    ) -> Result<bool, Error> {
        self.watch_id(entity.id(), accessor.attribute())
    }

    pub fn watch_id(&mut self, id: Guid, attribute: &str) -> Result<bool, Error> {
        let narrow = gateway::args([
            ("object", json!(id.to_string())),
            ("property", json!(attribute)),
        ]);

        self.bridge.subscribe_with(narrow)
    }

    /// Watch every pair; returns how many subscriptions succeeded.
    pub fn watch_all<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (Guid, &'a str)>,
    ) -> Result<usize, Error> {
        let mut watched = 0;
        for (id, attribute) in pairs {
            if self.watch_id(id, attribute)? {
                watched += 1;
            }
        }

        Ok(watched)
    }

    /// Release every watch.
    pub fn clear(&mut self) -> usize {
        self.bridge.unsubscribe()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bridge.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
