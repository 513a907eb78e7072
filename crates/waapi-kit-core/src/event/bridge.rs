use crate::{
    Error,
    client::Client,
    event::{Event, EventArgs, ListenerId, SubscriptionBuilder, SubscriptionRecord, Topic},
    gateway::Args,
};
use serde_json::json;
use std::{fmt, sync::Arc};
use tracing::debug;

///
/// Bridge
///
/// Connects one remote topic to one local [`Event`]. Starts unsubscribed;
/// every `subscribe` call adds an independent registration, all of which
/// feed the same event. Remaining registrations are released on drop.
///

pub struct Bridge<A: EventArgs> {
    client: Client,
    topic: Topic<A>,
    event: Arc<Event<A>>,
    records: Vec<SubscriptionRecord>,
}

impl<A: EventArgs> Bridge<A> {
    #[must_use]
    pub fn new(client: &Client, topic: Topic<A>) -> Self {
        Self {
            client: client.clone(),
            topic,
            event: Arc::new(Event::new()),
            records: Vec::new(),
        }
    }

    #[must_use]
    pub const fn topic(&self) -> Topic<A> {
        self.topic
    }

    #[must_use]
    pub const fn event(&self) -> &Arc<Event<A>> {
        &self.event
    }

    pub fn connect(&self, listener: impl Fn(&A) + Send + Sync + 'static) -> ListenerId {
        self.event.connect(listener)
    }

    pub fn disconnect(&self, id: ListenerId) -> bool {
        self.event.disconnect(id)
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        !self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[SubscriptionRecord] {
        &self.records
    }

    /// Subscribe with the identity projection as the only option.
    pub fn subscribe(&mut self) -> Result<bool, Error> {
        self.subscribe_with(Args::new())
    }

    /// subscribe_with
    /// Subscribe with `extra` merged over the identity projection.
    /// `Ok(false)` when the gateway refused.
    pub fn subscribe_with(&mut self, extra: Args) -> Result<bool, Error> {
        let returns = &self.client.config().default_return;

        let record = SubscriptionBuilder::new(self.topic.name())
            .option("return", json!(returns))
            .options(extra)
            .decoder(A::decode)
            .dispatch_to(Arc::clone(&self.event))
            .register(&self.client)?;

        let Some(record) = record else {
            return Ok(false);
        };

        debug!(topic = %self.topic, handle = %record.handle, "subscribed");
        self.records.push(record);

        Ok(true)
    }

    /// Release every registration; returns how many the gateway confirmed.
    pub fn unsubscribe(&mut self) -> usize {
        let client = &self.client;

        self.records
            .drain(..)
            .filter(|r| client.unsubscribe_raw(&r.topic, r.handle))
            .count()
    }
}

impl<A: EventArgs> Drop for Bridge<A> {
    fn drop(&mut self) {
        if self.is_subscribed() {
            self.unsubscribe();
        }
    }
}

impl<A: EventArgs> fmt::Debug for Bridge<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("topic", &self.topic)
            .field("event", &self.event)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
