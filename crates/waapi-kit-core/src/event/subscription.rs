use crate::{
    Error,
    client::Client,
    event::{Dispatch, Event, dispatch},
    gateway::{Args, RawHandler, SubscriptionId},
    obs::MetricsEvent,
    value::DecodeError,
};
use serde_json::Value as JsonValue;
use std::{fmt, sync::Arc};
use tracing::{debug, trace, warn};

/// Turns a raw notification into the typed payload.
pub type Decoder<A> = Arc<dyn Fn(&Args) -> Result<A, DecodeError> + Send + Sync>;

///
/// SubscriptionRecord
///
/// One live gateway registration.
///

#[derive(Clone, Debug, PartialEq)]
pub struct SubscriptionRecord {
    pub topic: String,
    pub options: Args,
    pub handle: SubscriptionId,
}

///
/// SubscriptionBuilder
///
/// Wires a topic to a decoder and a local event. Both must be set before
/// `register`; the missing one is reported instead of subscribing.
///

pub struct SubscriptionBuilder<A> {
    topic: String,
    options: Args,
    decoder: Option<Decoder<A>>,
    target: Option<Arc<Event<A>>>,
}

impl<A: Send + Sync + 'static> SubscriptionBuilder<A> {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            options: Args::new(),
            decoder: None,
            target: None,
        }
    }

    #[must_use]
    pub fn option(mut self, key: &str, value: JsonValue) -> Self {
        self.options.insert(key.to_string(), value);
        self
    }

    /// Merge `extra` into the options; later keys win.
    #[must_use]
    pub fn options(mut self, extra: Args) -> Self {
        self.options.extend(extra);
        self
    }

    #[must_use]
    pub fn decoder(
        mut self,
        decoder: impl Fn(&Args) -> Result<A, DecodeError> + Send + Sync + 'static,
    ) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    #[must_use]
    pub fn dispatch_to(mut self, event: Arc<Event<A>>) -> Self {
        self.target = Some(event);
        self
    }

    /// register
    /// Subscribe through `client`. `Ok(None)` when the gateway refused and
    /// the client is not configured to raise.
    pub fn register(self, client: &Client) -> Result<Option<SubscriptionRecord>, Error> {
        let Self {
            topic,
            options,
            decoder,
            target,
        } = self;

        let Some(decoder) = decoder else {
            return Err(Error::MissingDecoder { topic });
        };
        let Some(target) = target else {
            return Err(Error::MissingDispatchTarget { topic });
        };

        let handler = raw_handler(topic.clone(), client, decoder, target);
        let handle = client.subscribe_raw(&topic, handler, &options)?;

        Ok(handle.map(|handle| SubscriptionRecord {
            topic,
            options,
            handle,
        }))
    }
}

impl<A> fmt::Debug for SubscriptionBuilder<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionBuilder")
            .field("topic", &self.topic)
            .field("options", &self.options)
            .field("decoder", &self.decoder.is_some())
            .field("target", &self.target.is_some())
            .finish()
    }
}

// the handler holds the metrics, not the client, so a live registration
// never keeps the client alive
fn raw_handler<A: Send + Sync + 'static>(
    topic: String,
    client: &Client,
    decoder: Decoder<A>,
    target: Arc<Event<A>>,
) -> RawHandler {
    let metrics = client.metrics().clone();

    Arc::new(move |payload: &Args| match dispatch(&target, payload, |raw| decoder(raw)) {
        Ok(Dispatch::Skipped) => {
            trace!(topic = %topic, "no listeners, payload skipped");
            metrics.record(MetricsEvent::PayloadSkipped { topic: &topic });

            Ok(())
        }
        Ok(Dispatch::Delivered(listeners)) => {
            debug!(topic = %topic, listeners, "payload dispatched");
            metrics.record(MetricsEvent::PayloadDecoded {
                topic: &topic,
                listeners,
            });

            Ok(())
        }
        Err(err) => {
            warn!(topic = %topic, error = %err, "payload decode failed");
            metrics.record(MetricsEvent::DecodeFailed { topic: &topic });

            Err(Error::from(err))
        }
    })
}
