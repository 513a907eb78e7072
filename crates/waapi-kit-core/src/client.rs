//! Shared client handle.

use crate::{
    Error,
    config::ClientConfig,
    entity::{Entity, EntityInfo},
    gateway::{self, Args, Gateway, RawHandler, SubscriptionId, endpoint},
    model::{DynProperty, Kind},
    obs::{Metrics, MetricsEvent, MetricsReport, MetricsSink},
    query::Query,
    types::{Guid, ObjectRef},
    value::DecodeError,
};
use serde_json::{Value as JsonValue, json};
use std::sync::Arc;
use tracing::{debug, warn};
use waapi_kit_schema::schema::Schema;

///
/// Client
///
/// Cheap to clone; every entity handle and bridge carries one. Holds the
/// injected gateway, the failure policy and the optional linked schema.
///

#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    gateway: Arc<dyn Gateway>,
    config: ClientConfig,
    schema: Option<Arc<Schema>>,
    metrics: Metrics,
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("config", &self.config)
            .field("schema", &self.schema.is_some())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client with the default configuration and no schema.
    pub fn new(gateway: impl Gateway + 'static) -> Self {
        ClientBuilder::new(gateway).build()
    }

    pub fn builder(gateway: impl Gateway + 'static) -> ClientBuilder {
        ClientBuilder::new(gateway)
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn schema(&self) -> Option<&Schema> {
        self.inner.schema.as_deref()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    #[must_use]
    pub fn metrics_report(&self) -> MetricsReport {
        self.inner.metrics.report()
    }

    ///
    /// CALLS
    ///

    /// call
    /// Forward one call to the gateway and apply the failure policy:
    /// `Ok(None)` by default, `Err(CallFailed)` when configured to raise.
    pub fn call(
        &self,
        endpoint: &str,
        args: &Args,
        options: Option<&Args>,
    ) -> Result<Option<Args>, Error> {
        debug!(endpoint, "gateway call");

        let result = self.inner.gateway.call(endpoint, args, options);
        self.inner.metrics.record(MetricsEvent::Call {
            endpoint,
            ok: result.is_some(),
        });

        if result.is_none() {
            warn!(endpoint, "gateway call failed");
            if self.inner.config.raise_on_failure {
                return Err(Error::CallFailed {
                    endpoint: endpoint.to_string(),
                });
            }
        }

        Ok(result)
    }

    /// Mutation form of [`Client::call`]: only success matters.
    pub fn call_ok(
        &self,
        endpoint: &str,
        args: &Args,
        options: Option<&Args>,
    ) -> Result<bool, Error> {
        self.call(endpoint, args, options).map(|r| r.is_some())
    }

    pub(crate) fn subscribe_raw(
        &self,
        topic: &str,
        handler: RawHandler,
        options: &Args,
    ) -> Result<Option<SubscriptionId>, Error> {
        debug!(topic, "gateway subscribe");

        let handle = self.inner.gateway.subscribe(topic, handler, Some(options));
        if handle.is_some() {
            self.inner
                .metrics
                .record(MetricsEvent::Subscribed { topic });
        } else {
            self.inner
                .metrics
                .record(MetricsEvent::SubscribeFailed { topic });
            warn!(topic, "gateway subscribe failed");
            if self.inner.config.raise_on_failure {
                return Err(Error::SubscribeFailed {
                    topic: topic.to_string(),
                });
            }
        }

        Ok(handle)
    }

    pub(crate) fn unsubscribe_raw(&self, topic: &str, id: SubscriptionId) -> bool {
        let released = self.inner.gateway.unsubscribe(id);
        if released {
            self.inner.metrics.record(MetricsEvent::Released { topic });
        } else {
            warn!(topic, %id, "gateway unsubscribe failed");
        }

        released
    }

    ///
    /// ENTITIES
    ///

    /// Untyped handle; no remote call is made.
    #[must_use]
    pub fn entity(&self, id: Guid) -> Entity {
        Entity::new(self.clone(), id)
    }

    #[must_use]
    pub fn entity_of<K: Kind>(&self, id: Guid) -> Entity<K> {
        Entity::new(self.clone(), id)
    }

    /// resolve
    /// Look up any reference form and return a handle to the match.
    pub fn resolve(&self, reference: &ObjectRef) -> Result<Option<Entity>, Error> {
        if let Some(id) = reference.as_guid() {
            return Ok(id.is_valid().then(|| self.entity(id)));
        }

        let query = Query::new().from_refs([reference.clone()]);
        let found = self
            .query(&query)?
            .into_iter()
            .find(|info| info.id.is_valid())
            .map(|info| self.entity(info.id));

        Ok(found)
    }

    ///
    /// QUERIES
    ///

    /// query
    /// Run `query` and decode the identity projection of each row.
    /// A failed call yields an empty list.
    pub fn query(&self, query: &Query) -> Result<Vec<EntityInfo>, Error> {
        let fields = self.inner.config.default_return.clone();
        let rows = self.query_rows(query, fields.iter().map(String::as_str))?;

        rows.iter()
            .map(EntityInfo::from_row)
            .collect::<Result<_, DecodeError>>()
            .map_err(Error::from)
    }

    /// Raw rows carrying exactly `fields`.
    pub fn query_fields(&self, query: &Query, fields: &[&str]) -> Result<Vec<Args>, Error> {
        self.query_rows(query, fields.iter().copied())
    }

    fn query_rows<'a>(
        &self,
        query: &Query,
        fields: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Args>, Error> {
        let waql = query.to_string();
        debug!(%waql, "waql query");

        let args = gateway::args([("waql", JsonValue::String(waql))]);
        let returns: Vec<JsonValue> = fields.into_iter().map(JsonValue::from).collect();
        let options = gateway::args([("return", json!(returns))]);

        let rows = self
            .call(endpoint::OBJECT_GET, &args, Some(&options))?
            .map(|result| gateway::returned_rows(&result).cloned().collect())
            .unwrap_or_default();

        Ok(rows)
    }

    ///
    /// SCHEMA
    ///

    /// Accessor for an attribute known only at runtime.
    pub fn dyn_property(&self, kind: &str, attribute: &str) -> Result<DynProperty, Error> {
        let binding = self
            .schema()
            .and_then(|schema| schema.binding(kind, attribute))
            .ok_or_else(|| Error::UnknownProperty {
                kind: kind.to_string(),
                attribute: attribute.to_string(),
            })?;

        Ok(DynProperty::new(binding.clone()))
    }

    /// Reject attributes a linked schema does not declare on `kind`.
    /// Kinds unknown to the schema, and clients without one, pass.
    pub(crate) fn check_binding(&self, kind: &str, attribute: &str) -> Result<(), Error> {
        let Some(declared) = self.schema().and_then(|schema| schema.kind(kind)) else {
            return Ok(());
        };

        if declared.binding(attribute).is_none() {
            return Err(Error::UnknownProperty {
                kind: kind.to_string(),
                attribute: attribute.to_string(),
            });
        }

        Ok(())
    }
}

///
/// ClientBuilder
///

pub struct ClientBuilder {
    gateway: Arc<dyn Gateway>,
    config: ClientConfig,
    schema: Option<Arc<Schema>>,
    metrics: Metrics,
}

impl ClientBuilder {
    pub fn new(gateway: impl Gateway + 'static) -> Self {
        Self {
            gateway: Arc::new(gateway),
            config: ClientConfig::default(),
            schema: None,
            metrics: Metrics::default(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn raise_on_failure(mut self, raise: bool) -> Self {
        self.config.raise_on_failure = raise;
        self
    }

    #[must_use]
    pub fn schema(mut self, schema: impl Into<Arc<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn metrics_sink(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Metrics::with_sink(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> Client {
        Client {
            inner: Arc::new(ClientInner {
                gateway: self.gateway,
                config: self.config,
                schema: self.schema,
                metrics: self.metrics,
            }),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGateway;
    use serde_json::json;

    const ID: &str = "{1C2B3A4D-5E6F-4A1B-9C8D-0E1F2A3B4C5D}";

    #[test]
    fn failed_call_is_none_unless_raising() {
        let mock = Arc::new(MockGateway::new());
        let quiet = Client::new(mock.clone());
        assert!(matches!(quiet.call("x.y", &Args::new(), None), Ok(None)));

        let loud = Client::builder(mock.clone()).raise_on_failure(true).build();
        let err = loud.call("x.y", &Args::new(), None).unwrap_err();
        assert!(err.is_remote());

        assert_eq!(quiet.metrics_report().failed_calls, 1);
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn empty_result_is_success() {
        let mock = Arc::new(MockGateway::new());
        mock.respond(endpoint::OBJECT_DELETE, json!({}));

        let client = Client::new(mock);
        assert_eq!(
            client
                .call_ok(endpoint::OBJECT_DELETE, &Args::new(), None)
                .ok(),
            Some(true)
        );
    }

    #[test]
    fn query_sends_waql_and_identity_projection() {
        let mock = Arc::new(MockGateway::new());
        mock.respond(
            endpoint::OBJECT_GET,
            json!({ "return": [{ "id": ID, "name": "Foo", "type": "Sound", "path": "\\A\\Foo" }] }),
        );

        let client = Client::new(mock.clone());
        let found = client.query(&Query::new().from_kinds(["Sound"])).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Foo");

        let call = mock.last_call().unwrap();
        assert_eq!(call.args["waql"], json!("$ from type Sound"));
        assert_eq!(
            call.options.unwrap()["return"],
            json!(["id", "name", "type", "path"])
        );
    }

    #[test]
    fn resolve_by_id_makes_no_call() {
        let mock = Arc::new(MockGateway::new());
        let client = Client::new(mock.clone());
        let id = Guid::parse(ID).unwrap();

        let entity = client.resolve(&ObjectRef::Id(id)).unwrap().unwrap();
        assert_eq!(entity.id(), id);
        assert_eq!(mock.call_count(), 0);

        assert!(
            client
                .resolve(&ObjectRef::Id(Guid::NULL))
                .unwrap()
                .is_none()
        );
    }
}
