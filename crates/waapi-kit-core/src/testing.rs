//! In-memory gateway for tests.

use crate::{
    Error,
    gateway::{Args, Gateway, RawHandler, SubscriptionId},
};
use serde_json::Value as JsonValue;
use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    sync::{Mutex, MutexGuard, PoisonError},
};

///
/// RecordedCall
///

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub args: Args,
    pub options: Option<Args>,
}

///
/// RecordedSubscription
///

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSubscription {
    pub id: SubscriptionId,
    pub topic: String,
    pub options: Option<Args>,
}

///
/// MockGateway
///
/// Scripted responses per endpoint, a log of every call, and live
/// subscriptions that tests can publish to with [`MockGateway::emit`].
/// Endpoints without a scripted response fail (`None`).
///

#[derive(Default)]
pub struct MockGateway {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    queued: HashMap<String, VecDeque<Option<Args>>>,
    fixed: HashMap<String, Args>,
    calls: Vec<RecordedCall>,
    subscriptions: BTreeMap<SubscriptionId, (RecordedSubscription, RawHandler)>,
    next_id: u64,
    fail_subscribe: bool,
}

impl MockGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer every call to `endpoint` with `result` (a JSON object).
    pub fn respond(&self, endpoint: &str, result: JsonValue) {
        self.state()
            .fixed
            .insert(endpoint.to_string(), into_args(result));
    }

    /// Answer the next call to `endpoint` with `result`, ahead of any
    /// fixed response.
    pub fn respond_once(&self, endpoint: &str, result: JsonValue) {
        self.state()
            .queued
            .entry(endpoint.to_string())
            .or_default()
            .push_back(Some(into_args(result)));
    }

    /// Fail the next call to `endpoint`.
    pub fn fail_once(&self, endpoint: &str) {
        self.state()
            .queued
            .entry(endpoint.to_string())
            .or_default()
            .push_back(None);
    }

    pub fn fail_subscriptions(&self, fail: bool) {
        self.state().fail_subscribe = fail;
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    #[must_use]
    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.state()
            .calls
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.state().calls.last().cloned()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    #[must_use]
    pub fn subscriptions(&self) -> Vec<RecordedSubscription> {
        self.state()
            .subscriptions
            .values()
            .map(|(record, _)| record.clone())
            .collect()
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.state().subscriptions.len()
    }

    /// Publish `payload` to every live subscription on `topic`, returning
    /// each handler's result in subscription order.
    pub fn emit(&self, topic: &str, payload: &JsonValue) -> Vec<Result<(), Error>> {
        let handlers: Vec<RawHandler> = self
            .state()
            .subscriptions
            .values()
            .filter(|(record, _)| record.topic == topic)
            .map(|(_, handler)| handler.clone())
            .collect();

        let payload = into_args(payload.clone());
        handlers.iter().map(|handler| handler(&payload)).collect()
    }
}

impl Gateway for MockGateway {
    fn call(&self, endpoint: &str, args: &Args, options: Option<&Args>) -> Option<Args> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            endpoint: endpoint.to_string(),
            args: args.clone(),
            options: options.cloned(),
        });

        if let Some(next) = state.queued.get_mut(endpoint).and_then(VecDeque::pop_front) {
            return next;
        }

        state.fixed.get(endpoint).cloned()
    }

    fn subscribe(
        &self,
        topic: &str,
        handler: RawHandler,
        options: Option<&Args>,
    ) -> Option<SubscriptionId> {
        let mut state = self.state();
        if state.fail_subscribe {
            return None;
        }

        state.next_id += 1;
        let id = SubscriptionId(state.next_id);
        let record = RecordedSubscription {
            id,
            topic: topic.to_string(),
            options: options.cloned(),
        };
        state.subscriptions.insert(id, (record, handler));

        Some(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state().subscriptions.remove(&id).is_some()
    }
}

fn into_args(value: JsonValue) -> Args {
    match value {
        JsonValue::Object(map) => map,
        _ => Args::new(),
    }
}
