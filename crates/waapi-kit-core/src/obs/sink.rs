use serde::Serialize;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent<'a> {
    Call { endpoint: &'a str, ok: bool },
    Subscribed { topic: &'a str },
    SubscribeFailed { topic: &'a str },
    Released { topic: &'a str },
    PayloadDecoded { topic: &'a str, listeners: usize },
    PayloadSkipped { topic: &'a str },
    DecodeFailed { topic: &'a str },
}

///
/// MetricsSink
///

pub trait MetricsSink: Send + Sync {
    fn record(&self, event: MetricsEvent<'_>);
}

///
/// MetricsReport
/// point-in-time snapshot of a CounterSink
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    pub calls: u64,
    pub failed_calls: u64,
    pub subscriptions: u64,
    pub failed_subscriptions: u64,
    pub releases: u64,
    pub payloads_decoded: u64,
    pub payloads_skipped: u64,
    pub decode_failures: u64,
    pub listener_invocations: u64,
}

///
/// CounterSink
///
/// Lock-free counters; always installed on a client.
///

#[derive(Debug, Default)]
pub struct CounterSink {
    calls: AtomicU64,
    failed_calls: AtomicU64,
    subscriptions: AtomicU64,
    failed_subscriptions: AtomicU64,
    releases: AtomicU64,
    payloads_decoded: AtomicU64,
    payloads_skipped: AtomicU64,
    decode_failures: AtomicU64,
    listener_invocations: AtomicU64,
}

impl CounterSink {
    #[must_use]
    pub fn report(&self) -> MetricsReport {
        let load = |counter: &AtomicU64| counter.load(Ordering::Relaxed);

        MetricsReport {
            calls: load(&self.calls),
            failed_calls: load(&self.failed_calls),
            subscriptions: load(&self.subscriptions),
            failed_subscriptions: load(&self.failed_subscriptions),
            releases: load(&self.releases),
            payloads_decoded: load(&self.payloads_decoded),
            payloads_skipped: load(&self.payloads_skipped),
            decode_failures: load(&self.decode_failures),
            listener_invocations: load(&self.listener_invocations),
        }
    }
}

impl MetricsSink for CounterSink {
    fn record(&self, event: MetricsEvent<'_>) {
        let bump = |counter: &AtomicU64, n: u64| {
            counter.fetch_add(n, Ordering::Relaxed);
        };

        match event {
            MetricsEvent::Call { ok, .. } => {
                bump(&self.calls, 1);
                if !ok {
                    bump(&self.failed_calls, 1);
                }
            }
            MetricsEvent::Subscribed { .. } => bump(&self.subscriptions, 1),
            MetricsEvent::SubscribeFailed { .. } => bump(&self.failed_subscriptions, 1),
            MetricsEvent::Released { .. } => bump(&self.releases, 1),
            MetricsEvent::PayloadDecoded { listeners, .. } => {
                bump(&self.payloads_decoded, 1);
                bump(&self.listener_invocations, listeners as u64);
            }
            MetricsEvent::PayloadSkipped { .. } => bump(&self.payloads_skipped, 1),
            MetricsEvent::DecodeFailed { .. } => bump(&self.decode_failures, 1),
        }
    }
}

///
/// Metrics
///
/// Cloneable fan-out: the built-in counters plus an optional caller sink.
/// Subscription handlers hold a clone so they never keep the client alive.
///

#[derive(Clone, Default)]
pub struct Metrics {
    counters: Arc<CounterSink>,
    extra: Option<Arc<dyn MetricsSink>>,
}

impl Metrics {
    #[must_use]
    pub fn with_sink(sink: Arc<dyn MetricsSink>) -> Self {
        Self {
            counters: Arc::default(),
            extra: Some(sink),
        }
    }

    pub fn record(&self, event: MetricsEvent<'_>) {
        self.counters.record(event);
        if let Some(extra) = &self.extra {
            extra.record(event);
        }
    }

    #[must_use]
    pub fn report(&self) -> MetricsReport {
        self.counters.report()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("counters", &self.counters)
            .field("extra", &self.extra.is_some())
            .finish()
    }
}

///
/// TESTS
///
