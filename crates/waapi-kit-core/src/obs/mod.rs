//! Observability: counters for gateway traffic and event dispatch.
//!
//! Runtime code never touches counters directly; everything flows through
//! [`MetricsEvent`] and [`Metrics::record`].

pub(crate) mod sink;

pub use sink::{CounterSink, Metrics, MetricsEvent, MetricsReport, MetricsSink};
