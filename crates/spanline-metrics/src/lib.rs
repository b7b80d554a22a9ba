// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporter-metrics adapter for the Spanline span-reporting toolkit.
//!
//! Implements [`ReporterMetrics`] by delegating to a metrics-rs
//! [`Recorder`] handed in at construction, so any backend that speaks the
//! metrics-rs facade (Prometheus, statsd, an in-process debugging
//! recorder) can collect reporter telemetry. A ready-made Prometheus
//! wiring lives in [`prometheus`].

pub mod prometheus;

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use metrics::{Counter, Gauge, Key, KeyName, Label, Level, Metadata, Recorder, Unit};

use spanline_core::{simple_type_name, DropCause, ReporterMetrics};

pub use prometheus::PrometheusReporterMetrics;

/// Metric names. All share the `spanline_reporter_` namespace prefix,
/// including the cause-tagged drop counter.
pub mod names {
    /// Messages sent to the collector.
    pub const MESSAGES: &str = "spanline_reporter_messages_total";
    /// Encoded bytes of sent messages.
    pub const MESSAGE_BYTES: &str = "spanline_reporter_message_bytes_total";
    /// Messages dropped, labeled by `cause`.
    pub const MESSAGES_DROPPED: &str = "spanline_reporter_messages_dropped_total";
    /// Spans handed to the reporter.
    pub const SPANS: &str = "spanline_reporter_spans_total";
    /// Encoded bytes of reported spans.
    pub const SPAN_BYTES: &str = "spanline_reporter_span_bytes_total";
    /// Spans discarded before reaching the collector.
    pub const SPANS_DROPPED: &str = "spanline_reporter_spans_dropped_total";
    /// Current queue depth in spans.
    pub const QUEUED_SPANS: &str = "spanline_reporter_queued_spans";
    /// Current queue backlog in bytes.
    pub const QUEUED_BYTES: &str = "spanline_reporter_queued_bytes";
}

static METADATA: Metadata<'static> =
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

/// A [`ReporterMetrics`] that forwards every recording to a metrics-rs
/// [`Recorder`].
///
/// All fixed counters and gauges are registered once at construction and
/// held for the adapter's lifetime; only the cause-tagged drop counters
/// are registered lazily, on the first drop of each error type.
pub struct RecorderReporterMetrics {
    recorder: Arc<dyn Recorder + Send + Sync>,
    messages: Counter,
    message_bytes: Counter,
    messages_dropped: DashMap<TypeId, Counter>,
    spans: Counter,
    span_bytes: Counter,
    spans_dropped: Counter,
    queued_spans: Gauge,
    queued_bytes: Gauge,
}

impl RecorderReporterMetrics {
    /// Creates an adapter delegating to `recorder`.
    ///
    /// Registers descriptions and handles for the fixed metric set.
    pub fn new(recorder: Arc<dyn Recorder + Send + Sync>) -> Self {
        describe_metrics(recorder.as_ref());

        let messages =
            recorder.register_counter(&Key::from_static_name(names::MESSAGES), &METADATA);
        let message_bytes =
            recorder.register_counter(&Key::from_static_name(names::MESSAGE_BYTES), &METADATA);
        let spans = recorder.register_counter(&Key::from_static_name(names::SPANS), &METADATA);
        let span_bytes =
            recorder.register_counter(&Key::from_static_name(names::SPAN_BYTES), &METADATA);
        let spans_dropped =
            recorder.register_counter(&Key::from_static_name(names::SPANS_DROPPED), &METADATA);
        let queued_spans =
            recorder.register_gauge(&Key::from_static_name(names::QUEUED_SPANS), &METADATA);
        let queued_bytes =
            recorder.register_gauge(&Key::from_static_name(names::QUEUED_BYTES), &METADATA);

        Self {
            recorder,
            messages,
            message_bytes,
            messages_dropped: DashMap::new(),
            spans,
            span_bytes,
            spans_dropped,
            queued_spans,
            queued_bytes,
        }
    }

    /// Convenience constructor taking the recorder by value.
    pub fn from_recorder<R>(recorder: R) -> Self
    where
        R: Recorder + Send + Sync + 'static,
    {
        Self::new(Arc::new(recorder))
    }
}

impl ReporterMetrics for RecorderReporterMetrics {
    fn increment_messages(&self) {
        self.messages.increment(1);
    }

    fn increment_message_bytes(&self, bytes: u64) {
        self.message_bytes.increment(bytes);
    }

    fn increment_messages_dropped(&self, cause: &dyn DropCause) {
        // entry() holds the shard lock across the vacancy check, so a
        // racing first drop of the same type never registers twice and
        // the loser's increment lands on the surviving counter. Shards
        // keep unrelated cause types from blocking each other.
        let counter = self
            .messages_dropped
            .entry(cause.cause_id())
            .or_insert_with(|| {
                let key = Key::from_parts(
                    names::MESSAGES_DROPPED,
                    vec![Label::new("cause", simple_type_name(cause.cause_type_name()))],
                );
                self.recorder.register_counter(&key, &METADATA)
            });
        counter.increment(1);
    }

    fn increment_spans(&self, count: u64) {
        self.spans.increment(count);
    }

    fn increment_span_bytes(&self, bytes: u64) {
        self.span_bytes.increment(bytes);
    }

    fn increment_spans_dropped(&self, count: u64) {
        self.spans_dropped.increment(count);
    }

    fn update_queued_spans(&self, count: u64) {
        self.queued_spans.set(count as f64);
    }

    fn update_queued_bytes(&self, bytes: u64) {
        self.queued_bytes.set(bytes as f64);
    }
}

/// Register descriptions and units for the fixed metric set.
fn describe_metrics(recorder: &(dyn Recorder + Send + Sync)) {
    recorder.describe_counter(
        KeyName::from_const_str(names::MESSAGES),
        None,
        "Messages sent to the collector".into(),
    );
    recorder.describe_counter(
        KeyName::from_const_str(names::MESSAGE_BYTES),
        Some(Unit::Bytes),
        "Encoded bytes of sent messages".into(),
    );
    recorder.describe_counter(
        KeyName::from_const_str(names::MESSAGES_DROPPED),
        None,
        "Messages dropped, labeled by cause".into(),
    );
    recorder.describe_counter(
        KeyName::from_const_str(names::SPANS),
        None,
        "Spans handed to the reporter".into(),
    );
    recorder.describe_counter(
        KeyName::from_const_str(names::SPAN_BYTES),
        Some(Unit::Bytes),
        "Encoded bytes of reported spans".into(),
    );
    recorder.describe_counter(
        KeyName::from_const_str(names::SPANS_DROPPED),
        None,
        "Spans discarded before reaching the collector".into(),
    );
    recorder.describe_gauge(
        KeyName::from_const_str(names::QUEUED_SPANS),
        None,
        "Current queue depth in spans".into(),
    );
    recorder.describe_gauge(
        KeyName::from_const_str(names::QUEUED_BYTES),
        Some(Unit::Bytes),
        "Current queue backlog in bytes".into(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_metric_names_share_the_namespace_prefix() {
        let all = [
            names::MESSAGES,
            names::MESSAGE_BYTES,
            names::MESSAGES_DROPPED,
            names::SPANS,
            names::SPAN_BYTES,
            names::SPANS_DROPPED,
            names::QUEUED_SPANS,
            names::QUEUED_BYTES,
        ];
        for name in all {
            assert!(
                name.starts_with("spanline_reporter_"),
                "{name} is missing the namespace prefix"
            );
        }
    }

    #[test]
    fn adapter_is_shareable_across_threads() {
        fn _assert_send_sync<T: Send + Sync>() {}
        _assert_send_sync::<RecorderReporterMetrics>();
    }
}
