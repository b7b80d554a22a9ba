// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prometheus wiring for the reporter-metrics adapter.
//!
//! Wraps a `metrics-exporter-prometheus` recorder around
//! [`RecorderReporterMetrics`] and exposes the collected metrics in
//! Prometheus text format via [`PrometheusReporterMetrics::render`],
//! suitable for serving from a /metrics endpoint.

use std::sync::Arc;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use spanline_core::{DropCause, ReporterMetrics, SpanlineError};

use crate::RecorderReporterMetrics;

/// A [`ReporterMetrics`] backed by a Prometheus registry.
pub struct PrometheusReporterMetrics {
    inner: RecorderReporterMetrics,
    handle: PrometheusHandle,
}

impl PrometheusReporterMetrics {
    /// Creates an adapter with its own private Prometheus registry.
    ///
    /// Nothing is installed process-wide; callers that also use the
    /// `metrics!` macros want [`PrometheusReporterMetrics::install`].
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        Self {
            inner: RecorderReporterMetrics::from_recorder(recorder),
            handle,
        }
    }

    /// Creates an adapter and installs its recorder as the process-global
    /// metrics-rs recorder.
    ///
    /// Only one recorder can be installed per process. Returns an error
    /// if a recorder is already installed.
    pub fn install() -> Result<Self, SpanlineError> {
        let recorder = Arc::new(PrometheusBuilder::new().build_recorder());
        let handle = recorder.handle();

        metrics::set_global_recorder(Arc::clone(&recorder)).map_err(|e| {
            SpanlineError::Metrics(format!("failed to install Prometheus recorder: {e}"))
        })?;

        tracing::info!("prometheus metrics recorder installed");

        Ok(Self {
            inner: RecorderReporterMetrics::new(recorder),
            handle,
        })
    }

    /// Get a reference to the Prometheus handle for rendering.
    pub fn handle(&self) -> &PrometheusHandle {
        &self.handle
    }

    /// Render all collected metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for PrometheusReporterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ReporterMetrics for PrometheusReporterMetrics {
    fn increment_messages(&self) {
        self.inner.increment_messages();
    }

    fn increment_message_bytes(&self, bytes: u64) {
        self.inner.increment_message_bytes(bytes);
    }

    fn increment_messages_dropped(&self, cause: &dyn DropCause) {
        self.inner.increment_messages_dropped(cause);
    }

    fn increment_spans(&self, count: u64) {
        self.inner.increment_spans(count);
    }

    fn increment_span_bytes(&self, bytes: u64) {
        self.inner.increment_span_bytes(bytes);
    }

    fn increment_spans_dropped(&self, count: u64) {
        self.inner.increment_spans_dropped(count);
    }

    fn update_queued_spans(&self, count: u64) {
        self.inner.update_queued_spans(count);
    }

    fn update_queued_bytes(&self, bytes: u64) {
        self.inner.update_queued_bytes(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names;
    use std::fmt;

    #[derive(Debug)]
    struct QueueFull;

    impl fmt::Display for QueueFull {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "queue full")
        }
    }

    impl std::error::Error for QueueFull {}

    // install() is not exercised here: the global recorder slot is
    // per-process and tests share one process.

    #[test]
    fn render_exposes_namespaced_metrics() {
        let metrics = PrometheusReporterMetrics::new();
        metrics.increment_messages();
        metrics.increment_message_bytes(128);
        metrics.update_queued_spans(7);

        let rendered = metrics.render();
        assert!(rendered.contains(names::MESSAGES));
        assert!(rendered.contains(names::MESSAGE_BYTES));
        assert!(rendered.contains(names::QUEUED_SPANS));
    }

    #[test]
    fn render_tags_drop_counters_with_the_cause() {
        let metrics = PrometheusReporterMetrics::new();
        metrics.increment_messages_dropped(&QueueFull);

        let rendered = metrics.render();
        assert!(rendered.contains(names::MESSAGES_DROPPED));
        assert!(rendered.contains("cause=\"QueueFull\""));
    }

    #[test]
    fn registries_are_private_per_instance() {
        let a = PrometheusReporterMetrics::new();
        let b = PrometheusReporterMetrics::new();
        a.increment_spans(5);

        assert!(a.render().contains(names::SPANS));
        assert!(!b.render().contains("spanline_reporter_spans_total 5"));
    }
}
