// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporter-metrics capability trait.

use crate::cause::DropCause;

/// Instrumentation hooks invoked by the span-reporting pipeline whenever
/// it sends, batches, or drops telemetry.
///
/// Every operation is synchronous and non-blocking: implementations
/// forward to pre-registered counters and gauges and return immediately.
/// Operations never fail; errors from an underlying metrics backend
/// propagate as that backend defines.
///
/// An adapter is shared across submission and flush threads, usually as
/// an `Arc<dyn ReporterMetrics>`.
pub trait ReporterMetrics: Send + Sync + 'static {
    /// Records one message sent to the collector.
    fn increment_messages(&self);

    /// Records the encoded size of a sent message.
    fn increment_message_bytes(&self, bytes: u64);

    /// Records a message dropped because of `cause`.
    ///
    /// Drops are counted per distinct concrete error type, one counter
    /// per type, created on first occurrence and reused afterwards.
    fn increment_messages_dropped(&self, cause: &dyn DropCause);

    /// Records spans handed to the reporter.
    fn increment_spans(&self, count: u64);

    /// Records the encoded size of reported spans.
    fn increment_span_bytes(&self, bytes: u64);

    /// Records spans discarded before they reached the collector.
    fn increment_spans_dropped(&self, count: u64);

    /// Overwrites the queued-spans gauge with the current queue depth.
    fn update_queued_spans(&self, count: u64);

    /// Overwrites the queued-bytes gauge with the current backlog size.
    fn update_queued_bytes(&self, bytes: u64);
}

/// A [`ReporterMetrics`] that discards every recording.
///
/// The default wiring for pipelines that have no metrics backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporterMetrics;

impl ReporterMetrics for NoopReporterMetrics {
    fn increment_messages(&self) {}

    fn increment_message_bytes(&self, _bytes: u64) {}

    fn increment_messages_dropped(&self, _cause: &dyn DropCause) {}

    fn increment_spans(&self, _count: u64) {}

    fn increment_span_bytes(&self, _bytes: u64) {}

    fn increment_spans_dropped(&self, _count: u64) {}

    fn update_queued_spans(&self, _count: u64) {}

    fn update_queued_bytes(&self, _bytes: u64) {}
}
