// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory reporter metrics.
//!
//! Keeps every recording in process-local atomics with read accessors.
//! Useful as a test double for pipeline code and for embedders that want
//! to poll reporter health without a metrics backend.

use std::any::TypeId;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::cause::{simple_type_name, DropCause};
use crate::reporter::ReporterMetrics;

struct CauseCell {
    label: &'static str,
    count: AtomicU64,
}

/// A [`ReporterMetrics`] backed by process-local atomics.
#[derive(Default)]
pub struct InMemoryReporterMetrics {
    messages: AtomicU64,
    message_bytes: AtomicU64,
    messages_dropped: DashMap<TypeId, CauseCell>,
    spans: AtomicU64,
    span_bytes: AtomicU64,
    spans_dropped: AtomicU64,
    queued_spans: AtomicU64,
    queued_bytes: AtomicU64,
}

impl InMemoryReporterMetrics {
    /// Creates an instance with all counters and gauges at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far.
    pub fn messages(&self) -> u64 {
        self.messages.load(Ordering::Relaxed)
    }

    /// Total encoded bytes of sent messages.
    pub fn message_bytes(&self) -> u64 {
        self.message_bytes.load(Ordering::Relaxed)
    }

    /// Spans handed to the reporter so far.
    pub fn spans(&self) -> u64 {
        self.spans.load(Ordering::Relaxed)
    }

    /// Total encoded bytes of reported spans.
    pub fn span_bytes(&self) -> u64 {
        self.span_bytes.load(Ordering::Relaxed)
    }

    /// Spans discarded before reaching the collector.
    pub fn spans_dropped(&self) -> u64 {
        self.spans_dropped.load(Ordering::Relaxed)
    }

    /// Current queued-spans gauge value.
    pub fn queued_spans(&self) -> u64 {
        self.queued_spans.load(Ordering::Relaxed)
    }

    /// Current queued-bytes gauge value.
    pub fn queued_bytes(&self) -> u64 {
        self.queued_bytes.load(Ordering::Relaxed)
    }

    /// Messages dropped because of the concrete error type `E`.
    pub fn messages_dropped_for<E: std::error::Error + 'static>(&self) -> u64 {
        self.messages_dropped
            .get(&TypeId::of::<E>())
            .map(|cell| cell.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Messages dropped across all causes.
    pub fn total_messages_dropped(&self) -> u64 {
        self.messages_dropped
            .iter()
            .map(|cell| cell.count.load(Ordering::Relaxed))
            .sum()
    }

    /// Number of distinct drop causes seen so far.
    pub fn dropped_cause_count(&self) -> usize {
        self.messages_dropped.len()
    }

    /// Per-cause drop counts, labeled with the cause's simple type name.
    pub fn messages_dropped_by_cause(&self) -> Vec<(&'static str, u64)> {
        self.messages_dropped
            .iter()
            .map(|cell| (cell.label, cell.count.load(Ordering::Relaxed)))
            .collect()
    }
}

impl ReporterMetrics for InMemoryReporterMetrics {
    fn increment_messages(&self) {
        self.messages.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_message_bytes(&self, bytes: u64) {
        self.message_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    fn increment_messages_dropped(&self, cause: &dyn DropCause) {
        // entry() holds the shard lock across the vacancy check, so two
        // racing first drops of one type still create a single cell.
        let cell = self
            .messages_dropped
            .entry(cause.cause_id())
            .or_insert_with(|| CauseCell {
                label: simple_type_name(cause.cause_type_name()),
                count: AtomicU64::new(0),
            });
        cell.count.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_spans(&self, count: u64) {
        self.spans.fetch_add(count, Ordering::Relaxed);
    }

    fn increment_span_bytes(&self, bytes: u64) {
        self.span_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    fn increment_spans_dropped(&self, count: u64) {
        self.spans_dropped.fetch_add(count, Ordering::Relaxed);
    }

    fn update_queued_spans(&self, count: u64) {
        self.queued_spans.store(count, Ordering::Relaxed);
    }

    fn update_queued_bytes(&self, bytes: u64) {
        self.queued_bytes.store(bytes, Ordering::Relaxed);
    }
}
