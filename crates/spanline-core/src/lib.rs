// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Spanline span-reporting toolkit.
//!
//! This crate provides the reporter-metrics capability trait, the
//! drop-cause identity abstraction, the shared error type, and two stock
//! [`ReporterMetrics`] implementations (`Noop` and `InMemory`). Backend
//! adapters such as `spanline-metrics` implement the trait defined here.

pub mod cause;
pub mod error;
pub mod inmemory;
pub mod reporter;

// Re-export key items at crate root for ergonomic imports.
pub use cause::{simple_type_name, DropCause};
pub use error::SpanlineError;
pub use inmemory::InMemoryReporterMetrics;
pub use reporter::{NoopReporterMetrics, ReporterMetrics};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanline_error_has_all_variants() {
        let _metrics = SpanlineError::Metrics("test".into());
        let _internal = SpanlineError::Internal("test".into());
    }

    #[test]
    fn stock_implementations_are_reporter_metrics() {
        // If either stock implementation stops satisfying the capability
        // trait, this test won't compile.
        fn _assert_reporter_metrics<T: ReporterMetrics>() {}
        _assert_reporter_metrics::<NoopReporterMetrics>();
        _assert_reporter_metrics::<InMemoryReporterMetrics>();
    }

    #[test]
    fn trait_objects_are_usable() {
        let reporter: &dyn ReporterMetrics = &NoopReporterMetrics;
        reporter.increment_messages();
        reporter.increment_spans(3);
    }
}
