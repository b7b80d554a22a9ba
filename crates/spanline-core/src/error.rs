// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the Spanline workspace.

use thiserror::Error;

/// The primary error type used by Spanline crates.
///
/// The [`ReporterMetrics`](crate::ReporterMetrics) operations themselves
/// are infallible; this type covers backend setup paths such as installing
/// a metrics recorder.
#[derive(Debug, Error)]
pub enum SpanlineError {
    /// Metrics backend errors (recorder installation, exporter setup).
    #[error("metrics error: {0}")]
    Metrics(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
