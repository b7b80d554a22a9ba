// SPDX-FileCopyrightText: 2026 Spanline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drop-cause identity.
//!
//! When a message is dropped the reporter records the failure under a
//! counter tagged with the cause's type name, one counter per distinct
//! error type. The capability trait must stay object-safe, so identity
//! and name are captured here at the call site, before type erasure.

use std::any::TypeId;
use std::error::Error;

/// An error whose concrete type identifies a drop cause.
///
/// Blanket-implemented for every `E: Error + 'static`; callers pass any
/// concrete error as `&dyn DropCause` without extra ceremony. Identity is
/// the concrete type, so boxed trait objects all key as the box type —
/// pass the underlying error when a per-type breakdown matters.
pub trait DropCause: Error {
    /// Stable identity of the concrete error type.
    fn cause_id(&self) -> TypeId;

    /// Full path of the concrete error type.
    fn cause_type_name(&self) -> &'static str;
}

impl<E: Error + 'static> DropCause for E {
    fn cause_id(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn cause_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }
}

/// Reduces a full type path to its last segment, with any generic
/// arguments stripped: `std::io::Error` becomes `Error`,
/// `tokio::sync::mpsc::error::SendError<Span>` becomes `SendError`.
pub fn simple_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct QueueFull;

    impl fmt::Display for QueueFull {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "queue full")
        }
    }

    impl Error for QueueFull {}

    #[test]
    fn cause_id_matches_concrete_type() {
        let cause = QueueFull;
        let erased: &dyn DropCause = &cause;
        assert_eq!(erased.cause_id(), TypeId::of::<QueueFull>());
    }

    #[test]
    fn cause_ids_differ_between_types() {
        let a: &dyn DropCause = &QueueFull;
        let b = std::io::Error::other("boom");
        let b: &dyn DropCause = &b;
        assert_ne!(a.cause_id(), b.cause_id());
    }

    #[test]
    fn cause_type_name_is_full_path() {
        let erased: &dyn DropCause = &QueueFull;
        assert!(erased.cause_type_name().ends_with("QueueFull"));
    }

    #[test]
    fn simple_type_name_strips_path() {
        assert_eq!(simple_type_name("std::io::Error"), "Error");
        assert_eq!(simple_type_name("QueueFull"), "QueueFull");
    }

    #[test]
    fn simple_type_name_strips_generics() {
        assert_eq!(
            simple_type_name("tokio::sync::mpsc::error::SendError<alloc::vec::Vec<u8>>"),
            "SendError"
        );
        assert_eq!(simple_type_name("alloc::boxed::Box<dyn core::error::Error>"), "Box");
    }
}
