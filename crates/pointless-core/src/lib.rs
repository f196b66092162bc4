//! pointless-status core: the snapshot model, peer-address parsing, and the
//! HTML status page renderer.
//!
//! This crate carries no runtime, transport, or OS-sampling dependencies. The
//! server crate produces a [`Snapshot`] per request and hands it to
//! a [`render::Renderer`]; everything here is a pure function of its inputs.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. A status page must
//! come back even when its inputs are degraded, so every fallible path either
//! returns `PointlessError` or maps to a documented fallback value.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod peer;
pub mod render;
pub mod snapshot;

/// Shared result type.
pub use error::{PointlessError, Result};
pub use snapshot::{Snapshot, UNAVAILABLE_PERCENT};
