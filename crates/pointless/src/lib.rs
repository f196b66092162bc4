//! Top-level facade crate for pointless-status.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use pointless_core::*;
}

pub mod server {
    pub use pointless_server::*;
}
