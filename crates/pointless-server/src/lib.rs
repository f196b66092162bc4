//! pointless-status server library entry.
//!
//! Wires config, the sampler, and the HTTP surface around the core renderer.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod sampler;
pub mod transport;
