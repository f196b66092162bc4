//! Sampler: one [`Snapshot`] per inbound request.
//!
//! Reads the peer host, the UTC clock, and host CPU/memory utilization. Any
//! failed reading is logged and replaced by [`UNAVAILABLE_PERCENT`]; the
//! capture itself never fails so the status page always renders.

mod system;

pub use system::SysinfoMetrics;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pointless_core::{error::Result, peer, Snapshot, UNAVAILABLE_PERCENT};

/// OS-metrics collaborator. Both reads are single, synchronous samples.
pub trait HostMetrics: Send + Sync {
    /// Aggregate CPU utilization across all logical cores, in percent.
    fn cpu_percent(&self) -> Result<f64>;
    /// Physical memory in use system-wide, in percent.
    fn memory_percent(&self) -> Result<f64>;
}

#[derive(Clone)]
pub struct Sampler {
    metrics: Arc<dyn HostMetrics>,
}

impl Sampler {
    pub fn new(metrics: Arc<dyn HostMetrics>) -> Self {
        Self { metrics }
    }

    /// Capture a snapshot for a request from `peer` (`host:port`).
    pub fn capture(&self, peer: &str) -> Snapshot {
        self.capture_at(peer, Utc::now())
    }

    /// Same as [`Sampler::capture`] with an explicit clock reading.
    pub fn capture_at(&self, peer: &str, now: DateTime<Utc>) -> Snapshot {
        let host = peer::peer_host(peer);
        if host.is_empty() {
            tracing::debug!(peer = %peer, "peer address has no host part");
        }

        let cpu = reading("cpu", self.metrics.cpu_percent());
        let memory = reading("memory", self.metrics.memory_percent());

        match (cpu, memory) {
            (None, None) => Snapshot::degraded(host, now),
            (cpu, memory) => Snapshot::new(
                host,
                now,
                cpu.unwrap_or(UNAVAILABLE_PERCENT),
                memory.unwrap_or(UNAVAILABLE_PERCENT),
            ),
        }
    }
}

fn reading(metric: &'static str, res: Result<f64>) -> Option<f64> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(metric, code = e.code().as_str(), error = %e, "host metric unavailable");
            None
        }
    }
}
