//! `sysinfo`-backed host metrics.

use std::sync::{Mutex, MutexGuard};

use pointless_core::error::{PointlessError, Result};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use super::HostMetrics;

/// Host metrics read from a retained [`System`].
///
/// CPU usage is the utilization since the previous refresh, the same way a
/// zero-interval sample works: no sleeping between two readings. The baseline
/// is primed at construction so the first request has something to compare
/// against.
pub struct SysinfoMetrics {
    sys: Mutex<System>,
}

impl SysinfoMetrics {
    pub fn new() -> Self {
        let mut sys = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );
        sys.refresh_cpu_usage();
        sys.refresh_memory_specifics(MemoryRefreshKind::new().with_ram());
        Self { sys: Mutex::new(sys) }
    }

    fn lock(&self, metric: &'static str) -> Result<MutexGuard<'_, System>> {
        self.sys.lock().map_err(|_| PointlessError::SampleUnavailable {
            metric,
            reason: "sampler lock poisoned".into(),
        })
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HostMetrics for SysinfoMetrics {
    fn cpu_percent(&self) -> Result<f64> {
        let mut sys = self.lock("cpu")?;
        sys.refresh_cpu_usage();
        if sys.cpus().is_empty() {
            return Err(PointlessError::SampleUnavailable {
                metric: "cpu",
                reason: "no cpus reported".into(),
            });
        }
        finite("cpu", f64::from(sys.global_cpu_usage()))
    }

    fn memory_percent(&self) -> Result<f64> {
        let mut sys = self.lock("memory")?;
        sys.refresh_memory_specifics(MemoryRefreshKind::new().with_ram());
        let total = sys.total_memory();
        if total == 0 {
            return Err(PointlessError::SampleUnavailable {
                metric: "memory",
                reason: "total memory reported as zero".into(),
            });
        }
        finite("memory", sys.used_memory() as f64 * 100.0 / total as f64)
    }
}

fn finite(metric: &'static str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PointlessError::SampleUnavailable {
            metric,
            reason: format!("non-finite reading {v}"),
        })
    }
}
