//! Per-request snapshot of the peer, the clock, and host utilization.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Percentage used in place of a CPU or memory reading that could not be
/// sampled. The page then shows `0.00 %`; logs carry the actual failure.
pub const UNAVAILABLE_PERCENT: f64 = 0.0;

/// Immutable bundle captured once per request and consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    host: String,
    timestamp: DateTime<Utc>,
    cpu_usage: f64,
    memory_usage: f64,
}

impl Snapshot {
    /// Build a snapshot. The timestamp is truncated to whole seconds and both
    /// usages are clamped to `0.0..=100.0`; a NaN or infinite usage becomes
    /// [`UNAVAILABLE_PERCENT`].
    pub fn new(
        host: impl Into<String>,
        timestamp: DateTime<Utc>,
        cpu_usage: f64,
        memory_usage: f64,
    ) -> Self {
        Self {
            host: host.into(),
            timestamp: timestamp.trunc_subsecs(0),
            cpu_usage: normalize_percent(cpu_usage),
            memory_usage: normalize_percent(memory_usage),
        }
    }

    /// Snapshot with both usages unavailable.
    pub fn degraded(host: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(host, timestamp, UNAVAILABLE_PERCENT, UNAVAILABLE_PERCENT)
    }

    /// Client host, empty when the peer address could not be parsed.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn cpu_usage(&self) -> f64 {
        self.cpu_usage
    }

    pub fn memory_usage(&self) -> f64 {
        self.memory_usage
    }
}

fn normalize_percent(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        UNAVAILABLE_PERCENT
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    #[test]
    fn truncates_to_seconds() {
        let ts = Utc
            .with_ymd_and_hms(2024, 3, 1, 14, 22, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(987))
            .unwrap();
        let s = Snapshot::new("203.0.113.5", ts, 12.3, 45.67);
        assert_eq!(s.timestamp_rfc3339(), "2024-03-01T14:22:05Z");
    }

    #[test]
    fn clamps_and_replaces_non_finite_usage() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let s = Snapshot::new("", ts, 130.0, -2.0);
        assert_eq!(s.cpu_usage(), 100.0);
        assert_eq!(s.memory_usage(), 0.0);

        let s = Snapshot::new("", ts, f64::NAN, f64::INFINITY);
        assert_eq!(s.cpu_usage(), UNAVAILABLE_PERCENT);
        assert_eq!(s.memory_usage(), UNAVAILABLE_PERCENT);
    }

    #[test]
    fn degraded_uses_sentinel() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let s = Snapshot::degraded("::1", ts);
        assert_eq!(s.host(), "::1");
        assert_eq!(s.cpu_usage(), UNAVAILABLE_PERCENT);
        assert_eq!(s.memory_usage(), UNAVAILABLE_PERCENT);
    }
}
