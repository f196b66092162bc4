//! Status page renderer.
//!
//! The page is a fixed HTML/CSS handlebars template with four slots:
//! `{{client}}`, `{{time}}`, `{{cpu}}` and `{{memory}}`. Slot values are
//! formatted from a [`Snapshot`] and HTML-escaped by handlebars' default
//! escape function, so the output depends only on the snapshot.

use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use serde_json::json;

use crate::error::{PointlessError, Result};
use crate::snapshot::Snapshot;

/// The page template, embedded at compile time.
pub const STATUS_TEMPLATE: &str = include_str!("status.html");

/// Served when the template fails to render at request time.
pub const FALLBACK_PAGE: &str =
    "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"UTF-8\"><title>pointless-status</title></head><body>Server is running!</body></html>\n";

const STATUS: &str = "status";

/// Time-of-day shown on the page, e.g. `14:22:05 (UTC)`.
pub fn display_time(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M:%S (UTC)").to_string()
}

/// Two decimals and a spaced percent sign, e.g. `12.30 %`.
///
/// Rounds the stored binary value correctly, so `50.005` (stored slightly
/// above) becomes `50.01 %` and `99.999` becomes `100.00 %`.
pub fn format_percent(v: f64) -> String {
    format!("{v:.2} %")
}

/// Holds the compiled status template.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Compile the embedded status template.
    pub fn new() -> Result<Self> {
        Self::with_template(STATUS_TEMPLATE)
    }

    /// Compile an explicit template using the same slot names.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars
            .register_template_string(STATUS, template)
            .map_err(|e| PointlessError::Internal(format!("status template invalid: {e}")))?;
        Ok(Self { handlebars })
    }

    /// Render the full status page for one snapshot.
    pub fn render(&self, snapshot: &Snapshot) -> Result<String> {
        let context = json!({
            "client": snapshot.host(),
            "time": display_time(&snapshot.timestamp()),
            "cpu": format_percent(snapshot.cpu_usage()),
            "memory": format_percent(snapshot.memory_usage()),
        });
        self.handlebars
            .render(STATUS, &context)
            .map_err(|e| PointlessError::Internal(format!("status render failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    fn snapshot(host: &str) -> Snapshot {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 22, 5).unwrap();
        Snapshot::new(host, ts, 12.3, 45.67)
    }

    #[test]
    fn template_has_each_slot_once() {
        for slot in ["{{client}}", "{{time}}", "{{cpu}}", "{{memory}}"] {
            assert_eq!(STATUS_TEMPLATE.matches(slot).count(), 1, "slot={slot}");
        }
    }

    #[test]
    fn time_of_day_from_structured_value() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 4, 2, 5).unwrap();
        assert_eq!(display_time(&ts), "04:02:05 (UTC)");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.0), "0.00 %");
        assert_eq!(format_percent(0.001), "0.00 %");
        assert_eq!(format_percent(50.005), "50.01 %");
        assert_eq!(format_percent(99.999), "100.00 %");
        assert_eq!(format_percent(100.0), "100.00 %");
        assert_eq!(format_percent(12.3), "12.30 %");
    }

    #[test]
    fn values_are_not_rescanned_for_slots() {
        let r = Renderer::with_template("[{{client}}|{{time}}]").unwrap();
        let page = r.render(&snapshot("{{time}}")).unwrap();
        assert_eq!(page, "[{{time}}|14:22:05 (UTC)]");
    }

    #[test]
    fn values_are_escaped() {
        let r = Renderer::with_template("<p>{{client}}</p>").unwrap();
        assert_eq!(r.render(&snapshot("<b>")).unwrap(), "<p>&lt;b&gt;</p>");
    }

    #[test]
    fn unknown_slots_render_empty() {
        let r = Renderer::with_template("{{nope}}-{{cpu}}").unwrap();
        assert_eq!(r.render(&snapshot("h")).unwrap(), "-12.30 %");
    }

    #[test]
    fn malformed_template_is_rejected() {
        let err = Renderer::with_template("{{#if client}}").err().unwrap();
        assert_eq!(err.code().as_str(), "INTERNAL");
    }
}
