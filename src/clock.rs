//! Wall-clock rendering in a named timezone.
//!
//! The home feed shows the current civil time in London, which flips
//! between UTC and UTC+1 across the daylight-saving boundary. The zone is
//! configured by IANA name and resolved through the embedded tz database,
//! so the DST rules are applied without touching the host's locale.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::models::TIME_UNAVAILABLE;

/// Render the current instant in the named zone as zero-padded `HH:MM`.
///
/// Any failure — in practice an unknown zone name from a bad override
/// file — yields the [`TIME_UNAVAILABLE`] sentinel rather than an error.
pub fn current_time(zone_name: &str) -> String {
    match render_in_zone(Utc::now(), zone_name) {
        Some(rendered) => rendered,
        None => {
            warn!(zone_name, "Unknown timezone; returning sentinel");
            TIME_UNAVAILABLE.to_string()
        }
    }
}

/// Render a fixed instant in the named zone, or `None` for an unknown zone.
fn render_in_zone(instant: DateTime<Utc>, zone_name: &str) -> Option<String> {
    let zone: Tz = zone_name.parse().ok()?;
    Some(instant.with_timezone(&zone).format("%H:%M").to_string())
}
