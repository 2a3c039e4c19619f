//! Data models for the aggregated home feed.
//!
//! This module defines the response shapes served by the API:
//! - [`HomeResponse`]: the top-level composite returned by `GET /api/home`
//! - [`PrayerTimings`]: prayer-name → time-of-day map
//! - [`WeatherSnapshot`]: current forecast fragments
//! - [`ScheduleEntry`]: one slot of the radio show schedule
//!
//! Every type has a well-defined empty value that stands in for "data
//! unavailable" — callers cannot distinguish an upstream outage from an
//! upstream markup change, and that is deliberate.

use serde::{Deserialize, Serialize};

/// Prayer-name → time-of-day mapping, e.g. `"Fajr" -> "5:30"`.
///
/// Keys are unique and iteration follows insertion order, so the serialized
/// JSON object lists prayers in the order the upstream page renders them.
/// An empty map is the degraded value when the page is unreachable or its
/// structure has changed.
pub type PrayerTimings = serde_json::Map<String, serde_json::Value>;

/// Sentinel returned when the wall-clock cannot be rendered.
pub const TIME_UNAVAILABLE: &str = "Time unavailable";

/// Fragments of the current weather forecast.
///
/// Each field is extracted independently; a field whose selector no longer
/// matches degrades to an empty string without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WeatherSnapshot {
    /// Short forecast description, e.g. "Sunny intervals and a gentle breeze".
    pub description: String,
    /// Temperature with degree suffix, e.g. "18°".
    pub temperature: String,
    /// Wind speed as rendered by the source, e.g. "12".
    pub wind_speed: String,
    /// Relative humidity as rendered by the source, e.g. "64%".
    pub humidity: String,
}

/// One slot of the radio show schedule.
///
/// An entry only exists if the day, time, and title were all located in the
/// source markup; incomplete slots are dropped during extraction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScheduleEntry {
    /// Day label, e.g. "Monday".
    pub day: String,
    /// Time range label, e.g. "16:00 - 18:00".
    pub time: String,
    /// Show title.
    pub title: String,
}

/// The composite payload served by `GET /api/home`.
///
/// Always fully shaped: each field is present even when its lookup failed,
/// holding that field's empty or sentinel value instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HomeResponse {
    /// Current London wall-clock time as `HH:MM`, or [`TIME_UNAVAILABLE`].
    pub current_time: String,
    /// Prayer timings in document order; empty when unavailable.
    pub prayers: PrayerTimings,
    /// Radio schedule in document order; empty when unavailable.
    pub schedule: Vec<ScheduleEntry>,
    /// Weather fragments; all-empty record when unavailable.
    pub weather: WeatherSnapshot,
}

impl HomeResponse {
    /// The fully degraded response: every field at its empty/sentinel value.
    pub fn unavailable() -> Self {
        Self {
            current_time: TIME_UNAVAILABLE.to_string(),
            prayers: PrayerTimings::new(),
            schedule: Vec::new(),
            weather: WeatherSnapshot::default(),
        }
    }
}
