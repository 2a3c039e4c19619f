//! Per-source configuration: URLs and selector tables.
//!
//! The upstream pages are unversioned third-party markup, so each source's
//! selectors live here as data rather than inside the extraction logic.
//! When a site reshuffles its HTML, the fix is a config change, not a code
//! change. The built-in defaults point at the production sources; a YAML
//! file can override any subset of them.

use std::error::Error;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

/// Wall-clock rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClockConfig {
    /// IANA timezone identifier, e.g. "Europe/London".
    pub zone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            zone: "Europe/London".to_string(),
        }
    }
}

/// Selector table for the prayer-times page.
///
/// The page lists several mosques; the section of interest is anchored by a
/// heading whose text equals `heading_text`, followed by a `ul` carrying
/// `list_class`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrayerSource {
    pub url: String,
    /// Selector for candidate section headings.
    pub heading_selector: String,
    /// Exact heading text anchoring the section of interest.
    pub heading_text: String,
    /// Marker class on the `ul` holding the timing list items.
    pub list_class: String,
    /// Selector for the span holding the prayer name within a list item.
    pub name_selector: String,
}

impl Default for PrayerSource {
    fn default() -> Self {
        Self {
            url: "https://khuddam.org.uk/salat/".to_string(),
            heading_selector: "h3".to_string(),
            heading_text: "Baitul Futuh".to_string(),
            list_class: "timing--shedule".to_string(),
            name_selector: "span.time--name".to_string(),
        }
    }
}

/// Selector table for the weather forecast page.
///
/// Consumer weather sites block default HTTP clients, so this source also
/// carries a browser-like User-Agent header.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherSource {
    pub url: String,
    /// Extra request headers, e.g. a browser User-Agent.
    pub headers: Vec<(String, String)>,
    pub description_selector: String,
    pub temperature_selector: String,
    pub wind_speed_selector: String,
    pub humidity_selector: String,
}

impl Default for WeatherSource {
    fn default() -> Self {
        Self {
            // Geoname 2643743 = London
            url: "https://www.bbc.co.uk/weather/2643743".to_string(),
            headers: vec![(
                "User-Agent".to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/90.0.4430.85 Safari/537.36"
                    .to_string(),
            )],
            description_selector: "div.wr-day__details__weather-type-description".to_string(),
            temperature_selector: "div.wr-day-temperature__low span.wr-value--temperature--c"
                .to_string(),
            wind_speed_selector: "div.wr-wind-speed span.wr-value--windspeed--mph".to_string(),
            humidity_selector: "div.wr-time-slot-secondary-content__humidity span.wr-value--humidity"
                .to_string(),
        }
    }
}

/// Selector table for the radio show-schedule page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleSource {
    pub url: String,
    /// Selector matching one day-item block per show slot.
    pub item_selector: String,
    pub day_selector: String,
    pub time_selector: String,
    pub title_selector: String,
}

impl Default for ScheduleSource {
    fn default() -> Self {
        Self {
            url: "https://voiceofislam.co.uk/show-schedule/".to_string(),
            item_selector: "div.qt-part-show-schedule-day-item".to_string(),
            day_selector: "span.qt-day".to_string(),
            time_selector: "span.qt-time".to_string(),
            title_selector: "h4 a.qt-t".to_string(),
        }
    }
}

/// Complete source configuration for the service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub clock: ClockConfig,
    pub prayers: PrayerSource,
    pub weather: WeatherSource,
    pub schedule: ScheduleSource,
}

impl SourcesConfig {
    /// Load a YAML override file on top of the built-in defaults.
    ///
    /// Sections absent from the file keep their default values.
    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path)?;
        let config: SourcesConfig = serde_yaml::from_str(&raw)?;
        info!(path, "Loaded sources configuration");
        Ok(config)
    }

    /// Check that every configured source URL parses.
    ///
    /// Run once at startup so a broken override file fails the boot rather
    /// than silently degrading every response.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for (source, url) in [
            ("prayers", &self.prayers.url),
            ("weather", &self.weather.url),
            ("schedule", &self.schedule.url),
        ] {
            Url::parse(url)
                .map_err(|e| format!("invalid {source} source url {url:?}: {e}"))?;
        }
        Ok(())
    }
}
