//! Weather forecast scraper.
//!
//! Unlike the prayer list, the forecast fields are independent fragments
//! scattered across the page, so each one is extracted on its own: a
//! selector that no longer matches empties that field and leaves the rest
//! intact. The source blocks default HTTP clients, hence the browser-like
//! User-Agent carried in the source config.

use reqwest::Client;
use scraper::Html;
use tracing::{info, instrument, warn};

use super::{clean_text, parse_selector};
use crate::config::WeatherSource;
use crate::error::SourceError;
use crate::fetch::fetch_document;
use crate::models::WeatherSnapshot;

/// Fetch and extract the forecast, degrading to an all-empty record.
#[instrument(level = "info", skip_all)]
pub async fn fetch_weather(client: &Client, config: &WeatherSource) -> WeatherSnapshot {
    match try_fetch(client, config).await {
        Ok(snapshot) => {
            info!(
                description = %snapshot.description,
                temperature = %snapshot.temperature,
                "Scraped weather forecast"
            );
            snapshot
        }
        Err(e) => {
            warn!(error = %e, url = %config.url, "Weather unavailable; returning empty");
            WeatherSnapshot::default()
        }
    }
}

async fn try_fetch(client: &Client, config: &WeatherSource) -> Result<WeatherSnapshot, SourceError> {
    let html = fetch_document(client, &config.url, &config.headers).await?;
    scrape(&html, config)
}

/// Extract the forecast fields from a fetched document.
///
/// A missing node resolves to an empty string for that field only; the
/// temperature keeps the degree suffix the page renders next to the value.
pub fn scrape(html: &str, config: &WeatherSource) -> Result<WeatherSnapshot, SourceError> {
    let document = Html::parse_document(html);

    let temperature = select_text(&document, &config.temperature_selector)?;
    Ok(WeatherSnapshot {
        description: select_text(&document, &config.description_selector)?,
        temperature: if temperature.is_empty() {
            temperature
        } else {
            format!("{temperature}°")
        },
        wind_speed: select_text(&document, &config.wind_speed_selector)?,
        humidity: select_text(&document, &config.humidity_selector)?,
    })
}

/// Text of the first node matching `selector`, or empty when absent.
fn select_text(document: &Html, selector: &str) -> Result<String, SourceError> {
    let selector = parse_selector(selector)?;
    Ok(document
        .select(&selector)
        .next()
        .map(|el| clean_text(&el))
        .unwrap_or_default())
}
