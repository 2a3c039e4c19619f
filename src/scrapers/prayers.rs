//! Prayer-times scraper.
//!
//! The source page lists salat timings for several mosques. The section of
//! interest is anchored by a heading with a fixed site label; the timings
//! follow as a `ul` whose list items each carry hour and minute as separate
//! text nodes around a separator span, plus a labeled span with the prayer
//! name:
//!
//! ```text
//! <h3>Baitul Futuh</h3>
//! <ul class="timing--shedule">
//!   <li>5 <span>:</span> 30 <span class="time--name">Fajr</span></li>
//!   ...
//! </ul>
//! ```

use reqwest::Client;
use scraper::{ElementRef, Html};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::{clean_text, parse_selector};
use crate::config::PrayerSource;
use crate::error::SourceError;
use crate::fetch::fetch_document;
use crate::models::PrayerTimings;

/// Fetch and extract the prayer timings, degrading to an empty map.
#[instrument(level = "info", skip_all)]
pub async fn fetch_prayer_times(client: &Client, config: &PrayerSource) -> PrayerTimings {
    match try_fetch(client, config).await {
        Ok(timings) => {
            info!(count = timings.len(), "Scraped prayer timings");
            timings
        }
        Err(e) => {
            warn!(error = %e, url = %config.url, "Prayer timings unavailable; returning empty");
            PrayerTimings::new()
        }
    }
}

async fn try_fetch(client: &Client, config: &PrayerSource) -> Result<PrayerTimings, SourceError> {
    let html = fetch_document(client, &config.url, &[]).await?;
    scrape(&html, config)
}

/// Extract the name → time map from a fetched document.
///
/// A document without the anchor heading or the timing list is a valid
/// empty result — the mosque may simply be absent from today's page. A
/// malformed list item, on the other hand, fails the whole extraction:
/// a partial map with silent gaps would be worse than an empty one.
pub fn scrape(html: &str, config: &PrayerSource) -> Result<PrayerTimings, SourceError> {
    let document = Html::parse_document(html);
    let heading_selector = parse_selector(&config.heading_selector)?;
    let name_selector = parse_selector(&config.name_selector)?;

    let Some(heading) = document
        .select(&heading_selector)
        .find(|h| clean_text(h) == config.heading_text)
    else {
        return Ok(PrayerTimings::new());
    };

    let Some(list) = following_list(heading, &config.list_class) else {
        return Ok(PrayerTimings::new());
    };

    let mut timings = PrayerTimings::new();
    for item in list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li")
    {
        let name = item
            .select(&name_selector)
            .next()
            .map(|el| clean_text(&el))
            .ok_or(SourceError::Structure("timing item has no name span"))?;
        let time = assemble_time(&item)
            .ok_or(SourceError::Structure("timing item has no hour/minute tokens"))?;
        timings.insert(name, Value::String(time));
    }
    Ok(timings)
}

/// Find the first `ul` sibling after the heading carrying the marker class.
fn following_list<'a>(heading: ElementRef<'a>, marker_class: &str) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| {
            el.value().name() == "ul" && el.value().classes().any(|class| class == marker_class)
        })
}

/// Join a list item's first two numeric text tokens as `"H:MM"`.
///
/// Hour and minute are the item's own text nodes; the separator glyph and
/// the prayer name live in child spans and are skipped by taking only
/// direct text children that are all digits.
fn assemble_time(item: &ElementRef) -> Option<String> {
    let mut tokens = item
        .children()
        .filter_map(|node| node.value().as_text().map(|t| t.trim().to_string()))
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()));

    let hour = tokens.next()?;
    let minute = tokens.next()?;
    Some(format!("{hour}:{minute}"))
}
