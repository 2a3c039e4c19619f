//! Radio show-schedule scraper.
//!
//! The schedule page renders one block per show slot. A slot only makes it
//! into the feed when its day, time, and title were all located; incomplete
//! blocks (adverts, placeholders, half-rendered slots) are skipped without
//! affecting the rest. Document order is preserved.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, instrument, warn};

use super::{clean_text, parse_selector};
use crate::config::ScheduleSource;
use crate::error::SourceError;
use crate::fetch::fetch_document;
use crate::models::ScheduleEntry;

/// Fetch and extract the schedule, degrading to an empty list.
#[instrument(level = "info", skip_all)]
pub async fn fetch_schedule(client: &Client, config: &ScheduleSource) -> Vec<ScheduleEntry> {
    match try_fetch(client, config).await {
        Ok(entries) => {
            info!(count = entries.len(), "Scraped show schedule");
            entries
        }
        Err(e) => {
            warn!(error = %e, url = %config.url, "Schedule unavailable; returning empty");
            Vec::new()
        }
    }
}

async fn try_fetch(
    client: &Client,
    config: &ScheduleSource,
) -> Result<Vec<ScheduleEntry>, SourceError> {
    let html = fetch_document(client, &config.url, &[]).await?;
    scrape(&html, config)
}

/// Extract schedule entries from a fetched document, in document order.
pub fn scrape(html: &str, config: &ScheduleSource) -> Result<Vec<ScheduleEntry>, SourceError> {
    let document = Html::parse_document(html);
    let item_selector = parse_selector(&config.item_selector)?;
    let day_selector = parse_selector(&config.day_selector)?;
    let time_selector = parse_selector(&config.time_selector)?;
    let title_selector = parse_selector(&config.title_selector)?;

    let mut entries = Vec::new();
    for item in document.select(&item_selector) {
        let (Some(day), Some(time), Some(title)) = (
            first_text(&item, &day_selector),
            first_text(&item, &time_selector),
            first_text(&item, &title_selector),
        ) else {
            continue;
        };
        entries.push(ScheduleEntry { day, time, title });
    }
    Ok(entries)
}

fn first_text(item: &ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector).next().map(|el| clean_text(&el))
}
