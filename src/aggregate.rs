//! Assembly of the composite home feed.
//!
//! The four lookups — clock, prayers, weather, schedule — have no data
//! dependency on one another. The three network fetches run concurrently so
//! the worst case is one fetch timeout, not three in a row. Every lookup
//! degrades itself, so assembly itself cannot fail.

use futures::join;
use reqwest::Client;
use tracing::{info, instrument};

use crate::clock;
use crate::config::SourcesConfig;
use crate::models::HomeResponse;
use crate::scrapers::{prayers, schedule, weather};

/// Build the full home feed payload.
///
/// Always returns a fully shaped [`HomeResponse`]; fields whose lookup
/// failed hold their empty or sentinel value.
#[instrument(level = "info", skip_all)]
pub async fn build_home_response(client: &Client, sources: &SourcesConfig) -> HomeResponse {
    let (prayers, schedule, weather) = join!(
        prayers::fetch_prayer_times(client, &sources.prayers),
        schedule::fetch_schedule(client, &sources.schedule),
        weather::fetch_weather(client, &sources.weather),
    );

    let response = HomeResponse {
        current_time: clock::current_time(&sources.clock.zone),
        prayers,
        schedule,
        weather,
    };
    info!(
        prayers = response.prayers.len(),
        schedule = response.schedule.len(),
        current_time = %response.current_time,
        "Assembled home feed"
    );
    response
}
