//! Source scrapers for the three upstream pages.
//!
//! Each submodule owns one upstream source and follows the same pattern:
//!
//! 1. A pure `scrape(html, config)` that applies the source's selector
//!    table to a fetched document and returns a typed result.
//! 2. A public `fetch_*(client, config)` that performs the network fetch,
//!    runs the scrape, and collapses any failure to the source's empty
//!    value, logging the cause.
//!
//! # Sources
//!
//! | Source | Module | Extracted shape |
//! |--------|--------|-----------------|
//! | Prayer times | [`prayers`] | name → time map, document order |
//! | Weather forecast | [`weather`] | per-field record |
//! | Radio show schedule | [`schedule`] | ordered list of day/time/title |
//!
//! The selectors are a contract with a moving target: the upstream HTML is
//! unversioned and changes without notice. That is why every scrape failure
//! degrades instead of erroring, and why the selectors live in
//! [`crate::config`] as data.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::error::SourceError;

pub mod prayers;
pub mod schedule;
pub mod weather;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Parse a configured selector string, mapping failure to [`SourceError`].
pub(crate) fn parse_selector(selector: &str) -> Result<Selector, SourceError> {
    Selector::parse(selector).map_err(|_| SourceError::Selector(selector.to_string()))
}

/// Collect an element's text with runs of whitespace collapsed to single
/// spaces. Upstream markup routinely wraps text across indented lines.
pub(crate) fn clean_text(element: &ElementRef) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
