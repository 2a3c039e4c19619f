//! # Home Feed API
//!
//! A small aggregation backend for a community home screen. On each request
//! it scrapes three third-party pages — prayer times, the local weather
//! forecast, and the radio show schedule — and republishes the extracted
//! fragments as a single JSON payload alongside the current London time.
//!
//! The service is stateless: every value is built fresh per request and
//! discarded once the response is sent. There is no caching, no retrying,
//! and no authentication.
//!
//! ## Degrade-to-empty
//!
//! The upstream pages are uncontrolled and change without notice, so every
//! source lookup follows the same policy: any failure — network error,
//! timeout, non-2xx status, or a selector that no longer matches — collapses
//! to that field's empty value (empty map, empty list, empty record, or a
//! sentinel string). The endpoint always answers `200 OK` with best-effort
//! content; failures are logged, never surfaced to the caller.

pub mod aggregate;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod models;
pub mod scrapers;

pub use config::SourcesConfig;
pub use error::SourceError;
pub use http::{AppState, create_router};
pub use models::HomeResponse;
