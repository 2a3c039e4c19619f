//! HTTP surface: one read-only route serving the aggregated feed.
//!
//! The endpoint always answers `200 OK` — upstream failures were already
//! absorbed into empty values by the time the handler sees them, so no
//! other status code exists under normal or degraded operation. CORS is
//! permissive because the feed is consumed by browser clients on arbitrary
//! origins.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use reqwest::Client;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::aggregate;
use crate::config::SourcesConfig;
use crate::models::HomeResponse;

/// Shared application state passed to the handlers.
///
/// Constructed once at startup and handed to [`create_router`]; there is no
/// ambient singleton.
#[derive(Clone)]
pub struct AppState {
    /// Shared outbound HTTP client with the fetch timeout applied.
    pub client: Client,
    /// Source URLs and selector tables.
    pub sources: Arc<SourcesConfig>,
}

impl AppState {
    pub fn new(client: Client, sources: SourcesConfig) -> Self {
        Self {
            client,
            sources: Arc::new(sources),
        }
    }
}

/// Create the application router with its route and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/home", get(home))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET /api/home
///
/// Triggers the four source lookups and returns the merged feed.
async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(aggregate::build_home_response(&state.client, &state.sources).await)
}
