//! Home feed server binary.
//!
//! Boot sequence: initialize tracing, parse the CLI, load and validate the
//! sources configuration, build the shared outbound client, then bind and
//! serve the single-route axum app.
//!
//! # Environment Variables
//!
//! - `HOST`: listen address (default: 0.0.0.0)
//! - `PORT`: listen port (default: 5000)
//! - `RUST_LOG`: log filter (default: info)

use std::error::Error;
use std::net::SocketAddr;

use clap::Parser;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use home_feed_api::cli::Cli;
use home_feed_api::fetch::build_client;
use home_feed_api::{AppState, SourcesConfig, create_router};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("home_feed_api starting up");

    let args = Cli::parse();
    debug!(?args.host, ?args.port, ?args.config, "Parsed CLI arguments");

    let sources = match args.config.as_deref() {
        Some(path) => SourcesConfig::load(path)?,
        None => SourcesConfig::default(),
    };
    sources.validate()?;
    info!(
        prayers = %sources.prayers.url,
        weather = %sources.weather.url,
        schedule = %sources.schedule.url,
        zone = %sources.clock.zone,
        "Sources configured"
    );

    let client = build_client()?;
    let state = AppState::new(client, sources);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}/api/home");

    axum::serve(listener, app).await?;

    Ok(())
}
