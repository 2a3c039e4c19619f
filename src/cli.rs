//! Command-line interface definitions for the home feed server.
//!
//! All options can be provided via command-line flags or environment
//! variables, which is how the usual container deployment passes them.

use clap::Parser;

/// Command-line arguments for the home feed server.
///
/// # Examples
///
/// ```sh
/// # Defaults: bind 0.0.0.0:5000, built-in sources
/// home_feed_api
///
/// # Custom port via flag or environment
/// home_feed_api --port 8080
/// PORT=8080 home_feed_api
///
/// # Override the scraped sources
/// home_feed_api --config ./sources.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Address to bind the listener on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Optional path to a YAML sources override file
    #[arg(short, long)]
    pub config: Option<String>,
}
