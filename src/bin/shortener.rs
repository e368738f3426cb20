//! URL shortener service binary.
//!
//! Serves the in-memory shortening API. Nothing is persisted; the code-to-URL
//! mapping is lost when the process exits.

use dojo_services::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    logging::init(&config);
    config.print_summary();

    server::run_shortener(config).await
}
