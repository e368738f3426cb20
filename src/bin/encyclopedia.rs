//! Technique encyclopedia service binary.
//!
//! Serves the read-only technique API over the SQLite database configured via
//! `DATABASE_URL`. The schema is created on startup if absent; run the `seed`
//! binary to populate it.

use dojo_services::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    logging::init(&config);
    config.print_summary();

    server::run_encyclopedia(config).await
}
