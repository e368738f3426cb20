//! HTTP server initialization and runtime setup.
//!
//! One entry point per service: each wires its stores and services, builds
//! the router, and hands the listener to Axum.

use crate::application::services::{ShortenerService, TechniqueService};
use crate::config::Config;
use crate::infrastructure::memory::InMemoryLinkStore;
use crate::infrastructure::persistence::{SqliteTechniqueRepository, db};
use crate::routes::{encyclopedia_router, shortener_router};
use crate::state::{EncyclopediaState, ShortenerState};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the URL shortener with the given configuration.
///
/// The store is created fresh on every start; nothing is persisted.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or the
/// server encounters a runtime error.
pub async fn run_shortener(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryLinkStore::new());
    let shortener_service = Arc::new(ShortenerService::new(
        store,
        config.code_length,
        config.public_base_url.clone(),
    ));

    let state = ShortenerState { shortener_service };
    let app = shortener_router(state);

    serve(app, &config.listen_addr).await
}

/// Runs the technique encyclopedia with the given configuration.
///
/// Connects to SQLite, creates the schema if absent, and serves the
/// read-only API. Populating the database is the seed binary's job.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, schema creation fails,
/// the bind fails, or the server encounters a runtime error.
pub async fn run_encyclopedia(config: Config) -> Result<()> {
    let pool = db::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    db::init_schema(&pool).await?;

    let repository = Arc::new(SqliteTechniqueRepository::new(Arc::new(pool)));
    let technique_service = Arc::new(TechniqueService::new(repository));

    let state = EncyclopediaState { technique_service };
    let app = encyclopedia_router(state);

    serve(app, &config.listen_addr).await
}

async fn serve(
    app: tower_http::normalize_path::NormalizePath<axum::Router>,
    listen_addr: &str,
) -> Result<()> {
    let addr: SocketAddr = listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
