//! Bookcase Server - JSON API for browsing a book catalog

use anyhow::{Context, Result};
use bookcase_core::CatalogConfig;
use bookcase_server::{routes, state};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookcase_server=debug,bookcase_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::from_env()?;
    let state = state::AppState::new(&config)?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr: SocketAddr = std::env::var("BOOKCASE_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .context("BOOKCASE_ADDR is not a valid socket address")?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
