//! Product-Search-RS: a product catalog search service written in Rust
//!
//! This is the main entry point for the application.

use anyhow::Result;
use product_search_rs::{
    catalog::Catalog,
    config::Settings,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Product-Search-RS v{}", product_search_rs::VERSION);

    // Load configuration
    let settings = load_settings()?;

    // Load the catalog once; it stays immutable for the process lifetime
    let catalog = Catalog::from_file(&settings.catalog.path)?;
    info!(
        "Loaded catalog with {} products from {}",
        catalog.len(),
        settings.catalog.path
    );

    // Create application state
    let state = AppState::new(settings.clone(), catalog);

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("PRODUCT_SEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
