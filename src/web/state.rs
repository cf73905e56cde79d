//! Application state shared across handlers

use crate::catalog::Catalog;
use crate::config::Settings;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// The immutable product catalog snapshot
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        Self {
            settings: Arc::new(settings),
            catalog: Arc::new(catalog),
        }
    }
}
