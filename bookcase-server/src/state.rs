//! Application state

use anyhow::{Context, Result};
use bookcase_core::storage::PreferenceStore;
use bookcase_core::{Catalog, CatalogConfig, PageSize};
use std::sync::Arc;

/// Shared application state
///
/// The catalog is immutable and shared; every request derives its own view
/// from query parameters, so no browsing state lives here.
#[derive(Clone)]
pub struct AppState {
    /// The static book collection
    pub catalog: Arc<Catalog>,

    /// Books per page
    pub page_size: PageSize,

    /// Persisted preferences; the store is blocking and serialises its own updates
    pub preferences: Arc<dyn PreferenceStore>,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let catalog = config
            .load_catalog()
            .context("Failed to load catalog")?;

        tracing::info!(
            "Serving {} books, {} per page, preferences in {}",
            catalog.len(),
            config.page_size,
            config.config_dir.display()
        );

        Ok(Self::with_store(
            catalog,
            config.page_size,
            Box::new(config.preference_store()),
        ))
    }

    /// Assemble state from already-built parts
    pub fn with_store(
        catalog: Catalog,
        page_size: PageSize,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            page_size,
            preferences: Arc::from(preferences),
        }
    }
}
