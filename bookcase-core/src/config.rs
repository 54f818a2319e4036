//! Runtime configuration read from the environment

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::storage::FilePreferenceStore;
use crate::types::PageSize;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Path to a catalog JSON file; the bundled sample is used when unset
pub const CATALOG_ENV: &str = "BOOKCASE_CATALOG";
/// Books per page
pub const PAGE_SIZE_ENV: &str = "BOOKCASE_PAGE_SIZE";
/// Directory holding the preference file
pub const CONFIG_DIR_ENV: &str = "BOOKCASE_CONFIG_DIR";

/// Host configuration shared by the CLI and the server
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub catalog_path: Option<PathBuf>,
    pub page_size: PageSize,
    pub config_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: PageSize::default(),
            config_dir: default_config_dir(),
        }
    }
}

impl CatalogConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_ENV).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(size) = lookup(PAGE_SIZE_ENV) {
            config.page_size = size
                .parse()
                .map_err(|e| CatalogError::Config(format!("{}: {}", PAGE_SIZE_ENV, e)))?;
        }
        if let Some(dir) = lookup(CONFIG_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.config_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Load the configured catalog, or the bundled sample
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Catalog::load(path)
            }
            None => Catalog::sample(),
        }
    }

    /// Preference store rooted at the configured directory
    pub fn preference_store(&self) -> FilePreferenceStore {
        FilePreferenceStore::new(&self.config_dir)
    }
}

/// Platform config directory, falling back to `./.bookcase`
fn default_config_dir() -> PathBuf {
    ProjectDirs::from("", "", "bookcase")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".bookcase"))
}
