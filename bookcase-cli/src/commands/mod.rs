//! CLI command implementations

mod list;
mod lookup;
mod show;
mod theme;

pub use list::list;
pub use lookup::{authors, genres};
pub use show::show;
pub use theme::theme;

use anyhow::{Context, Result};
use bookcase_core::{Catalog, CatalogConfig};

/// Load the configured catalog with a readable error
fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    config.load_catalog().with_context(|| match &config.catalog_path {
        Some(path) => format!("Failed to load catalog: {}", path.display()),
        None => "Failed to load bundled catalog".to_string(),
    })
}
