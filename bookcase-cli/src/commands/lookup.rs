//! Author and genre listing

use super::load_catalog;
use anyhow::Result;
use bookcase_core::CatalogConfig;

/// Print every author as `id<TAB>name`
pub fn authors(config: &CatalogConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    for (id, name) in catalog.authors().entries() {
        println!("{}\t{}", id, name);
    }
    Ok(())
}

/// Print every genre as `id<TAB>name`
pub fn genres(config: &CatalogConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    for (id, name) in catalog.genres().entries() {
        println!("{}\t{}", id, name);
    }
    Ok(())
}
