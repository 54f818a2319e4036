//! Show command implementation

use super::load_catalog;
use anyhow::Result;
use bookcase_core::CatalogConfig;

/// Display the details of a single book
///
/// An unknown id is reported but is not a failure.
pub fn show(config: &CatalogConfig, id: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;

    let Some(detail) = catalog.detail(id) else {
        tracing::debug!("No book with id {}", id);
        eprintln!("No book with id '{}'", id);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("Title:       {}", detail.title);
        println!("Author:      {}", detail.subtitle());
        println!("Genres:      {}", detail.genres.join(", "));
        println!("Cover:       {}", detail.image);
        if !detail.description.is_empty() {
            println!("Description: {}", detail.description);
        }
    }

    Ok(())
}
