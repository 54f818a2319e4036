//! Bookcase Core Library
//!
//! This crate provides the catalog types and browsing logic for Bookcase.
//! A static book collection is filtered by title, author and genre into a
//! [`ViewState`], which is then paged through in fixed-size windows.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod storage;
pub mod theme;
pub mod types;
pub mod view;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, LoadError, PreferenceError, Result};
pub use filter::{FilterCriteria, Selection};
pub use theme::Theme;
pub use types::{AuthorId, BookDetail, BookPreview, BookRecord, GenreId, NameTable, PageSize};
pub use view::{ViewState, NO_RESULTS_MESSAGE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_browsing() {
        let catalog = Catalog::sample().unwrap();
        let view = ViewState::initial(&catalog);
        assert_eq!(view.matches().len(), catalog.len());
        assert_eq!(view.page(), 1);
    }
}
