//! Error types for Bookcase Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all Bookcase operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading a catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    #[error("Book {0} has no genres")]
    EmptyGenres(String),

    #[error("Book {book} references unknown author {author}")]
    UnknownAuthor { book: String, author: String },

    #[error("Book {book} references unknown genre {genre}")]
    UnknownGenre { book: String, genre: String },
}

/// Errors that occur while reading or writing preferences
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Invalid theme: {0} (expected \"day\" or \"night\")")]
    InvalidTheme(String),

    #[error("Backend error: {0}")]
    Backend(String),
}
