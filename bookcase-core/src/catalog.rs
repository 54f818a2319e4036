//! The static book collection and its lookup tables

use crate::error::{LoadError, Result};
use crate::types::{AuthorId, BookDetail, BookPreview, BookRecord, GenreId, NameTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Bundled dataset used when no catalog file is configured
const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk catalog document
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    authors: NameTable<AuthorId>,
    genres: NameTable<GenreId>,
    books: Vec<BookRecord>,
}

/// The full, immutable book collection
///
/// Book order is the order the collection was supplied in; every filter
/// result preserves it.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BookRecord>,
    authors: NameTable<AuthorId>,
    genres: NameTable<GenreId>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and every reference resolves
    pub fn new(
        books: Vec<BookRecord>,
        authors: NameTable<AuthorId>,
        genres: NameTable<GenreId>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(LoadError::DuplicateId(book.id.clone()).into());
            }
            if book.genres.is_empty() {
                return Err(LoadError::EmptyGenres(book.id.clone()).into());
            }
            if !authors.contains(&book.author) {
                return Err(LoadError::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author.to_string(),
                }
                .into());
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains(g)) {
                return Err(LoadError::UnknownGenre {
                    book: book.id.clone(),
                    genre: genre.to_string(),
                }
                .into());
            }
        }

        tracing::debug!(
            "Loaded catalog with {} books, {} authors, {} genres",
            books.len(),
            authors.len(),
            genres.len()
        );

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    /// Parse a catalog JSON document
    pub fn from_json(data: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(data).map_err(LoadError::from)?;
        Self::new(doc.books, doc.authors, doc.genres)
    }

    /// Load a catalog JSON document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    /// The bundled sample catalog
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// All books in original order
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn authors(&self) -> &NameTable<AuthorId> {
        &self.authors
    }

    pub fn genres(&self) -> &NameTable<GenreId> {
        &self.genres
    }

    /// Look up a book by identifier
    ///
    /// A miss (e.g. a stale link) is not an error; callers treat it as a no-op.
    pub fn find_by_id(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Display name of an author, falling back to the raw id
    pub fn author_name<'a>(&'a self, id: &'a AuthorId) -> &'a str {
        self.authors.get(id).unwrap_or(id.as_str())
    }

    /// Display name of a genre, falling back to the raw id
    pub fn genre_name<'a>(&'a self, id: &'a GenreId) -> &'a str {
        self.genres.get(id).unwrap_or(id.as_str())
    }

    /// Preview row for a book in the visible window
    pub fn preview(&self, book: &BookRecord) -> BookPreview {
        BookPreview {
            id: book.id.clone(),
            title: book.title.clone(),
            author: self.author_name(&book.author).to_string(),
            image: book.image.clone(),
        }
    }

    /// Detail view of a book, or `None` when the id is unknown
    pub fn detail(&self, id: &str) -> Option<BookDetail> {
        let book = self.find_by_id(id)?;
        Some(BookDetail {
            id: book.id.clone(),
            title: book.title.clone(),
            author: self.author_name(&book.author).to_string(),
            year: book.year(),
            image: book.image.clone(),
            description: book.description.clone(),
            genres: book
                .genres
                .iter()
                .map(|g| self.genre_name(g).to_string())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use chrono::{TimeZone, Utc};

    fn tables() -> (NameTable<AuthorId>, NameTable<GenreId>) {
        (
            NameTable::new().with("austen", "Jane Austen"),
            NameTable::new().with("romance", "Romance"),
        )
    }

    fn book(id: &str) -> BookRecord {
        BookRecord::new(id, "Emma", "austen", Utc.with_ymd_and_hms(1815, 12, 23, 0, 0, 0).unwrap())
            .with_genre("romance")
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let (authors, genres) = tables();
        let err = Catalog::new(vec![book("emma"), book("emma")], authors, genres).unwrap_err();
        assert!(matches!(err, CatalogError::Load(LoadError::DuplicateId(id)) if id == "emma"));
    }

    #[test]
    fn test_rejects_unresolvable_references() {
        let (authors, genres) = tables();
        let stray = BookRecord::new("x", "X", "nobody", Utc::now()).with_genre("romance");
        let err = Catalog::new(vec![stray], authors.clone(), genres.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::Load(LoadError::UnknownAuthor { .. })));

        let stray = book("y").with_genre("horror");
        let err = Catalog::new(vec![stray], authors.clone(), genres.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::Load(LoadError::UnknownGenre { .. })));

        let bare = BookRecord::new("z", "Z", "austen", Utc::now());
        let err = Catalog::new(vec![bare], authors, genres).unwrap_err();
        assert!(matches!(err, CatalogError::Load(LoadError::EmptyGenres(_))));
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Load(LoadError::InvalidJson(_))));
    }

    #[test]
    fn test_find_and_detail() {
        let catalog = Catalog::sample().unwrap();
        let detail = catalog.detail("pride-and-prejudice").unwrap();
        assert_eq!(detail.author, "Jane Austen");
        assert_eq!(detail.year, 1813);
        assert_eq!(detail.subtitle(), "Jane Austen (1813)");
        assert!(detail.genres.contains(&"Romance".to_string()));

        assert!(catalog.find_by_id("no-such-book").is_none());
        assert!(catalog.detail("no-such-book").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), Catalog::sample().unwrap().len());

        let missing = Catalog::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, CatalogError::Io(_)));
    }
}
