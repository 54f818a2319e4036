//! Search criteria and the match predicate

use crate::types::{AuthorId, BookRecord, GenreId};

/// Form value meaning "do not filter on this field"
pub const ANY: &str = "any";

/// A dropdown selection: either any value or one specific id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<Id> {
    Any,
    Only(Id),
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<Id> Selection<Id> {
    /// Parse a form value; `"any"` and blank map to [`Selection::Any`]
    pub fn from_form(value: &str) -> Self
    where
        Id: From<String>,
    {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Selection::Any
        } else {
            Selection::Only(Id::from(value.to_string()))
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    /// Whether `candidate` satisfies this selection
    pub fn accepts(&self, candidate: &Id) -> bool
    where
        Id: PartialEq,
    {
        match self {
            Selection::Any => true,
            Selection::Only(id) => id == candidate,
        }
    }
}

/// User-specified title/author/genre constraint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Trimmed, lowercased title fragment; empty matches every title
    title: String,
    author: Selection<AuthorId>,
    genre: Selection<GenreId>,
}

impl FilterCriteria {
    /// Criteria that accept every book
    pub fn any() -> Self {
        Self::default()
    }

    /// Build criteria from raw search form fields
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self::any()
            .with_title(title)
            .with_author(Selection::from_form(author))
            .with_genre(Selection::from_form(genre))
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.trim().to_lowercase();
        self
    }

    pub fn with_author(mut self, author: Selection<AuthorId>) -> Self {
        self.author = author;
        self
    }

    pub fn with_genre(mut self, genre: Selection<GenreId>) -> Self {
        self.genre = genre;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Selection<AuthorId> {
        &self.author
    }

    pub fn genre(&self) -> &Selection<GenreId> {
        &self.genre
    }

    pub fn title_matches(&self, book: &BookRecord) -> bool {
        self.title.is_empty() || book.title.to_lowercase().contains(&self.title)
    }

    pub fn author_matches(&self, book: &BookRecord) -> bool {
        self.author.accepts(&book.author)
    }

    pub fn genre_matches(&self, book: &BookRecord) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Only(genre) => book.has_genre(genre),
        }
    }

    /// A book is included iff title, author and genre all match
    pub fn matches(&self, book: &BookRecord) -> bool {
        self.genre_matches(book) && self.title_matches(book) && self.author_matches(book)
    }
}
