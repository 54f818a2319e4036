//! The catalog entry type

use super::{AuthorId, GenreId};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the static catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Unique identifier within the catalog
    pub id: String,

    /// Book title
    pub title: String,

    /// Author reference into the author table
    pub author: AuthorId,

    /// Cover image URI
    pub image: String,

    /// Genre references into the genre table (never empty)
    pub genres: Vec<GenreId>,

    /// Book description/summary
    #[serde(default)]
    pub description: String,

    /// Publication date
    pub published: DateTime<Utc>,
}

impl BookRecord {
    /// Create a record with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<AuthorId>,
        published: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            image: String::new(),
            genres: Vec::new(),
            description: String::new(),
            published,
        }
    }

    /// Add a genre
    pub fn with_genre(mut self, genre: impl Into<GenreId>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Set the cover image URI
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Year of publication
    pub fn year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.contains(genre)
    }
}
