//! Payloads handed to rendering hosts

use serde::Serialize;

/// One row of the visible window
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    /// Author display name
    pub author: String,
    pub image: String,
}

/// Full detail of an activated book
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    /// Author display name
    pub author: String,
    /// Publication year
    pub year: i32,
    pub image: String,
    pub description: String,
    /// Genre display names
    pub genres: Vec<String>,
}

impl BookDetail {
    /// Subtitle line, e.g. "Jane Austen (1813)"
    pub fn subtitle(&self) -> String {
        format!("{} ({})", self.author, self.year)
    }
}
