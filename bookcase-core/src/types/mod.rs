//! Core types for the Bookcase catalog

mod book;
mod ids;
mod names;
mod page;
mod render;

pub use book::BookRecord;
pub use ids::{AuthorId, GenreId};
pub use names::NameTable;
pub use page::PageSize;
pub use render::{BookDetail, BookPreview};
