//! Catalog browsing handlers

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bookcase_core::{BookDetail, BookPreview, FilterCriteria, ViewState, NO_RESULTS_MESSAGE};
use serde::{Deserialize, Serialize};

/// Search form fields and requested page
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    /// Title fragment
    #[serde(default)]
    pub title: String,

    /// Author id or "any"
    #[serde(default)]
    pub author: String,

    /// Genre id or "any"
    #[serde(default)]
    pub genre: String,

    /// Page number (1-indexed, 0 treated as 1, clamped to the last page)
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// One page of search results
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookPreview>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub remaining: usize,
    pub has_matches: bool,
    /// Label for the pagination trigger
    pub show_more: String,
    /// Empty-state message, present only when nothing matched
    pub message: Option<&'static str>,
}

/// Filter the catalog and return the requested page
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Json<ListBooksResponse> {
    let page_size = state.page_size;
    let criteria = FilterCriteria::from_form(&query.title, &query.author, &query.genre);
    let view = ViewState::apply(&state.catalog, &criteria).seek(query.page, page_size);

    let books = view
        .visible_window(page_size)
        .iter()
        .map(|book| state.catalog.preview(book))
        .collect();

    Json(ListBooksResponse {
        books,
        page: view.page(),
        per_page: page_size.get(),
        total: view.matches().len(),
        remaining: view.remaining(page_size),
        has_matches: view.has_matches(),
        show_more: view.show_more_label(page_size),
        message: (!view.has_matches()).then_some(NO_RESULTS_MESSAGE),
    })
}

/// Get a single book's detail
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail>, StatusCode> {
    state
        .catalog
        .detail(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Lookup table entry
#[derive(Debug, Serialize)]
pub struct NamedEntry {
    pub id: String,
    pub name: String,
}

/// List all authors ordered by name
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<NamedEntry>> {
    Json(
        state
            .catalog
            .authors()
            .entries()
            .into_iter()
            .map(|(id, name)| NamedEntry {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    )
}

/// List all genres ordered by name
pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<NamedEntry>> {
    Json(
        state
            .catalog
            .genres()
            .entries()
            .into_iter()
            .map(|(id, name)| NamedEntry {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    )
}
