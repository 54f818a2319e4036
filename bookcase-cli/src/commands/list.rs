//! List command implementation

use super::load_catalog;
use anyhow::Result;
use bookcase_core::{BookPreview, CatalogConfig, FilterCriteria, ViewState, NO_RESULTS_MESSAGE};
use serde::Serialize;

/// One page of search results
#[derive(Serialize)]
struct ListOutput {
    books: Vec<BookPreview>,
    page: usize,
    per_page: usize,
    total: usize,
    remaining: usize,
    has_matches: bool,
}

/// Print one page of books matching the search
pub fn list(
    config: &CatalogConfig,
    title: &str,
    author: &str,
    genre: &str,
    page: usize,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(config)?;
    let page_size = config.page_size;

    let criteria = FilterCriteria::from_form(title, author, genre);
    let view = ViewState::apply(&catalog, &criteria).seek(page, page_size);

    if view.page() < page {
        tracing::warn!(
            "Page {} is past the end, showing page {}",
            page,
            view.page()
        );
    }

    let output = ListOutput {
        books: view
            .visible_window(page_size)
            .iter()
            .map(|book| catalog.preview(book))
            .collect(),
        page: view.page(),
        per_page: page_size.get(),
        total: view.matches().len(),
        remaining: view.remaining(page_size),
        has_matches: view.has_matches(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !output.has_matches {
        println!("{}", NO_RESULTS_MESSAGE);
        return Ok(());
    }

    for book in &output.books {
        println!("{:<36} {} by {}", book.id, book.title, book.author);
    }
    println!();
    println!(
        "Page {} of {} ({} books)",
        output.page,
        view.total_pages(page_size),
        output.total
    );
    if view.can_advance(page_size) {
        println!("{}", view.show_more_label(page_size));
    }

    Ok(())
}
