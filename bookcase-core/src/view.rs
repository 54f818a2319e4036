//! Filtered result set and pagination cursor

use crate::catalog::Catalog;
use crate::filter::FilterCriteria;
use crate::types::{BookRecord, PageSize};

/// Message shown when the current criteria match nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// The current filtered/paginated view over a catalog
///
/// `matches` is always exactly the books satisfying the last applied
/// criteria, in collection order, and `page` is always at least 1. A new
/// view is produced by [`ViewState::apply`] (page reset) and
/// [`ViewState::advance_page`] (page + 1); nothing else changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<'c> {
    matches: Vec<&'c BookRecord>,
    page: usize,
}

impl<'c> ViewState<'c> {
    /// Start-up view: every book, first page
    pub fn initial(catalog: &'c Catalog) -> Self {
        Self::apply(catalog, &FilterCriteria::any())
    }

    /// Filter the whole catalog and reset to the first page
    pub fn apply(catalog: &'c Catalog, criteria: &FilterCriteria) -> Self {
        Self::filter(catalog.books(), criteria)
    }

    /// Stable filter over any sequence of books, first page
    pub fn filter<I>(books: I, criteria: &FilterCriteria) -> Self
    where
        I: IntoIterator<Item = &'c BookRecord>,
    {
        let matches: Vec<_> = books
            .into_iter()
            .filter(|book| criteria.matches(book))
            .collect();

        tracing::debug!(
            title = criteria.title(),
            matches = matches.len(),
            "Applied filter"
        );

        Self { matches, page: 1 }
    }

    /// Move to the next page
    ///
    /// Once nothing remains beyond the current window this is a no-op, so the
    /// page never passes the last one (an empty result stays on page 1).
    pub fn advance_page(mut self, page_size: PageSize) -> Self {
        if self.can_advance(page_size) {
            self.page += 1;
            tracing::debug!(page = self.page, "Advanced page");
        } else {
            tracing::debug!(page = self.page, "Already on the last page");
        }
        self
    }

    /// Advance towards `page`, stopping at the last page
    ///
    /// Page 0 is treated as page 1. Used by hosts that receive a page number
    /// rather than a sequence of "show more" presses.
    pub fn seek(mut self, page: usize, page_size: PageSize) -> Self {
        while self.page < page && self.can_advance(page_size) {
            self.page += 1;
        }
        self
    }

    /// Books on the current page, clipped to what is available
    pub fn visible_window(&self, page_size: PageSize) -> &[&'c BookRecord] {
        let len = self.matches.len();
        let start = (self.page - 1).saturating_mul(page_size.get()).min(len);
        let end = start.saturating_add(page_size.get()).min(len);
        &self.matches[start..end]
    }

    /// Number of matches beyond the current window
    pub fn remaining(&self, page_size: PageSize) -> usize {
        self.matches
            .len()
            .saturating_sub(self.page.saturating_mul(page_size.get()))
    }

    /// Whether the "show more" trigger should be enabled
    pub fn can_advance(&self, page_size: PageSize) -> bool {
        self.remaining(page_size) > 0
    }

    /// Label for the "show more" trigger
    pub fn show_more_label(&self, page_size: PageSize) -> String {
        format!("Show more ({})", self.remaining(page_size))
    }

    /// False when the "no results" message should be shown
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Number of pages needed for all matches (at least 1)
    pub fn total_pages(&self, page_size: PageSize) -> usize {
        self.matches.len().div_ceil(page_size.get()).max(1)
    }

    pub fn matches(&self) -> &[&'c BookRecord] {
        &self.matches
    }

    /// Current page, starting at 1
    pub fn page(&self) -> usize {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn books(n: usize) -> Vec<BookRecord> {
        (0..n)
            .map(|i| {
                BookRecord::new(
                    format!("book-{}", i),
                    format!("Book {}", i),
                    "anon",
                    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
                )
                .with_genre("fiction")
            })
            .collect()
    }

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_first_page_window() {
        let books = books(10);
        let view = ViewState::filter(&books, &FilterCriteria::any());
        assert_eq!(view.page(), 1);
        assert_eq!(view.visible_window(size(4)).len(), 4);
        assert_eq!(view.remaining(size(4)), 6);
        assert_eq!(view.total_pages(size(4)), 3);
        assert_eq!(view.show_more_label(size(4)), "Show more (6)");
    }

    #[test]
    fn test_advance_saturates_on_last_page() {
        let books = books(10);
        let view = ViewState::filter(&books, &FilterCriteria::any())
            .advance_page(size(4))
            .advance_page(size(4));
        assert_eq!(view.page(), 3);
        assert_eq!(view.visible_window(size(4)).len(), 2);
        assert_eq!(view.remaining(size(4)), 0);
        assert!(!view.can_advance(size(4)));

        let view = view.advance_page(size(4));
        assert_eq!(view.page(), 3);
        assert_eq!(view.visible_window(size(4)).len(), 2);
    }

    #[test]
    fn test_empty_result() {
        let books = books(3);
        let view = ViewState::filter(&books, &FilterCriteria::any().with_title("missing"));
        assert!(!view.has_matches());
        assert!(view.visible_window(size(2)).is_empty());
        assert_eq!(view.remaining(size(2)), 0);
        assert_eq!(view.total_pages(size(2)), 1);
        assert_eq!(view.advance_page(size(2)).page(), 1);
    }

    #[test]
    fn test_seek_clamps_to_last_page() {
        let books = books(10);
        let view = ViewState::filter(&books, &FilterCriteria::any());
        assert_eq!(view.clone().seek(0, size(4)).page(), 1);
        assert_eq!(view.clone().seek(2, size(4)).page(), 2);
        assert_eq!(view.seek(99, size(4)).page(), 3);
    }

    #[test]
    fn test_apply_resets_page() {
        let catalog = Catalog::sample().unwrap();
        let view = ViewState::initial(&catalog).advance_page(size(5));
        assert_eq!(view.page(), 2);

        let view = ViewState::apply(&catalog, &FilterCriteria::from_form("", "austen", "any"));
        assert_eq!(view.page(), 1);
        assert_eq!(view.matches().len(), 3);
    }
}
