//! Listing-view state: pagination math and query modes.
//!
//! The event listing runs in exactly one of three modes at a time, selected
//! by the most recent user interaction. The mode is an explicit tagged value;
//! the legacy `?category=` search-box convention is recognized once at the
//! input boundary by [`classify_search_input`] and never sniffed downstream.

/// Fixed page size of the event listing.
pub const EVENTS_PAGE_SIZE: u32 = 8;

/// `max(ceil(count / page_size), 1)`: an empty result set still has one page,
/// so the pager never reaches a zero-page state.
pub fn total_pages(count: i64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let count = count.max(0) as u64;
    let pages = count.div_ceil(page_size as u64);
    pages.max(1) as u32
}

/// Which query the listing is currently issuing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingMode {
    #[default]
    All,
    Category(String),
    Search(String),
}

/// Current page / page count pair driving the Prev and Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl Pager {
    pub fn at_first(&self) -> bool {
        self.page <= 1
    }

    pub fn at_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Step back one page, clamped at page 1.
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Step forward one page, clamped at the last page.
    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Recompute the page count from a fresh result-set total. Also pulls the
    /// current page back in range when the result set shrank under it.
    pub fn apply_count(&mut self, count: i64) {
        self.total_pages = total_pages(count, EVENTS_PAGE_SIZE);
        self.page = self.page.min(self.total_pages);
    }
}

/// What a search-box edit means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Field cleared: re-issue the plain listing.
    Clear,
    /// Free-text search.
    Query(String),
    /// Legacy `?category=` jump convention.
    CategoryJump(String),
    /// Other `?`-prefixed text; not a query, wait for more input.
    Ignore,
}

const CATEGORY_JUMP_PREFIX: &str = "?category=";

pub fn classify_search_input(raw: &str) -> SearchAction {
    if raw.is_empty() {
        return SearchAction::Clear;
    }
    if let Some(category) = raw.strip_prefix(CATEGORY_JUMP_PREFIX) {
        if !category.is_empty() {
            return SearchAction::CategoryJump(category.to_string());
        }
        return SearchAction::Ignore;
    }
    if raw.starts_with('?') {
        return SearchAction::Ignore;
    }
    SearchAction::Query(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
        assert_eq!(total_pages(-5, 8), 1);
    }

    #[test]
    fn pager_clamps_at_both_boundaries() {
        let mut pager = Pager {
            page: 1,
            total_pages: 3,
        };
        assert!(pager.at_first());
        pager.prev();
        assert_eq!(pager.page, 1);

        pager.next();
        pager.next();
        assert!(pager.at_last());
        pager.next();
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn empty_result_set_yields_one_page_and_disabled_controls() {
        let mut pager = Pager::default();
        pager.apply_count(0);
        assert_eq!(pager.total_pages, 1);
        assert!(pager.at_first() && pager.at_last());
    }

    #[test]
    fn apply_count_pulls_page_back_in_range() {
        let mut pager = Pager {
            page: 5,
            total_pages: 5,
        };
        pager.apply_count(10);
        assert_eq!(pager.total_pages, 2);
        assert_eq!(pager.page, 2);
    }

    #[test]
    fn search_input_classification() {
        assert_eq!(classify_search_input(""), SearchAction::Clear);
        assert_eq!(
            classify_search_input("jazz"),
            SearchAction::Query("jazz".into())
        );
        assert_eq!(
            classify_search_input("?category=music"),
            SearchAction::CategoryJump("music".into())
        );
        assert_eq!(classify_search_input("?category="), SearchAction::Ignore);
        assert_eq!(classify_search_input("?cat"), SearchAction::Ignore);
    }
}
