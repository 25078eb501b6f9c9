/// Pagination support for catalog list endpoints
///
/// The upstream service returns fixed-size pages; a page holding fewer items
/// than that size is the last one.
use serde::{Deserialize, Serialize};

/// Number of items the catalog service puts in every full page
pub const UPSTREAM_PAGE_SIZE: usize = 20;

/// Highest page number the catalog service will serve
pub const MAX_PAGE: u32 = 500;

/// One page of list results as delivered by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    /// How many items the upstream page held before any client-side narrowing
    pub upstream_len: usize,
}

impl<T> MoviePage<T> {
    pub fn new(items: Vec<T>, page: u32, total_pages: u32) -> Self {
        let upstream_len = items.len();
        Self {
            items,
            page,
            total_pages,
            upstream_len,
        }
    }

    pub fn empty(page: u32) -> Self {
        Self::new(Vec::new(), page, 0)
    }

    /// A full upstream page means more may follow
    pub fn is_full(&self) -> bool {
        self.upstream_len >= UPSTREAM_PAGE_SIZE
    }

    /// Whether a following page can be requested: this one is full, the
    /// service reported more pages, and the page cap is not reached
    pub fn has_next(&self) -> bool {
        self.is_full() && self.page < self.total_pages && self.page < MAX_PAGE
    }

    /// Narrow the items while remembering the upstream page size
    pub fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.items.retain(keep);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_detection() {
        let full = MoviePage::new((0..20).collect::<Vec<u32>>(), 1, 3);
        assert!(full.is_full());

        let short = MoviePage::new((0..5).collect::<Vec<u32>>(), 2, 2);
        assert!(!short.is_full());

        assert!(!MoviePage::<u32>::empty(3).is_full());
    }

    #[test]
    fn next_page_needs_room_upstream() {
        let items = || (0..20).collect::<Vec<u32>>();
        assert!(MoviePage::new(items(), 1, 3).has_next());
        assert!(!MoviePage::new(items(), 3, 3).has_next());
        assert!(!MoviePage::new(items(), MAX_PAGE, 900).has_next());
        assert!(!MoviePage::new((0..5).collect::<Vec<u32>>(), 1, 3).has_next());
    }

    #[test]
    fn retain_keeps_upstream_length() {
        let page = MoviePage::new((0..20).collect::<Vec<u32>>(), 1, 3).retain(|n| n % 2 == 0);
        assert_eq!(page.items.len(), 10);
        assert!(page.is_full());
    }
}
