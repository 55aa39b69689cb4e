//! Pagination utilities for service layer
//!
//! `Pagination` is what callers hand in (1-based page number), `PageRequest`
//! is what stores consume (0-based page index), and `Page` is the window
//! that comes back. `Pagination::normalize` is the only place converting
//! between the two numbering schemes.

use serde::Serialize;

/// Upper bound on items per page when no other limit is configured.
pub const MAX_PER_PAGE: u64 = 100;

/// Largest row offset a store is asked to skip (SQL `OFFSET` is a signed 64-bit value).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Caller-facing pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number; zero and negative values are clamped to 1
    pub page: i64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    pub fn new(page: i64, per_page: u64) -> Self { Self { page, per_page } }

    /// Clamp to sane bounds and convert to a 0-based store request.
    /// Page numbers so large that their offset would not fit are capped;
    /// such pages are past the end of any store and come back empty.
    pub fn normalize(self, max_per_page: u64) -> PageRequest {
        let size = self.per_page.clamp(1, max_per_page.max(1));
        let index = (self.page.max(1) - 1) as u64;
        PageRequest::new(index.min(MAX_OFFSET / size), size)
    }
}

/// Store-facing page window: 0-based index and a page size of at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    index: u64,
    size: u64,
}

impl PageRequest {
    pub fn new(index: u64, size: u64) -> Self { Self { index, size: size.max(1) } }

    pub fn index(&self) -> u64 { self.index }

    pub fn size(&self) -> u64 { self.size }

    /// Number of items preceding this window, capped at `MAX_OFFSET`.
    pub fn offset(&self) -> u64 { self.index.saturating_mul(self.size).min(MAX_OFFSET) }
}

/// A window over an ordered result set plus totals for the whole set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 0-based index of this window
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.index(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(request.size()),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    pub fn is_empty(&self) -> bool { self.content.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_and_negative_pages() {
        let req = Pagination { page: 0, per_page: 0 }.normalize(MAX_PER_PAGE);
        assert_eq!(req.index(), 0);
        assert_eq!(req.size(), 1);

        let req = Pagination { page: -7, per_page: 10 }.normalize(MAX_PER_PAGE);
        assert_eq!(req.index(), 0);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let req = Pagination { page: 5, per_page: 1000 }.normalize(MAX_PER_PAGE);
        assert_eq!(req.index(), 4);
        assert_eq!(req.size(), 100);
        assert_eq!(req.offset(), 400);
    }

    #[test]
    fn normalize_caps_huge_page_numbers() {
        let req = Pagination::new(i64::MAX, 10).normalize(MAX_PER_PAGE);
        assert_eq!(req.size(), 10);
        assert!(req.index().checked_mul(req.size()).is_some_and(|o| o <= MAX_OFFSET));
        assert_eq!(req.offset(), req.index() * req.size());

        let req = PageRequest::new(u64::MAX, 100);
        assert_eq!(req.offset(), MAX_OFFSET);
    }

    #[test]
    fn page_totals_round_up() {
        let req = PageRequest::new(0, 10);
        assert_eq!(Page::<u8>::new(vec![], req, 0).total_pages, 0);
        assert_eq!(Page::<u8>::new(vec![], req, 10).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], req, 11).total_pages, 2);
    }

    #[test]
    fn page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(1, 3), 7).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20, 30]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 3);
    }
}
