//! Current-page bookkeeping.
//!
//! [`PageController`] owns the current page, page size and item count, and
//! keeps the current page inside `1..=max(total_pages, 1)` at all times.
//! Every navigation call sanitizes its input rather than failing.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::planner::{PageMarker, PageWindowPlanner};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Snapshot of pagination for display ("page X of Y").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    /// The current page, 1-based.
    pub current_page: usize,
    /// Number of pages; 0 for an empty list.
    pub total_pages: usize,
    /// Items per page.
    pub page_size: usize,
    /// Number of items being paginated.
    pub total_items: usize,
}

/// Tracks and navigates the current page of a list.
///
/// # Example
///
/// ```
/// use pagewise::PageController;
///
/// let mut pages = PageController::new(10);
/// pages.recompute(45, 10);
/// assert_eq!(pages.total_pages(), 5);
///
/// pages.go_to(9);
/// assert_eq!(pages.current_page(), 5);
///
/// // A filter narrows the list to 12 items.
/// pages.recompute(12, 10);
/// assert_eq!(pages.current_page(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageController {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for PageController {
    fn default() -> Self {
        PageController::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageController {
    /// Creates a controller for an empty list. A `page_size` of 0 is
    /// treated as 1.
    pub fn new(page_size: usize) -> Self {
        PageController {
            current_page: 1,
            total_pages: 0,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    /// The current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The item count from the last [`recompute`](Self::recompute).
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns a display snapshot.
    pub fn state(&self) -> PaginationState {
        PaginationState {
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_size: self.page_size,
            total_items: self.total_items,
        }
    }

    /// Recalculates the page count after the item count or page size
    /// changes, re-clamping the current page in the same call.
    pub fn recompute(&mut self, item_count: usize, page_size: usize) -> PaginationState {
        self.page_size = page_size.max(1);
        self.total_items = item_count;
        self.total_pages = item_count.div_ceil(self.page_size);

        let clamped = self.clamp(self.current_page);
        if clamped != self.current_page {
            tracing::debug!(
                target: "pagewise::controller",
                from = self.current_page,
                to = clamped,
                total_pages = self.total_pages,
                "current page re-clamped"
            );
            self.current_page = clamped;
        }
        self.state()
    }

    /// Moves to `page`, clamped into the valid range.
    pub fn go_to(&mut self, page: usize) -> PaginationState {
        let clamped = self.clamp(page);
        if clamped != page {
            tracing::trace!(
                target: "pagewise::controller",
                requested = page,
                page = clamped,
                "page request clamped"
            );
        }
        self.current_page = clamped;
        self.state()
    }

    /// Advances one page. Does nothing on the last page.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> PaginationState {
        if self.has_next() {
            self.current_page += 1;
        }
        self.state()
    }

    /// Goes back one page. Does nothing on the first page.
    pub fn prev(&mut self) -> PaginationState {
        if self.has_prev() {
            self.current_page -= 1;
        }
        self.state()
    }

    /// Moves to the first page.
    pub fn first(&mut self) -> PaginationState {
        self.go_to(1)
    }

    /// Moves to the last page (page 1 for an empty list).
    pub fn last(&mut self) -> PaginationState {
        self.go_to(self.total_pages)
    }

    /// Returns to page 1 without touching the page count.
    pub fn reset(&mut self) -> PaginationState {
        self.current_page = 1;
        self.state()
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Index range of the current page within the paginated items.
    ///
    /// Empty when there are no items.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Slices the current page out of `items`.
    ///
    /// `items` is expected to be the collection last passed to
    /// [`recompute`](Self::recompute); a shorter slice is truncated safely.
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Plans the page markers for the current state.
    pub fn markers(&self, planner: &PageWindowPlanner) -> Vec<PageMarker> {
        planner.plan(self.current_page, self.total_pages)
    }

    fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages.max(1))
    }
}
