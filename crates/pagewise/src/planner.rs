//! Page-number window planning.
//!
//! Given the current page and the page count, [`PageWindowPlanner`] decides
//! which page numbers and ellipses a pagination control should render:
//!
//! ```text
//! total ≤ threshold   →  1 2 3 … total
//! otherwise           →  1 [… ] (current ± siblings, within 2..total-1) [ …] total
//! ```
//!
//! Planning is a pure function of its inputs.

use serde::{Deserialize, Serialize};

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Default page count at or below which every page is listed.
pub const DEFAULT_COMPACT_THRESHOLD: usize = 5;

/// A renderable unit in a pagination control.
///
/// Serializes as `{"page": 3}` or `"ellipsis"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageMarker {
    /// A concrete, navigable page number (1-based).
    Page(usize),
    /// A gap placeholder. Not navigable.
    Ellipsis,
}

impl PageMarker {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(n),
            PageMarker::Ellipsis => None,
        }
    }

    /// Returns `true` if this is an ellipsis.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

impl std::fmt::Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => write!(f, "…"),
        }
    }
}

/// Window planning parameters.
///
/// # Example
///
/// ```
/// use pagewise::{PageMarker::{self, Ellipsis, Page}, PageWindowPlanner};
///
/// let planner = PageWindowPlanner::default();
/// assert_eq!(
///     planner.plan(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindowPlanner {
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,
    /// Page counts at or below this are listed in full, without ellipses.
    pub compact_threshold: usize,
}

impl Default for PageWindowPlanner {
    fn default() -> Self {
        PageWindowPlanner {
            sibling_count: DEFAULT_SIBLING_COUNT,
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
        }
    }
}

impl PageWindowPlanner {
    /// Creates a planner with the given sibling count and the default
    /// compact threshold.
    pub fn new(sibling_count: usize) -> Self {
        PageWindowPlanner {
            sibling_count,
            ..PageWindowPlanner::default()
        }
    }

    /// Sets the compact threshold.
    pub fn compact_threshold(mut self, threshold: usize) -> Self {
        self.compact_threshold = threshold;
        self
    }

    /// Produces the ordered marker sequence for a pagination control.
    ///
    /// `total_pages == 0` yields no markers. A `current_page` outside
    /// `1..=total_pages` is clamped first.
    pub fn plan(&self, current_page: usize, total_pages: usize) -> Vec<PageMarker> {
        if total_pages == 0 {
            return Vec::new();
        }
        // A single page has no window to plan, whatever the threshold.
        if total_pages <= self.compact_threshold.max(1) {
            return (1..=total_pages).map(PageMarker::Page).collect();
        }

        let current = current_page.clamp(1, total_pages);
        let last = total_pages;
        let lower = current.saturating_sub(self.sibling_count).max(2);
        let upper = current.saturating_add(self.sibling_count).min(last - 1);

        let mut markers = Vec::with_capacity(2 * self.sibling_count.min(last) + 5);
        markers.push(PageMarker::Page(1));
        if lower > 2 {
            markers.push(PageMarker::Ellipsis);
        }
        // Empty when siblings are 0 and current sits on an edge.
        markers.extend((lower..=upper).map(PageMarker::Page));
        if upper < last - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(last));
        markers
    }
}

/// Plans a window with the given sibling count and the default compact
/// threshold.
///
/// ```
/// use pagewise::{plan, PageMarker::{Ellipsis, Page}};
///
/// assert_eq!(plan(1, 10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
/// assert_eq!(plan(3, 4, 1), vec![Page(1), Page(2), Page(3), Page(4)]);
/// ```
pub fn plan(current_page: usize, total_pages: usize, sibling_count: usize) -> Vec<PageMarker> {
    PageWindowPlanner::new(sibling_count).plan(current_page, total_pages)
}
