//! One list screen: search, filters and pagination wired together.
//!
//! [`ListView`] follows the data flow of a list screen:
//!
//! ```text
//! items ─► ListQueryEngine::apply ─► PageController::recompute ─► page slice
//!                                                 └──────────► PageWindowPlanner::plan
//! ```
//!
//! The caller keeps ownership of the collection and calls
//! [`ListView::render`] whenever it or the view's inputs change.

use std::fmt;

use crate::config::ListViewConfig;
use crate::controller::{PageController, PaginationState};
use crate::engine::ListQueryEngine;
use crate::planner::{PageMarker, PageWindowPlanner};
use crate::value::Value;

type Listener = Box<dyn FnMut(&PaginationState)>;

/// A rendered page of a list view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// Items on the current page, in source order.
    pub items: Vec<&'a T>,
    /// Pagination after recomputing for the filtered count.
    pub state: PaginationState,
    /// Page markers for the pagination control.
    pub markers: Vec<PageMarker>,
    /// Number of items that passed search and filters, across all pages.
    pub filtered_count: usize,
}

impl<T> Page<'_, T> {
    /// Returns `true` if nothing passed search and filters.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Search, filter and pagination state for a single list.
///
/// # Example
///
/// ```
/// use pagewise::{ListQueryEngine, ListView, ListViewConfig, Value};
///
/// fn accessor<'a>(name: &'a String, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(name),
///         _ => Value::None,
///     }
/// }
///
/// let universities: Vec<String> = (1..=30).map(|n| format!("University {n}")).collect();
///
/// let engine = ListQueryEngine::configure(["name"], Vec::<&str>::new());
/// let mut view = ListView::new(engine, ListViewConfig::with_page_size(5));
///
/// let page = view.render(&universities, accessor);
/// assert_eq!(page.state.total_pages, 6);
///
/// view.go_to(3);
/// let page = view.render(&universities, accessor);
/// assert_eq!(page.items[0], "University 11");
///
/// view.set_query("university 2");
/// let page = view.render(&universities, accessor);
/// assert_eq!(page.filtered_count, 11);
/// assert_eq!(page.state.current_page, 1);
/// ```
pub struct ListView {
    engine: ListQueryEngine,
    controller: PageController,
    planner: PageWindowPlanner,
    listener: Option<Listener>,
}

impl ListView {
    /// Creates a view from an engine and a config.
    pub fn new(engine: ListQueryEngine, config: ListViewConfig) -> Self {
        ListView {
            engine,
            controller: PageController::new(config.page_size),
            planner: config.planner(),
            listener: None,
        }
    }

    /// Installs a callback run whenever the current page changes, whether
    /// by navigation or by a search or filter change returning to page 1.
    pub fn on_change(&mut self, listener: impl FnMut(&PaginationState) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// The search and filter engine.
    pub fn engine(&self) -> &ListQueryEngine {
        &self.engine
    }

    /// The page controller.
    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    /// The window planner.
    pub fn planner(&self) -> &PageWindowPlanner {
        &self.planner
    }

    /// Current pagination state.
    pub fn state(&self) -> PaginationState {
        self.controller.state()
    }

    /// Replaces the search text and returns to the first page.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.engine.set_query(text);
        self.filters_changed();
    }

    /// Selects a filter value and returns to the first page.
    ///
    /// Unknown fields are ignored: the page stays put and `false` is returned.
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) -> bool {
        let accepted = self.engine.set_filter(field, value);
        if accepted {
            self.filters_changed();
        }
        accepted
    }

    /// Restores every filter default and returns to the first page.
    pub fn reset_filters(&mut self) {
        self.engine.reset_filters();
        self.filters_changed();
    }

    /// Changes the page size, keeping the current page in range.
    pub fn set_page_size(&mut self, page_size: usize) -> PaginationState {
        let items = self.controller.total_items();
        self.navigate(|c| c.recompute(items, page_size))
    }

    /// Moves to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) -> PaginationState {
        self.navigate(|c| c.go_to(page))
    }

    /// Advances one page, if possible.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> PaginationState {
        self.navigate(PageController::next)
    }

    /// Goes back one page, if possible.
    pub fn prev(&mut self) -> PaginationState {
        self.navigate(PageController::prev)
    }

    /// Filters `items`, recomputes pagination and slices the current page.
    ///
    /// The current page is re-clamped if the filtered list got shorter.
    pub fn render<'a, T, F>(&mut self, items: &'a [T], accessor: F) -> Page<'a, T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let filtered = self.engine.apply(items, accessor);
        let page_size = self.controller.page_size();
        let state = self.controller.recompute(filtered.len(), page_size);
        let markers = self.controller.markers(&self.planner);
        let filtered_count = filtered.len();
        let page_items = self.controller.page_items(&filtered).to_vec();

        tracing::debug!(
            target: "pagewise::view",
            filtered = filtered_count,
            page = state.current_page,
            total_pages = state.total_pages,
            "rendered list page"
        );

        Page {
            items: page_items,
            state,
            markers,
            filtered_count,
        }
    }

    fn navigate(
        &mut self,
        f: impl FnOnce(&mut PageController) -> PaginationState,
    ) -> PaginationState {
        let before = self.controller.current_page();
        let state = f(&mut self.controller);
        if state.current_page != before {
            self.notify(&state);
        }
        state
    }

    fn filters_changed(&mut self) {
        self.navigate(PageController::reset);
    }

    fn notify(&mut self, state: &PaginationState) {
        if let Some(listener) = self.listener.as_mut() {
            listener(state);
        }
    }
}

impl fmt::Debug for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("engine", &self.engine)
            .field("controller", &self.controller)
            .field("planner", &self.planner)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
