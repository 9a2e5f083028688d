//! Pagewise - search, filter and pagination engine for list views.
//!
//! Pagewise holds the state behind an admin list screen and derives what to
//! show from it. It provides:
//!
//! - Free-text search across several string fields (case-insensitive substring)
//! - Named equality filters where `"all"` means "no constraint"
//! - A page controller that clamps instead of failing
//! - A page-window planner deciding which page numbers and ellipses to render
//!
//! Everything is synchronous and in memory. The caller owns the collection
//! and re-runs [`ListQueryEngine::apply`] or [`ListView::render`] whenever
//! an input changes.
//!
//! # Quick Start
//!
//! ```rust
//! use pagewise::{ListQueryEngine, ListView, ListViewConfig, PageMarker, Value};
//!
//! struct Application {
//!     student: String,
//!     university: String,
//!     status: &'static str,
//! }
//!
//! fn accessor<'a>(app: &'a Application, field: &str) -> Value<'a> {
//!     match field {
//!         "student" => Value::String(&app.student),
//!         "university" => Value::String(&app.university),
//!         "status" => Value::String(app.status),
//!         _ => Value::None,
//!     }
//! }
//!
//! let applications: Vec<Application> = (1..=60)
//!     .map(|n| Application {
//!         student: format!("Student {n}"),
//!         university: if n % 2 == 0 { "Toronto".into() } else { "Melbourne".into() },
//!         status: if n % 3 == 0 { "approved" } else { "pending" },
//!     })
//!     .collect();
//!
//! let engine = ListQueryEngine::configure(["student", "university"], ["status"]);
//! let mut view = ListView::new(engine, ListViewConfig::default());
//!
//! view.set_query("toronto");
//! view.set_filter("status", "pending");
//! let page = view.render(&applications, accessor);
//!
//! assert_eq!(page.filtered_count, 20);
//! assert_eq!(page.state.total_pages, 2);
//! assert_eq!(page.markers, vec![PageMarker::Page(1), PageMarker::Page(2)]);
//! ```
//!
//! # Filtering Semantics
//!
//! ```text
//! match = (query is empty OR any search field contains it, ignoring case)
//!       ∧ (every filter not set to "all" equals the field, compared as strings)
//! ```
//!
//! - Fields that are missing or not strings never match the search.
//! - Missing fields never satisfy a filter; unknown filter keys are ignored.
//! - Results keep the order of the source collection.
//!
//! # Page Window
//!
//! | Current / Total | Markers |
//! |-----------------|---------|
//! | 3 / 4  | `1 2 3 4` |
//! | 1 / 10 | `1 2 … 10` |
//! | 5 / 10 | `1 … 4 5 6 … 10` |
//! | 10 / 10 | `1 … 9 10` |
//!
//! # Derive
//!
//! With the `derive` feature, `#[derive(Listable)]` generates the accessor:
//!
//! ```ignore
//! use pagewise::Listable;
//!
//! #[derive(Listable)]
//! struct Student {
//!     #[list(text)]
//!     name: String,
//!     #[list(number)]
//!     intake: u16,
//! }
//!
//! let visible = engine.apply(&students, Student::accessor);
//! ```

mod config;
mod controller;
mod engine;
mod error;
mod filter;
mod planner;
mod search;
mod traits;
mod value;
mod view;

// Re-export public API
pub use config::ListViewConfig;
pub use controller::{PageController, PaginationState, DEFAULT_PAGE_SIZE};
pub use engine::ListQueryEngine;
pub use error::{ConfigError, Result};
pub use filter::{FilterDescriptor, FilterSet, ALL};
pub use planner::{
    plan, PageMarker, PageWindowPlanner, DEFAULT_COMPACT_THRESHOLD, DEFAULT_SIBLING_COUNT,
};
pub use search::SearchQuery;
pub use traits::{FilterLabel, Listable};
pub use value::{Number, Value};
pub use view::{ListView, Page};

#[cfg(feature = "derive")]
pub use pagewise_macros::Listable;
