//! Search and filter engine.
//!
//! [`ListQueryEngine`] owns the current [`SearchQuery`] and [`FilterSet`] and
//! derives the filtered view of a collection on demand. It keeps no reference
//! to the collection between calls.
//!
//! ```text
//! match = (query empty OR any search field contains query, ignoring case)
//!       ∧ (every non-"all" filter equals the coerced field value)
//! ```

use crate::filter::{FilterDescriptor, FilterSet};
use crate::search::SearchQuery;
use crate::value::Value;

/// Search text and filter selections for a list screen.
///
/// # Example
///
/// ```
/// use pagewise::{ListQueryEngine, Value};
///
/// struct Lead {
///     name: String,
///     email: String,
///     status: String,
/// }
///
/// fn accessor<'a>(lead: &'a Lead, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&lead.name),
///         "email" => Value::String(&lead.email),
///         "status" => Value::String(&lead.status),
///         _ => Value::None,
///     }
/// }
///
/// let leads = vec![
///     Lead { name: "Amira Haddad".into(), email: "amira@uni.edu".into(), status: "new".into() },
///     Lead { name: "Ben Okafor".into(), email: "ben@mail.com".into(), status: "contacted".into() },
///     Lead { name: "Chen Wei".into(), email: "chen@uni.edu".into(), status: "new".into() },
/// ];
///
/// let mut engine = ListQueryEngine::configure(["name", "email"], ["status"]);
/// engine.set_query("UNI.EDU");
/// engine.set_filter("status", "new");
///
/// let visible = engine.apply(&leads, accessor);
/// assert_eq!(visible.len(), 2);
/// assert_eq!(visible[0].name, "Amira Haddad");
/// assert_eq!(visible[1].name, "Chen Wei");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQueryEngine {
    search: SearchQuery,
    filters: FilterSet,
}

impl ListQueryEngine {
    /// Creates an engine with the given search fields and filter descriptors.
    ///
    /// Filter descriptors accept a bare field name (default [`ALL`]), a
    /// `(field, default)` tuple, or a [`FilterDescriptor`].
    ///
    /// [`ALL`]: crate::ALL
    pub fn configure<S, SI, D, DI>(search_fields: SI, filter_descriptors: DI) -> Self
    where
        SI: IntoIterator<Item = S>,
        S: Into<String>,
        DI: IntoIterator<Item = D>,
        D: Into<FilterDescriptor>,
    {
        ListQueryEngine {
            search: SearchQuery::new(search_fields),
            filters: FilterSet::new(filter_descriptors),
        }
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search.set_text(text);
        tracing::trace!(target: "pagewise::engine", query = %self.search.text(), "search updated");
    }

    /// Clears the search text.
    pub fn clear_query(&mut self) {
        self.search.clear();
    }

    /// Selects a filter value. Unknown fields are ignored and return `false`.
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.filters.set(field, value)
    }

    /// Restores one filter's default.
    pub fn reset_filter(&mut self, field: &str) -> bool {
        self.filters.reset(field)
    }

    /// Restores every filter's default.
    pub fn reset_filters(&mut self) {
        self.filters.reset_all();
    }

    /// The current search query.
    pub fn query(&self) -> &SearchQuery {
        &self.search
    }

    /// The current filter selections.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Returns `true` if neither search nor filters constrain results.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.filters.is_unconstrained()
    }

    /// Checks if a single record passes the current search and filters.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filters.matches(item, &accessor) && self.search.matches(item, &accessor)
    }

    /// Derives the filtered view of a collection.
    ///
    /// Returns references to matching items in their original order.
    pub fn apply<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();

        tracing::debug!(
            target: "pagewise::engine",
            total = items.len(),
            matched = results.len(),
            "applied list query"
        );
        results
    }

    /// Like [`apply`](Self::apply), but clones the matching items.
    pub fn apply_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.apply(items, accessor).into_iter().cloned().collect()
    }

    /// Counts matching items without collecting them.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }
}
