//! Named equality filters.
//!
//! A [`FilterSet`] holds one selected value per declared field. The reserved
//! value [`ALL`] leaves a field unconstrained; any other value must equal the
//! record's field after string coercion (see [`Value::coerce`]).
//!
//! ```text
//! match = every non-"all" entry equals the record's coerced field value
//! ```
//!
//! [`Value::coerce`]: crate::Value::coerce

use crate::value::Value;

/// Reserved filter value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// A declared filterable field and its default selection.
///
/// # Example
///
/// ```
/// use pagewise::{FilterDescriptor, ALL};
///
/// let status = FilterDescriptor::new("status", ALL);
/// let country: FilterDescriptor = ("country", "Canada").into();
/// assert_eq!(country.default, "Canada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    /// The record field to compare.
    pub field: String,
    /// The selection used initially and after a reset.
    pub default: String,
}

impl FilterDescriptor {
    /// Creates a new descriptor.
    pub fn new(field: impl Into<String>, default: impl Into<String>) -> Self {
        FilterDescriptor {
            field: field.into(),
            default: default.into(),
        }
    }

    /// Creates a descriptor whose default is [`ALL`].
    pub fn unconstrained(field: impl Into<String>) -> Self {
        FilterDescriptor::new(field, ALL)
    }
}

impl<F: Into<String>, D: Into<String>> From<(F, D)> for FilterDescriptor {
    fn from((field, default): (F, D)) -> Self {
        FilterDescriptor::new(field, default)
    }
}

impl From<&str> for FilterDescriptor {
    fn from(field: &str) -> Self {
        FilterDescriptor::unconstrained(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    descriptor: FilterDescriptor,
    selected: String,
}

impl Entry {
    fn is_active(&self) -> bool {
        self.selected != ALL
    }

    fn matches(&self, field_value: &Value<'_>) -> bool {
        match field_value.coerce() {
            Some(coerced) => coerced == self.selected.as_str(),
            // A missing field never satisfies a constraint
            None => false,
        }
    }
}

/// The current selection for every declared filter field.
///
/// Entries keep declaration order. Evaluation short-circuits in that order,
/// but the result is the same for any order since all entries are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<Entry>,
}

impl FilterSet {
    /// Creates a filter set from descriptors, each starting at its default.
    ///
    /// If a field is declared twice the first declaration wins.
    pub fn new<I, D>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<FilterDescriptor>,
    {
        let mut entries: Vec<Entry> = Vec::new();
        for descriptor in descriptors.into_iter().map(Into::into) {
            if entries
                .iter()
                .any(|e| e.descriptor.field == descriptor.field)
            {
                tracing::debug!(
                    target: "pagewise::filter",
                    field = %descriptor.field,
                    "duplicate filter descriptor ignored"
                );
                continue;
            }
            entries.push(Entry {
                selected: descriptor.default.clone(),
                descriptor,
            });
        }
        FilterSet { entries }
    }

    /// Selects a value for a declared field.
    ///
    /// Returns `false`, leaving the set unchanged, if the field was never
    /// declared.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.entry_mut(field) {
            Some(entry) => {
                entry.selected = value.into();
                true
            }
            None => {
                tracing::debug!(
                    target: "pagewise::filter",
                    field,
                    "ignoring unknown filter key"
                );
                false
            }
        }
    }

    /// Restores one field's default. Unknown fields are ignored.
    pub fn reset(&mut self, field: &str) -> bool {
        match self.entry_mut(field) {
            Some(entry) => {
                entry.selected.clone_from(&entry.descriptor.default);
                true
            }
            None => false,
        }
    }

    /// Restores every field's default.
    pub fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.selected.clone_from(&entry.descriptor.default);
        }
    }

    /// The current selection for a field, if declared.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.descriptor.field == field)
            .map(|e| e.selected.as_str())
    }

    /// Iterates the declared descriptors in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FilterDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    /// Iterates `(field, value)` for the entries that constrain results.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|e| e.is_active())
            .map(|e| (e.descriptor.field.as_str(), e.selected.as_str()))
    }

    /// Returns `true` if no entry constrains results.
    pub fn is_unconstrained(&self) -> bool {
        !self.entries.iter().any(Entry::is_active)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates every active entry against a record.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.entries
            .iter()
            .filter(|e| e.is_active())
            .all(|e| e.matches(&accessor(item, &e.descriptor.field)))
    }

    fn entry_mut(&mut self, field: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.descriptor.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    struct Application {
        status: &'static str,
        country: &'static str,
        intake: u16,
        scholarship: bool,
        agent: Option<&'static str>,
    }

    fn accessor<'a>(a: &'a Application, field: &str) -> Value<'a> {
        match field {
            "status" => Value::String(a.status),
            "country" => Value::String(a.country),
            "intake" => Value::Number(Number::from(a.intake)),
            "scholarship" => Value::Bool(a.scholarship),
            "agent" => Value::from(a.agent),
            _ => Value::None,
        }
    }

    fn pending_canada() -> Application {
        Application {
            status: "pending",
            country: "Canada",
            intake: 2025,
            scholarship: true,
            agent: None,
        }
    }

    #[test]
    fn empty_set_matches() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert!(filters.is_unconstrained());
        assert!(filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn all_is_unconstrained() {
        let filters = FilterSet::new(["status", "country"]);
        assert!(filters.is_unconstrained());
        assert!(filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn exact_equality() {
        let mut filters = FilterSet::new(["status"]);
        filters.set("status", "pending");
        assert!(filters.matches(&pending_canada(), accessor));

        filters.set("status", "Pending");
        assert!(!filters.matches(&pending_canada(), accessor));

        filters.set("status", "pend");
        assert!(!filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn entries_are_anded() {
        let mut filters = FilterSet::new(["status", "country"]);
        filters.set("status", "pending");
        filters.set("country", "Australia");
        assert!(!filters.matches(&pending_canada(), accessor));

        filters.set("country", "Canada");
        assert!(filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn non_string_fields_are_coerced() {
        let mut filters = FilterSet::new(["intake", "scholarship"]);
        filters.set("intake", "2025");
        filters.set("scholarship", "true");
        assert!(filters.matches(&pending_canada(), accessor));

        filters.set("scholarship", "false");
        assert!(!filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn missing_field_never_matches_a_constraint() {
        let mut filters = FilterSet::new(["agent", "unknown_field"]);
        assert!(filters.matches(&pending_canada(), accessor));

        filters.set("agent", "none");
        assert!(!filters.matches(&pending_canada(), accessor));

        filters.set("agent", ALL);
        filters.set("unknown_field", "x");
        assert!(!filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn undeclared_keys_are_ignored() {
        let mut filters = FilterSet::new(["status"]);
        assert!(!filters.set("country", "Mars"));
        assert_eq!(filters.get("country"), None);
        assert!(filters.matches(&pending_canada(), accessor));
    }

    #[test]
    fn defaults_and_reset() {
        let mut filters = FilterSet::new([
            FilterDescriptor::new("status", "pending"),
            FilterDescriptor::unconstrained("country"),
        ]);
        assert_eq!(filters.get("status"), Some("pending"));
        assert!(!filters.is_unconstrained());

        filters.set("status", "approved");
        filters.set("country", "Canada");
        assert!(filters.reset("status"));
        assert_eq!(filters.get("status"), Some("pending"));
        assert_eq!(filters.get("country"), Some("Canada"));

        filters.reset_all();
        assert_eq!(filters.get("country"), Some(ALL));
        assert!(!filters.reset("missing"));
    }

    #[test]
    fn active_lists_constraining_entries_in_order() {
        let mut filters = FilterSet::new(["status", "country", "intake"]);
        filters.set("intake", "2025");
        filters.set("status", "pending");

        let active: Vec<_> = filters.active().collect();
        assert_eq!(active, vec![("status", "pending"), ("intake", "2025")]);
    }

    #[test]
    fn duplicate_descriptor_keeps_first() {
        let filters = FilterSet::new([("status", "pending"), ("status", "approved")]);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get("status"), Some("pending"));
    }
}
