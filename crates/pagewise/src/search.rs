//! Free-text search across declared fields.
//!
//! A [`SearchQuery`] pairs the current query text with the fields it is
//! matched against. Matching is case-insensitive substring containment;
//! a record matches if *any* search field contains the query.

/// Free-text query over a fixed set of string fields.
///
/// # Example
///
/// ```
/// use pagewise::{SearchQuery, Value};
///
/// struct Contact {
///     name: String,
/// }
///
/// fn accessor<'a>(c: &'a Contact, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&c.name),
///         _ => Value::None,
///     }
/// }
///
/// let mut query = SearchQuery::new(["name", "email"]);
/// query.set_text("ADA");
///
/// let contact = Contact { name: "Ada Lovelace".into() };
/// assert!(query.matches(&contact, accessor));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    fields: Vec<String>,
    text: String,
    folded: String,
}

impl SearchQuery {
    /// Creates an empty query over the given fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchQuery {
            fields: fields.into_iter().map(Into::into).collect(),
            text: String::new(),
            folded: String::new(),
        }
    }

    /// Replaces the query text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.folded = fold(&self.text);
    }

    /// Clears the query text. An empty query matches everything.
    pub fn clear(&mut self) {
        self.text.clear();
        self.folded.clear();
    }

    /// The query text as the caller supplied it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The declared search fields, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns `true` if the query text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Evaluates the query against a single record.
    ///
    /// An empty query matches. Otherwise the record matches if at least one
    /// declared field holds a string containing the query, ignoring case.
    /// Fields that are absent or not strings never match.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> crate::Value<'a>,
    {
        if self.folded.is_empty() {
            return true;
        }

        self.fields.iter().any(|field| {
            accessor(item, field)
                .as_str()
                .is_some_and(|candidate| contains_folded(candidate, &self.folded))
        })
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

fn contains_folded(candidate: &str, folded_needle: &str) -> bool {
    fold(candidate).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Number, Value};

    struct Student {
        name: &'static str,
        email: &'static str,
        country: Option<&'static str>,
        age: u8,
    }

    fn accessor<'a>(s: &'a Student, field: &str) -> Value<'a> {
        match field {
            "name" => Value::String(s.name),
            "email" => Value::String(s.email),
            "country" => Value::from(s.country),
            "age" => Value::Number(Number::from(s.age)),
            _ => Value::None,
        }
    }

    fn ada() -> Student {
        Student {
            name: "Ada Lovelace",
            email: "ada@example.org",
            country: None,
            age: 27,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::new(["name"]);
        assert!(query.is_empty());
        assert!(query.matches(&ada(), accessor));
    }

    #[test]
    fn match_is_case_insensitive() {
        let mut query = SearchQuery::new(["name"]);
        query.set_text("LOVE");
        assert!(query.matches(&ada(), accessor));

        query.set_text("love");
        assert!(query.matches(&ada(), accessor));
    }

    #[test]
    fn matches_any_declared_field() {
        let mut query = SearchQuery::new(["name", "email"]);
        query.set_text("example.org");
        assert!(query.matches(&ada(), accessor));
    }

    #[test]
    fn undeclared_fields_are_not_searched() {
        let mut query = SearchQuery::new(["name"]);
        query.set_text("example.org");
        assert!(!query.matches(&ada(), accessor));
    }

    #[test]
    fn non_string_and_missing_fields_never_match() {
        let mut query = SearchQuery::new(["age", "country", "nope"]);
        query.set_text("27");
        assert!(!query.matches(&ada(), accessor));
    }

    #[test]
    fn substring_not_tokenized() {
        let mut query = SearchQuery::new(["name"]);
        query.set_text("a lov");
        assert!(query.matches(&ada(), accessor));

        query.set_text("lovelace ada");
        assert!(!query.matches(&ada(), accessor));
    }

    #[test]
    fn unicode_case_folding() {
        let student = Student {
            name: "ÉLODIE Dubois",
            email: "",
            country: Some("France"),
            age: 21,
        };
        let mut query = SearchQuery::new(["name"]);
        query.set_text("élodie");
        assert!(query.matches(&student, accessor));
    }

    #[test]
    fn clear_resets_text() {
        let mut query = SearchQuery::new(["name"]);
        query.set_text("zzz");
        assert!(!query.matches(&ada(), accessor));

        query.clear();
        assert_eq!(query.text(), "");
        assert!(query.matches(&ada(), accessor));
    }
}
