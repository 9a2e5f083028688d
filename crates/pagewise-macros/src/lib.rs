//! Proc macros for Pagewise.
//!
//! - [`Listable`] - Generate the record accessor used by the list engine
//!
//! Usually reached through `pagewise` with the `derive` feature enabled.

mod listable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Listable` trait for list records.
///
/// # Field Attributes
///
/// | Attribute | Field type | Exposed as |
/// |-----------|------------|------------|
/// | `text` | `String`, `&str`, anything `AsRef<str>` | searchable string |
/// | `optional` | `Option<String>` | string, or missing when `None` |
/// | `number` | integer or float | number (filters compare its decimal form) |
/// | `bool` | `bool` | `"true"` / `"false"` for filters |
/// | `label` | type implementing `FilterLabel` | its label string |
/// | `skip` | any | not exposed |
/// | `rename = "..."` | any | under a custom field name |
///
/// Fields without a `#[list(...)]` kind are not exposed.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Student::NAME`, `Student::INTAKE`)
/// 2. Implementation of `Listable::field_value()`
///
/// # Example
///
/// ```ignore
/// use pagewise::{FilterLabel, ListQueryEngine, Listable, ALL};
///
/// enum Stage { Applied, Offer }
///
/// impl FilterLabel for Stage {
///     fn filter_label(&self) -> &'static str {
///         match self {
///             Stage::Applied => "applied",
///             Stage::Offer => "offer",
///         }
///     }
/// }
///
/// #[derive(Listable)]
/// struct Student {
///     #[list(text)]
///     name: String,
///
///     #[list(optional)]
///     agent: Option<String>,
///
///     #[list(number)]
///     intake: u16,
///
///     #[list(label)]
///     stage: Stage,
///
///     #[list(skip)]
///     passport_no: String,
/// }
///
/// let mut engine = ListQueryEngine::configure([Student::NAME, Student::AGENT], [(Student::STAGE, ALL)]);
/// engine.set_filter(Student::STAGE, "offer");
/// let visible = engine.apply(&students, Student::accessor);
/// ```
#[proc_macro_derive(Listable, attributes(list))]
pub fn listable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    listable::listable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
