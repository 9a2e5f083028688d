//! Traits for record access and derive macro support.
//!
//! [`Listable`] is implemented by `#[derive(Listable)]` (feature `derive`)
//! or by hand, and gives the engine a uniform way to read record fields.

use crate::value::Value;

/// Trait for records that can be searched and filtered by a list view.
///
/// Usually derived with `#[derive(Listable)]` from `pagewise-macros`, but
/// it is small enough to implement manually.
///
/// # Derive Usage
///
/// ```ignore
/// use pagewise::{Listable, ListQueryEngine};
///
/// #[derive(Listable)]
/// struct Application {
///     #[list(text)]
///     student: String,
///     #[list(text)]
///     university: String,
///     #[list(label)]
///     status: Status,
///     #[list(number)]
///     intake_year: u16,
/// }
///
/// let engine = ListQueryEngine::configure(
///     [Application::STUDENT, Application::UNIVERSITY],
///     [(Application::STATUS, "all")],
/// );
/// let visible = engine.apply(&applications, Application::accessor);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use pagewise::{Listable, Value, Number};
///
/// struct Agent {
///     name: String,
///     students: u32,
/// }
///
/// impl Listable for Agent {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "students" => Value::Number(Number::from(self.students)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Listable {
    /// Returns the value of a field, or [`Value::None`] if the record has no
    /// such field.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns an accessor function suitable for [`ListQueryEngine::apply`].
    ///
    /// [`ListQueryEngine::apply`]: crate::ListQueryEngine::apply
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

/// Label used when an enum-like field is filtered or searched.
///
/// Fields marked `#[list(label)]` in the derive must implement this. The
/// label is what a filter value is compared against, so keep it stable.
///
/// ```
/// use pagewise::FilterLabel;
///
/// enum Status {
///     Pending,
///     Approved,
///     Rejected,
/// }
///
/// impl FilterLabel for Status {
///     fn filter_label(&self) -> &'static str {
///         match self {
///             Status::Pending => "pending",
///             Status::Approved => "approved",
///             Status::Rejected => "rejected",
///         }
///     }
/// }
/// ```
pub trait FilterLabel {
    /// Returns the label for this variant.
    fn filter_label(&self) -> &'static str;
}

impl FilterLabel for bool {
    fn filter_label(&self) -> &'static str {
        if *self {
            "true"
        } else {
            "false"
        }
    }
}
