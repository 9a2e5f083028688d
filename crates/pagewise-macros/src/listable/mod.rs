//! Implementation of the `#[derive(Listable)]` macro.
//!
//! Generates the record accessor and field-name constants from
//! `#[list(...)]` field annotations.

mod attrs;
mod derive;

pub use derive::listable_derive_impl;
