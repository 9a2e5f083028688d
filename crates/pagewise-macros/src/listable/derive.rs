//! Implementation of the `#[derive(Listable)]` macro.
//!
//! Generates an implementation of the `Listable` trait and field name
//! constants for typo-free engine configuration.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_list_attrs, FieldKind};

/// Main implementation of the Listable derive macro.
pub fn listable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Listable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Listable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let list_attrs = parse_list_attrs(&field.attrs)?;
        if list_attrs.skip {
            continue;
        }
        // Fields without a kind are not exposed
        let kind = match list_attrs.kind {
            Some(k) => k,
            None => continue,
        };

        let query_name = list_attrs.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        field_constants.push(quote! {
            /// Field name constant for engine configuration.
            pub const #const_name: &'static str = #query_name;
        });

        let value_expr = match kind {
            FieldKind::Text => {
                quote! { ::pagewise::Value::String(::core::convert::AsRef::<str>::as_ref(&self.#field_name)) }
            }
            FieldKind::Optional => {
                quote! { ::pagewise::Value::from(self.#field_name.as_deref()) }
            }
            FieldKind::Number => {
                quote! { ::pagewise::Value::Number(::pagewise::Number::from(self.#field_name)) }
            }
            FieldKind::Bool => {
                quote! { ::pagewise::Value::Bool(self.#field_name) }
            }
            FieldKind::Label => {
                quote! {
                    ::pagewise::Value::String(
                        ::pagewise::FilterLabel::filter_label(&self.#field_name)
                    )
                }
            }
        };

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::pagewise::Listable for #struct_name #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::pagewise::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::pagewise::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_lowercase();
        }
    }

    result
}
