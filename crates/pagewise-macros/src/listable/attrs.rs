//! Attribute parsing for the Listable derive macro.
//!
//! Parses the `#[list(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// How a field is exposed to the list engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `String`/`&str` field: `#[list(text)]`
    Text,
    /// `Option<String>` field: `#[list(optional)]`
    Optional,
    /// Numeric field: `#[list(number)]`
    Number,
    /// Boolean field: `#[list(bool)]`
    Bool,
    /// Enum-like field exposing `FilterLabel`: `#[list(label)]`
    Label,
}

impl FieldKind {
    fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "text" | "string" => Ok(FieldKind::Text),
            "optional" => Ok(FieldKind::Optional),
            "number" => Ok(FieldKind::Number),
            "bool" | "boolean" => Ok(FieldKind::Bool),
            "label" => Ok(FieldKind::Label),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown list field kind: '{}'. Expected one of: text, optional, number, bool, label",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[list(...)]`.
#[derive(Debug, Clone)]
pub struct ListAttr {
    /// How this field is exposed, if at all.
    pub kind: Option<FieldKind>,
    /// Leave this field out.
    pub skip: bool,
    /// Field name used in queries (default: the Rust field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for ListAttr {
    fn default() -> Self {
        ListAttr {
            kind: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for ListAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ListAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        if attr.kind.is_some() {
                            return Err(Error::new(ident.span(), "field kind given twice"));
                        }
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected field kind: text, optional, number, bool, label, or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown list attribute. Expected: text, optional, number, bool, label, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[list(...)]` attributes from a field's attributes.
pub fn parse_list_attrs(attrs: &[Attribute]) -> Result<ListAttr> {
    for attr in attrs {
        if attr.path().is_ident("list") {
            return attr.parse_args::<ListAttr>();
        }
    }
    Ok(ListAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_list(tokens: &str) -> Result<ListAttr> {
        syn::parse_str::<ListAttr>(tokens)
    }

    #[test]
    fn test_list_text() {
        let attr = parse_list("text").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Text));
        assert!(!attr.skip);
    }

    #[test]
    fn test_list_string_alias() {
        let attr = parse_list("string").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Text));
    }

    #[test]
    fn test_list_optional() {
        let attr = parse_list("optional").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Optional));
    }

    #[test]
    fn test_list_number() {
        let attr = parse_list("number").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Number));
    }

    #[test]
    fn test_list_bool() {
        let attr = parse_list("bool").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Bool));
    }

    #[test]
    fn test_list_label() {
        let attr = parse_list("label").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Label));
    }

    #[test]
    fn test_list_skip() {
        let attr = parse_list("skip").unwrap();
        assert!(attr.skip);
        assert_eq!(attr.kind, None);
    }

    #[test]
    fn test_list_rename() {
        let attr = parse_list(r#"label, rename = "stage""#).unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Label));
        assert_eq!(attr.rename, Some("stage".to_string()));
    }

    #[test]
    fn test_list_invalid_kind() {
        let result = parse_list("timestamp");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown list field kind"));
    }

    #[test]
    fn test_list_kind_twice() {
        assert!(parse_list("text, number").is_err());
    }

    #[test]
    fn test_list_unknown_name_value() {
        let result = parse_list(r#"alias = "x""#);
        assert!(result.is_err());
    }
}
