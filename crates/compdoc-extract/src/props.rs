//! Prop harvesting from props structs and function signatures.
//!
//! A prop is required unless its type is `Option<_>` or it carries a
//! `#[props(default ...)]` attribute. For `Option<T>` the reported type is
//! the inner `T`, mirroring how prop tables are rendered downstream.

use crate::extractor::doc_text;
use compdoc_core::PropInfo;
use proc_macro2::TokenStream;
use quote::ToTokens;
use std::collections::BTreeMap;
use syn::{Attribute, Fields, FnArg, GenericArgument, ItemStruct, Pat, PathArguments, Signature, Type};

/// Harvests props from the named fields of a `<Fn>Props` struct.
pub(crate) fn from_struct(item: &ItemStruct) -> BTreeMap<String, PropInfo> {
    let mut props = BTreeMap::new();
    let Fields::Named(fields) = &item.fields else {
        return props;
    };
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        let (ty, optional) = unwrap_option(&field.ty);
        let defaulted = field.attrs.iter().any(has_props_default);
        props.insert(
            ident.to_string(),
            PropInfo {
                type_name: render_type(ty),
                required: !optional && !defaulted,
                description: doc_text(&field.attrs),
            },
        );
    }
    props
}

/// Harvests props from a component function's typed parameters.
///
/// Function parameters cannot carry doc comments, so descriptions are empty
/// on this path.
pub(crate) fn from_signature(sig: &Signature) -> BTreeMap<String, PropInfo> {
    let mut props = BTreeMap::new();
    for input in &sig.inputs {
        let FnArg::Typed(arg) = input else { continue };
        let Pat::Ident(pat) = arg.pat.as_ref() else {
            continue;
        };
        let (ty, optional) = unwrap_option(&arg.ty);
        props.insert(
            pat.ident.to_string(),
            PropInfo {
                type_name: render_type(ty),
                required: !optional,
                description: String::new(),
            },
        );
    }
    props
}

/// Returns the inner type and `true` for `Option<T>`, the type itself and
/// `false` otherwise.
fn unwrap_option(ty: &Type) -> (&Type, bool) {
    if let Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            if segment.ident == "Option" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner)) = args.args.first() {
                        return (inner, true);
                    }
                }
            }
        }
    }
    (ty, false)
}

/// Matches `#[props(default)]` and `#[props(default = ...)]`.
fn has_props_default(attr: &Attribute) -> bool {
    if !attr.path().is_ident("props") {
        return false;
    }
    match &attr.meta {
        syn::Meta::List(list) => list.tokens.to_string().contains("default"),
        _ => false,
    }
}

/// Renders a type as source text, undoing token-stream spacing.
fn render_type(ty: &Type) -> String {
    let tokens: TokenStream = ty.to_token_stream();
    tokens
        .to_string()
        .replace(" < ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_struct(source: &str) -> ItemStruct {
        syn::parse_str(source).unwrap()
    }

    #[test]
    fn test_option_field_is_optional_with_inner_type() {
        let item = parse_struct("struct CardProps { title: Option<String> }");
        let props = from_struct(&item);
        assert_eq!(props["title"].type_name, "String");
        assert!(!props["title"].required);
    }

    #[test]
    fn test_plain_field_is_required() {
        let item = parse_struct("struct CardProps { title: String }");
        let props = from_struct(&item);
        assert!(props["title"].required);
    }

    #[test]
    fn test_props_default_attribute_makes_optional() {
        let item = parse_struct(
            "struct CardProps { #[props(default = \"md\")] size: String }",
        );
        let props = from_struct(&item);
        assert!(!props["size"].required);
        assert_eq!(props["size"].type_name, "String");
    }

    #[test]
    fn test_generic_type_rendering() {
        let item = parse_struct("struct ListProps { items: Vec<String> }");
        let props = from_struct(&item);
        assert_eq!(props["items"].type_name, "Vec<String>");
    }

    #[test]
    fn test_nested_generic_type_rendering() {
        let item = parse_struct("struct ListProps { rows: Vec<Vec<u32>> }");
        let props = from_struct(&item);
        assert_eq!(props["rows"].type_name, "Vec<Vec<u32>>");
    }

    #[test]
    fn test_tuple_struct_yields_no_props() {
        let item = parse_struct("struct OddProps(String);");
        assert!(from_struct(&item).is_empty());
    }

    #[test]
    fn test_signature_props_skip_receiver() {
        let func: syn::ItemFn =
            syn::parse_str("fn widget(label: String, count: Option<u8>) {}").unwrap();
        let props = from_signature(&func.sig);
        assert_eq!(props.len(), 2);
        assert!(props["label"].required);
        assert_eq!(props["count"].type_name, "u8");
    }
}
