//! Component metadata extraction.
//!
//! A component definition is recognized as the first function in the file
//! carrying a `#[component]` attribute. Its doc comment becomes the
//! description; props come from a sibling `<Fn>Props` struct when one
//! exists, otherwise from the function's own typed parameters.
//!
//! # Examples
//!
//! ```
//! use compdoc_extract::extract;
//!
//! let source = r#"
//!     /// A friendly greeting.
//!     #[component]
//!     pub fn HelloWorld(msg: Option<String>) -> Element {
//!         rsx! { div { "Hello {msg:?}" } }
//!     }
//! "#;
//!
//! let doc = extract("HelloWorld", source).unwrap();
//! assert_eq!(doc.description, "A friendly greeting.");
//! assert!(!doc.props["msg"].required);
//! ```

use crate::props;
use compdoc_core::{Error, PropInfo, Result};
use std::collections::BTreeMap;
use syn::{Attribute, File, Item, ItemFn, ItemStruct};

/// Documentation metadata extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDoc {
    /// Doc comment of the component definition, trimmed.
    pub description: String,
    /// Documented props, keyed by prop name.
    pub props: BTreeMap<String, PropInfo>,
}

/// Extracts documentation metadata from component source text.
///
/// `name` only labels errors; the component itself is located by its
/// `#[component]` attribute, not by file naming.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is not valid Rust or contains no
/// `#[component]` function.
pub fn extract(name: &str, source: &str) -> Result<ComponentDoc> {
    let file: File = syn::parse_file(source).map_err(|e| Error::Parse {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    let func = find_component_fn(&file).ok_or_else(|| Error::Parse {
        name: name.to_string(),
        message: "no `#[component]` function found".to_string(),
    })?;

    let props = match find_props_struct(&file, &func.sig.ident.to_string()) {
        Some(item) => props::from_struct(item),
        None => props::from_signature(&func.sig),
    };

    Ok(ComponentDoc {
        description: doc_text(&func.attrs),
        props,
    })
}

fn find_component_fn(file: &File) -> Option<&ItemFn> {
    file.items.iter().find_map(|item| match item {
        Item::Fn(func) if has_component_attr(&func.attrs) => Some(func),
        _ => None,
    })
}

fn has_component_attr(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("component"))
}

/// Looks up the props struct by naming convention: `Button` -> `ButtonProps`.
fn find_props_struct<'a>(file: &'a File, fn_name: &str) -> Option<&'a ItemStruct> {
    let wanted = format!("{fn_name}Props");
    file.items.iter().find_map(|item| match item {
        Item::Struct(s) if s.ident == wanted => Some(s),
        _ => None,
    })
}

/// Joins the `///` lines of an item into one trimmed description.
pub(crate) fn doc_text(attrs: &[Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(nv) = &attr.meta {
            if let syn::Expr::Lit(expr) = &nv.value {
                if let syn::Lit::Str(text) = &expr.lit {
                    lines.push(text.value().trim().to_string());
                }
            }
        }
    }
    lines.join("\n").trim().to_string()
}
