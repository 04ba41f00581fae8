//! Helper functions for code generation.

use heck::ToPascalCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Path expression for a type variant, e.g. `crate::types::Type::Fire`.
///
/// Panics if `name` is not one of the chart's types.
pub fn type_path(name: &str, type_names: &[String]) -> TokenStream {
    let known = type_names
        .iter()
        .any(|t| t.eq_ignore_ascii_case(name));
    if !known {
        panic!("unknown type `{}`", name);
    }
    let ident = format_ident!("{}", name.to_pascal_case());
    quote! { crate::types::Type::#ident }
}

/// Build a `TypeProfile` constructor expression from a list of type names.
///
/// Panics on an empty list or more than two types.
pub fn profile_expr(owner: &str, types: &[String], type_names: &[String]) -> TokenStream {
    match types {
        [single] => {
            let t = type_path(single, type_names);
            quote! { crate::profile::TypeProfile::single(#t) }
        }
        [first, second] => {
            let a = type_path(first, type_names);
            let b = type_path(second, type_names);
            quote! { crate::profile::TypeProfile::dual(#a, #b) }
        }
        _ => panic!("`{}` must have one or two types, got {}", owner, types.len()),
    }
}

/// Optional static string as a `Cow` expression.
pub fn opt_cow(value: &Option<String>) -> TokenStream {
    match value {
        Some(s) => quote! { Some(::std::borrow::Cow::Borrowed(#s)) },
        None => quote! { None },
    }
}
