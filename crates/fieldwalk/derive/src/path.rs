//! Paths into the `fieldwalk` crate for generated code.
//!
//! Kept in one module so that renames inside `fieldwalk` only touch this
//! file. The only special case is the path of `fieldwalk` itself, see
//! [`fieldwalk`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `fieldwalk` crate.
///
/// The invoking crate may depend on `fieldwalk` under another name, so the
/// builder's `Cargo.toml` is scanned (see [`Manifest`]). The cost is
/// relatively high (file access, lock, query), so the resolved path is
/// passed down to the generator functions rather than reacquired.
///
/// [`Manifest`]: crate::manifest::Manifest
pub(crate) fn fieldwalk() -> syn::Path {
    crate::manifest::Manifest::shared(|manifest| manifest.crate_path("fieldwalk"))
}

// -----------------------------------------------------------------------------
// Item paths

#[inline(always)]
pub(crate) fn typed_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn struct_info_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn repr_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::layout::Repr
    }
}

#[inline(always)]
pub(crate) fn visit_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::Visit
    }
}

#[inline(always)]
pub(crate) fn visitor_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::Visitor
    }
}

#[inline(always)]
pub(crate) fn visitor_mut_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::VisitorMut
    }
}

#[inline(always)]
pub(crate) fn fields_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::fields::Fields
    }
}

#[inline(always)]
pub(crate) fn field_iter_(fieldwalk_path: &syn::Path) -> TokenStream {
    quote! {
        #fieldwalk_path::fields::FieldIter
    }
}
