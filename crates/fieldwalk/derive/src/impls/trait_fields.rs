use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::VisitStruct;

/// Generate implementation code for `Fields`.
///
/// Positional accessors compile to a `match` over the index, so erased
/// lookup needs no stored table.
pub(crate) fn impl_trait_fields(data: &VisitStruct, fieldwalk_path: &syn::Path) -> TokenStream {
    let fields_ = crate::path::fields_(fieldwalk_path);
    let field_iter_ = crate::path::field_iter_(fieldwalk_path);

    let members: Vec<_> = data.fields.iter().map(|field| &field.member).collect();
    let indices: Vec<_> = (0..data.fields.len())
        .map(Literal::usize_suffixed)
        .collect();
    let field_count = Literal::usize_suffixed(data.fields.len());

    // An empty struct has nothing to match on.
    let (field_at_tokens, field_at_mut_tokens) = if data.fields.is_empty() {
        (
            quote! {
                fn field_at(
                    &self,
                    _index: usize,
                ) -> ::core::option::Option<&dyn ::core::any::Any> {
                    ::core::option::Option::None
                }
            },
            quote! {
                fn field_at_mut(
                    &mut self,
                    _index: usize,
                ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
                    ::core::option::Option::None
                }
            },
        )
    } else {
        (
            quote! {
                fn field_at(
                    &self,
                    index: usize,
                ) -> ::core::option::Option<&dyn ::core::any::Any> {
                    match index {
                        #( #indices => ::core::option::Option::Some(&self.#members), )*
                        _ => ::core::option::Option::None,
                    }
                }
            },
            quote! {
                fn field_at_mut(
                    &mut self,
                    index: usize,
                ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
                    match index {
                        #( #indices => ::core::option::Option::Some(&mut self.#members), )*
                        _ => ::core::option::Option::None,
                    }
                }
            },
        )
    };

    let ident = data.ident;
    let generics = data.generics_with_any_bounds();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #fields_ for #ident #ty_generics #where_clause {
            #field_at_tokens

            #field_at_mut_tokens

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn fields(&self) -> #field_iter_<'_> {
                #field_iter_::new(self)
            }
        }
    }
}
