use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::{Repr, VisitStruct};

/// Generate implementation code for `Typed`.
///
/// `STRUCT_INFO` is an associated constant, so the field sequence is built
/// per monomorphization with no lazy cell, and the `#[repr(C)]` layout
/// verification inside `StructInfo::new` runs during its const evaluation.
pub(crate) fn impl_trait_typed(data: &VisitStruct, fieldwalk_path: &syn::Path) -> TokenStream {
    let typed_ = crate::path::typed_(fieldwalk_path);
    let struct_info_ = crate::path::struct_info_(fieldwalk_path);
    let field_info_ = crate::path::field_info_(fieldwalk_path);
    let repr_ = crate::path::repr_(fieldwalk_path);

    let repr_tokens = match data.repr {
        Repr::Rust => quote!( #repr_::Rust ),
        Repr::C => quote!( #repr_::C ),
    };

    let field_entries = data.fields.iter().enumerate().map(|(index, field)| {
        let ty = field.ty;
        let member = &field.member;
        let index = Literal::usize_suffixed(index);

        let name_tokens = match field.ident {
            Some(ident) => {
                let name = ident.to_string();
                quote!( ::core::option::Option::Some(#name) )
            }
            None => quote!( ::core::option::Option::None ),
        };

        quote! {
            #field_info_::new::<#ty>(
                #index,
                #name_tokens,
                ::core::mem::offset_of!(Self, #member),
            )
        }
    });

    let ident = data.ident;
    let generics = data.generics_with_any_bounds();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            const STRUCT_INFO: #struct_info_ = #struct_info_::new::<Self>(
                #repr_tokens,
                &[ #(#field_entries,)* ],
            );
        }
    }
}
