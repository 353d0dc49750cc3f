use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::VisitStruct;

/// Generate implementation code for `Visit`.
///
/// The bodies are a fixed call sequence, one visitor call per field in
/// declaration order. Each call also hands over the field's entry from
/// `STRUCT_INFO`; indexing with a literal into the constant's field slice
/// keeps the reference `'static`.
pub(crate) fn impl_trait_visit(data: &VisitStruct, fieldwalk_path: &syn::Path) -> TokenStream {
    let visit_ = crate::path::visit_(fieldwalk_path);
    let visitor_ = crate::path::visitor_(fieldwalk_path);
    let visitor_mut_ = crate::path::visitor_mut_(fieldwalk_path);
    let typed_ = crate::path::typed_(fieldwalk_path);

    let members: Vec<_> = data.fields.iter().map(|field| &field.member).collect();
    let indices: Vec<_> = (0..data.fields.len())
        .map(Literal::usize_suffixed)
        .collect();

    let ident = data.ident;
    let generics = data.generics_with_any_bounds();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #visit_ for #ident #ty_generics #where_clause {
            fn visit_fields<__V: #visitor_>(&self, __visitor: &mut __V) {
                #(
                    __visitor.visit(
                        &self.#members,
                        &<Self as #typed_>::STRUCT_INFO.fields()[#indices],
                    );
                )*
            }

            fn visit_fields_mut<__V: #visitor_mut_>(&mut self, __visitor: &mut __V) {
                #(
                    __visitor.visit(
                        &mut self.#members,
                        &<Self as #typed_>::STRUCT_INFO.fields()[#indices],
                    );
                )*
            }
        }
    }
}
