// -----------------------------------------------------------------------------
// Modules

mod trait_fields;
mod trait_typed;
mod trait_visit;

// -----------------------------------------------------------------------------
// Internal API

use trait_fields::impl_trait_fields;
use trait_typed::impl_trait_typed;
use trait_visit::impl_trait_visit;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::VisitStruct;

/// Generates every trait implementation for one derive invocation.
pub(crate) fn impl_visit(data: &VisitStruct) -> TokenStream {
    let fieldwalk_path = crate::path::fieldwalk();

    let typed_tokens = impl_trait_typed(data, &fieldwalk_path);
    let visit_tokens = impl_trait_visit(data, &fieldwalk_path);
    let fields_tokens = impl_trait_fields(data, &fieldwalk_path);

    quote! {
        #typed_tokens

        #visit_tokens

        #fields_tokens
    }
}
