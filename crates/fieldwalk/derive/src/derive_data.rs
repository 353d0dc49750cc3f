//! Parse layer: classify the input item and collect per-field data.

use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Generics, Ident, Member, Meta, Token, Type};

/// A struct accepted by the derive, ready for code generation.
pub(crate) struct VisitStruct<'a> {
    pub ident: &'a Ident,
    generics: &'a Generics,
    pub repr: Repr,
    pub fields: Vec<VisitField<'a>>,
}

/// One field of the input struct, in declaration order.
pub(crate) struct VisitField<'a> {
    /// Accessor member: `self.name` for named fields, `self.0` for tuple
    /// fields.
    pub member: Member,
    /// Declared identifier; `None` for tuple fields.
    pub ident: Option<&'a Ident>,
    pub ty: &'a Type,
}

/// Representation classes the derive distinguishes.
///
/// Mirrors `fieldwalk::layout::Repr`: only `#[repr(C)]` opts into the
/// layout cross-check; everything else (except the rejected `packed`)
/// traverses as `Rust`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Repr {
    Rust,
    C,
}

impl<'a> VisitStruct<'a> {
    /// Classifies the derive input, rejecting unsupported items with
    /// targeted errors.
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Visit` is only derivable for structs: an enum value holds a single \
                     variant, so it has no member-wise traversal in declaration order",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Visit` is only derivable for structs: union members share storage",
                ));
            }
        };

        let repr = parse_repr(&ast.attrs)?;

        let fields = match &data.fields {
            syn::Fields::Named(fields) => fields
                .named
                .iter()
                .map(|field| {
                    let ident = field
                        .ident
                        .as_ref()
                        .expect("named struct fields have identifiers");
                    VisitField {
                        member: Member::Named(ident.clone()),
                        ident: Some(ident),
                        ty: &field.ty,
                    }
                })
                .collect(),
            syn::Fields::Unnamed(fields) => fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(index, field)| VisitField {
                    member: Member::from(index),
                    ident: None,
                    ty: &field.ty,
                })
                .collect(),
            syn::Fields::Unit => Vec::new(),
        };

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            repr,
            fields,
        })
    }

    /// Generics for the generated impls, with every type parameter bounded
    /// by `Any` so that all fields are `'static`.
    pub fn generics_with_any_bounds(&self) -> Generics {
        let mut generics = self.generics.clone();

        let params: Vec<Ident> = generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();

        if !params.is_empty() {
            let where_clause = generics.make_where_clause();
            for ident in params {
                where_clause
                    .predicates
                    .push(syn::parse_quote!(#ident: ::core::any::Any));
            }
        }

        generics
    }
}

/// Scans the `#[repr(...)]` attributes.
///
/// `packed` (in any form, including `packed(N)` and `C, packed`) is
/// rejected: traversal hands out references to fields, which packed
/// structs do not support.
fn parse_repr(attrs: &[syn::Attribute]) -> syn::Result<Repr> {
    let mut repr = Repr::Rust;

    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }

        let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in nested {
            let path = meta.path();
            if path.is_ident("C") {
                repr = Repr::C;
            } else if path.is_ident("packed") {
                return Err(syn::Error::new_spanned(
                    meta,
                    "`Visit` cannot be derived for packed structs: \
                     field references require natural alignment",
                ));
            }
            // `align(N)`, `transparent` and primitive reprs traverse fine;
            // they only skip the `#[repr(C)]` offset cross-check.
        }
    }

    Ok(repr)
}
