//! See [`Visit`](macro@Visit).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod manifest;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Field Traversal Derivation
///
/// `#[derive(Visit)]` automatically implements the following traits:
///
/// - `Typed` — the field sequence (`STRUCT_INFO`), an associated constant
///   listing every field in declaration order with its type, size,
///   alignment, and `offset_of!`-derived byte offset
/// - `Visit` — member-wise traversal (`visit_fields` / `visit_fields_mut`),
///   one visitor call per field in declaration order
/// - `Fields` — type-erased positional access (`field_at`, `field_len`, …)
///
/// ## Supported shapes
///
/// Named-field structs, tuple structs, and unit/empty structs:
///
/// ```rust, ignore
/// #[derive(Visit)]
/// struct Named { a: i32, b: String }
///
/// #[derive(Visit)]
/// struct Tuple(i32, String); // fields have index metadata, no name
///
/// #[derive(Visit)]
/// struct Empty; // traverses with zero visitor calls
/// ```
///
/// Enums and unions are rejected: neither has a member-wise traversal in
/// declaration order (an enum value holds one variant, union members share
/// storage).
///
/// ## Generics
///
/// Generic structs are supported. The generated impls bound every type
/// parameter by `core::any::Any`, so each field is `'static` and visitors
/// can dispatch on field types with `downcast_ref`. Structs with lifetime
/// parameters cannot satisfy that bound and fail to compile.
///
/// ## Layout verification
///
/// For a `#[repr(C)]` struct, evaluating `STRUCT_INFO` replays the C
/// placement rule (round the cursor up to the field's alignment, advance by
/// its size) and asserts that every reconstructed offset matches
/// `core::mem::offset_of!` and that the reconstructed size matches
/// `size_of`. A disagreement is a compile error.
///
/// `#[repr(packed)]` is rejected outright: traversal hands out references
/// to fields, which packed structs do not support.
#[proc_macro_derive(Visit)]
pub fn derive_visit(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let data = match derive_data::VisitStruct::parse(&ast) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    impls::impl_visit(&data).into()
}
