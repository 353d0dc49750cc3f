//! Compile-time struct information.
//!
//! Everything here is derived data: [`#[derive(Visit)]`](crate::derive::Visit)
//! builds a [`StructInfo`] (an ordered list of [`FieldInfo`] entries) as the
//! [`Typed::STRUCT_INFO`] associated constant of the annotated struct.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod struct_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use struct_info::StructInfo;
pub use typed::Typed;
