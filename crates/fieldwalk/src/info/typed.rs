use core::any::Any;

use crate::info::StructInfo;

/// A struct with a compile-time field sequence.
///
/// Implemented by [`#[derive(Visit)]`](crate::derive::Visit). The
/// [`STRUCT_INFO`](Typed::STRUCT_INFO) constant is evaluated once per
/// (monomorphized) type during compilation, so generic structs get one
/// sequence per instantiation with no runtime initialization.
///
/// # Examples
///
/// ```
/// use fieldwalk::{derive::Visit, info::Typed};
///
/// #[derive(Visit)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let info = Foo::struct_info();
///
/// assert_eq!(info.field_len(), 2);
/// assert!(info.field_at(0).unwrap().type_is::<i32>());
/// assert!(info.field_at(1).unwrap().type_is::<bool>());
/// ```
pub trait Typed: Any {
    /// The field sequence and type facts, computed at compile time.
    const STRUCT_INFO: StructInfo;

    /// Returns [`STRUCT_INFO`](Typed::STRUCT_INFO) by reference.
    #[inline]
    fn struct_info() -> &'static StructInfo {
        &Self::STRUCT_INFO
    }
}
