use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a single field of a struct.
///
/// Entries are created by [`#[derive(Visit)]`](crate::derive::Visit), one
/// per field in declaration order, and collected into a
/// [`StructInfo`](crate::info::StructInfo).
///
/// # Examples
///
/// ```
/// use fieldwalk::{derive::Visit, info::Typed};
///
/// #[derive(Visit)]
/// struct Foo {
///     field_a: f32,
/// }
///
/// let info = Foo::struct_info().field_at(0).unwrap();
///
/// assert!(info.type_is::<f32>());
/// assert_eq!(info.name(), Some("field_a"));
/// assert_eq!(info.index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    ty_id: TypeId,
    index: usize,
    // `None` for tuple-struct fields.
    name: Option<&'static str>,
    // `type_name` is not a const fn; a function pointer delays the call.
    type_name: fn() -> &'static str,
    size: usize,
    align: usize,
    offset: usize,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for a field of type `T` at declaration
    /// position `index`.
    ///
    /// `offset` must be the value of `core::mem::offset_of!` for the field
    /// in its containing struct; for `#[repr(C)]` structs,
    /// [`StructInfo::new`](crate::info::StructInfo::new) cross-checks it
    /// against the reconstructed layout.
    #[inline]
    pub const fn new<T: Any>(index: usize, name: Option<&'static str>, offset: usize) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            index,
            name,
            type_name: core::any::type_name::<T>,
            size: size_of::<T>(),
            align: align_of::<T>(),
            offset,
        }
    }

    /// Returns the `TypeId` of the field's type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the field's type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field's position in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the field's identifier, or `None` for a tuple-struct field.
    #[inline]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Returns the full name of the field's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns the size of the field's type in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the alignment of the field's type in bytes.
    #[inline]
    pub const fn align(&self) -> usize {
        self.align
    }

    /// Returns the field's byte offset inside its struct.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use core::mem::offset_of;

    use super::FieldInfo;

    #[allow(dead_code)]
    struct Holder {
        value: u32,
    }

    const VALUE_INFO: FieldInfo =
        FieldInfo::new::<u32>(0, Some("value"), offset_of!(Holder, value));

    #[test]
    fn records_the_field_type() {
        assert!(VALUE_INFO.type_is::<u32>());
        assert!(!VALUE_INFO.type_is::<i32>());
        assert_eq!(VALUE_INFO.size(), 4);
        assert_eq!(VALUE_INFO.align(), 4);
        assert!(VALUE_INFO.type_name().ends_with("u32"));
    }
}
