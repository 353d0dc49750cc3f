use core::any::{Any, TypeId};

use crate::info::FieldInfo;
use crate::layout::{LayoutCursor, Repr};

// -----------------------------------------------------------------------------
// StructInfo

/// A struct's ordered field sequence plus its own type facts.
///
/// Built once per type by [`#[derive(Visit)]`](crate::derive::Visit) as the
/// [`Typed::STRUCT_INFO`](crate::info::Typed::STRUCT_INFO) constant. The
/// sequence lists every field in declaration order and never changes.
///
/// # Examples
///
/// ```
/// use fieldwalk::{derive::Visit, info::Typed};
///
/// #[derive(Visit)]
/// struct A {
///     val: f32,
/// }
///
/// let info = A::struct_info();
///
/// assert!(info.type_is::<A>());
/// assert_eq!(info.field_len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty_id: TypeId,
    // `type_name` is not a const fn; a function pointer delays the call.
    type_name: fn() -> &'static str,
    repr: Repr,
    size: usize,
    align: usize,
    fields: &'static [FieldInfo],
}

impl StructInfo {
    /// Creates a new [`StructInfo`] for the struct type `T`.
    ///
    /// `fields` must list every field of `T` in declaration order. For
    /// [`Repr::C`], the layout is reconstructed from the fields' sizes and
    /// alignments and compared against their recorded offsets; a mismatch
    /// panics, which fails compilation when the constructor runs in const
    /// context (as it does for derived types).
    pub const fn new<T: Any>(repr: Repr, fields: &'static [FieldInfo]) -> Self {
        if repr.is_c() {
            verify_c_layout(fields, size_of::<T>(), align_of::<T>());
        }

        Self {
            ty_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>,
            repr,
            size: size_of::<T>(),
            align: align_of::<T>(),
            fields,
        }
    }

    /// Returns the `TypeId` of the described struct.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type is the described struct.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full name of the described struct.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns the representation class of the described struct.
    #[inline]
    pub const fn repr(&self) -> Repr {
        self.repr
    }

    /// Returns the size of the described struct in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the alignment of the described struct in bytes.
    #[inline]
    pub const fn align(&self) -> usize {
        self.align
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Returns the [`FieldInfo`] at the given declaration index, if present.
    #[inline]
    pub const fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        if index < self.fields.len() {
            Some(&self.fields[index])
        } else {
            None
        }
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// Replays the `#[repr(C)]` placement walk over the recorded fields and
// insists the compiler agrees with every offset and with the total size.
const fn verify_c_layout(fields: &[FieldInfo], size: usize, align: usize) {
    let mut cursor = LayoutCursor::new();

    let mut i = 0;
    while i < fields.len() {
        let field = &fields[i];
        let offset = cursor.claim(field.size(), field.align());
        assert!(
            offset == field.offset(),
            "reconstructed field offset disagrees with `offset_of!`; \
             a `#[repr(C)]` struct must keep its fields' natural alignment"
        );
        i += 1;
    }

    assert!(
        cursor.finish(align) == size,
        "reconstructed struct size disagrees with `size_of`"
    );
}

#[cfg(test)]
mod tests {
    use core::mem::offset_of;

    use super::StructInfo;
    use crate::info::FieldInfo;
    use crate::layout::Repr;

    #[allow(dead_code)]
    #[repr(C)]
    struct Sample {
        a: u8,
        b: u64,
    }

    const SAMPLE_INFO: StructInfo = StructInfo::new::<Sample>(
        Repr::C,
        &[
            FieldInfo::new::<u8>(0, Some("a"), offset_of!(Sample, a)),
            FieldInfo::new::<u64>(1, Some("b"), offset_of!(Sample, b)),
        ],
    );

    #[test]
    fn reconstruction_accepts_the_compiler_layout() {
        assert!(SAMPLE_INFO.repr().is_c());
        assert_eq!(SAMPLE_INFO.field_len(), 2);
        assert_eq!(SAMPLE_INFO.field_at(1).unwrap().offset(), 8);
        assert_eq!(SAMPLE_INFO.size(), 16);
        assert_eq!(SAMPLE_INFO.align(), 8);
    }

    #[test]
    fn field_at_is_positional() {
        assert_eq!(SAMPLE_INFO.field_at(0).unwrap().name(), Some("a"));
        assert!(SAMPLE_INFO.field_at(2).is_none());
    }
}
