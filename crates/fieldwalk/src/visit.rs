use core::any::Any;

use crate::info::{FieldInfo, Typed};

// -----------------------------------------------------------------------------
// Visit

/// Member-wise traversal of a struct, in declaration order.
///
/// Implemented by [`#[derive(Visit)]`](crate::derive::Visit). The generated
/// methods call the visitor once per field with a plain reference to that
/// field, so traversal compiles down to a fixed sequence of direct calls:
/// no allocation, no indirection, no runtime bookkeeping.
///
/// The borrow of the whole instance decides what the visitor receives:
/// [`visit_fields`] hands out `&F` for every field, [`visit_fields_mut`]
/// hands out `&mut F` for every field. There is no per-field middle ground.
///
/// # Examples
///
/// ```
/// use core::any::Any;
///
/// use fieldwalk::{derive::Visit, info::FieldInfo, Visitor};
///
/// #[derive(Visit)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// struct Sum(i32);
///
/// impl Visitor for Sum {
///     fn visit<F: Any>(&mut self, value: &F, _info: &'static FieldInfo) {
///         if let Some(v) = (value as &dyn Any).downcast_ref::<i32>() {
///             self.0 += v;
///         }
///     }
/// }
///
/// let point = Point { x: 1, y: 2 };
/// let mut sum = Sum(0);
/// fieldwalk::visit_fields(&point, &mut sum);
///
/// assert_eq!(sum.0, 3);
/// ```
///
/// [`visit_fields`]: Visit::visit_fields
/// [`visit_fields_mut`]: Visit::visit_fields_mut
pub trait Visit: Typed {
    /// Invokes `visitor` once per field, in declaration order, with a
    /// shared reference to the field and that field's [`FieldInfo`].
    ///
    /// An empty struct never invokes the visitor.
    fn visit_fields<V: Visitor>(&self, visitor: &mut V);

    /// Like [`visit_fields`](Visit::visit_fields), but with exclusive
    /// references, so the visitor can modify the fields in place.
    fn visit_fields_mut<V: VisitorMut>(&mut self, visitor: &mut V);
}

// -----------------------------------------------------------------------------
// Visitors

/// Receives each field of one shared traversal.
///
/// `visit` is generic over the field's static type, so a single visitor
/// acts as an overload set: implementations branch on the type with
/// [`downcast_ref`](Any::downcast_ref) (or ignore the type entirely and
/// only look at the [`FieldInfo`]).
///
/// # Examples
///
/// A visitor that records every field's declared name:
///
/// ```
/// use core::any::Any;
///
/// use fieldwalk::{derive::Visit, info::FieldInfo, Visitor};
///
/// #[derive(Visit)]
/// struct User {
///     id: u64,
///     admin: bool,
/// }
///
/// #[derive(Default)]
/// struct Names(Vec<&'static str>);
///
/// impl Visitor for Names {
///     fn visit<F: Any>(&mut self, _value: &F, info: &'static FieldInfo) {
///         self.0.push(info.name().unwrap());
///     }
/// }
///
/// let user = User { id: 7, admin: false };
/// let mut names = Names::default();
/// fieldwalk::visit_fields(&user, &mut names);
///
/// assert_eq!(names.0, ["id", "admin"]);
/// ```
pub trait Visitor {
    /// Called once per field, in declaration order.
    fn visit<F: Any>(&mut self, value: &F, info: &'static FieldInfo);
}

/// Receives each field of one exclusive traversal.
///
/// The mutable counterpart of [`Visitor`]: mutations through `value` are
/// mutations of the original instance.
///
/// # Examples
///
/// ```
/// use core::any::Any;
///
/// use fieldwalk::{derive::Visit, info::FieldInfo, VisitorMut};
///
/// #[derive(Visit)]
/// struct Counters {
///     hits: u32,
///     misses: u32,
/// }
///
/// struct Reset;
///
/// impl VisitorMut for Reset {
///     fn visit<F: Any>(&mut self, value: &mut F, _info: &'static FieldInfo) {
///         if let Some(v) = (value as &mut dyn Any).downcast_mut::<u32>() {
///             *v = 0;
///         }
///     }
/// }
///
/// let mut counters = Counters { hits: 10, misses: 3 };
/// fieldwalk::visit_fields_mut(&mut counters, &mut Reset);
///
/// assert_eq!(counters.hits, 0);
/// assert_eq!(counters.misses, 0);
/// ```
pub trait VisitorMut {
    /// Called once per field, in declaration order.
    fn visit<F: Any>(&mut self, value: &mut F, info: &'static FieldInfo);
}

// -----------------------------------------------------------------------------
// Entry points

/// Invokes `visitor` once per field of `value`, in declaration order, with
/// shared references.
///
/// Forwards to [`Visit::visit_fields`]; see [`Visit`] for the full
/// contract.
#[inline]
pub fn visit_fields<T: Visit, V: Visitor>(value: &T, visitor: &mut V) {
    value.visit_fields(visitor);
}

/// Invokes `visitor` once per field of `value`, in declaration order, with
/// exclusive references.
///
/// Forwards to [`Visit::visit_fields_mut`]; see [`Visit`] for the full
/// contract.
#[inline]
pub fn visit_fields_mut<T: Visit, V: VisitorMut>(value: &mut T, visitor: &mut V) {
    value.visit_fields_mut(visitor);
}
