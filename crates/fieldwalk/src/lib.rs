#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to this crate as `::fieldwalk`. Inside the crate
// itself (unit tests, doc tests) that name only exists through this alias.
extern crate self as fieldwalk;

// The unit tests allocate; the test harness links `std` and provides the
// global allocator.
#[cfg(test)]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod visit;

pub mod fields;
pub mod info;
pub mod layout;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use visit::{Visit, Visitor, VisitorMut, visit_fields, visit_fields_mut};

pub use fieldwalk_derive as derive;
