//! Core value types and geometry primitives for `boardpose`.
//!
//! This crate contains:
//! - the unit-tagged [`Location`] value type and its arithmetic,
//! - the [`Side`] and [`LengthUnit`] tags,
//! - deterministic synthetic placement grids for tests.
//!
//! All operations are pure: they allocate and return new values, perform no
//! I/O, and hold no shared mutable state, so they may be called concurrently
//! without coordination.

/// Unit-tagged location value type and arithmetic.
pub mod location;
/// Linear algebra type aliases and helpers.
pub mod math;
/// Board side tag.
pub mod side;
/// Synthetic placement helpers for test suites.
pub mod synthetic;
/// Shared assertions for workspace test suites.
pub mod test_utils;
/// Length unit tags.
pub mod units;

pub use location::*;
pub use math::*;
pub use side::*;
pub use units::*;
