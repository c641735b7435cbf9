//! Shared assertions for workspace test suites.
//!
//! This module is public to allow use across workspace test suites, but is
//! not intended for production use.

use crate::{Location, Real};

/// Assert that `value` is within `tol` of `target`, with a labelled panic.
pub fn assert_near(name: &str, value: Real, target: Real, tol: Real) {
    assert!(
        (value - target).abs() <= tol,
        "{name}: {value} not within {tol} of {target}"
    );
}

/// Assert two locations agree component-wise: x, y, z within `tol`, rotation
/// within `rot_tol`, and identical unit tags.
pub fn assert_location_near(actual: &Location, expected: &Location, tol: Real, rot_tol: Real) {
    assert_eq!(actual.units, expected.units, "unit tags differ");
    assert_near("x", actual.x, expected.x, tol);
    assert_near("y", actual.y, expected.y, tol);
    assert_near("z", actual.z, expected.z, tol);
    assert_near("rotation", actual.rotation, expected.rotation, rot_tol);
}
