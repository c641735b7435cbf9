//! Board pose from two fiducial correspondences.
//!
//! Given two design-space points and their measured machine-space
//! counterparts, recover the rigid pose (rotation plus origin offset) of the
//! mounted board. The fit models a rigid rotation and translation with the
//! top side facing the tooling: uniform scale of 1 is assumed, so any scale
//! error in the measurements is absorbed into the rotation and offset rather
//! than reported.

use boardpose_core::{Location, LocationError, Real};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FiducialError {
    #[error("design-space fiducials coincide; the rotation angle is undefined")]
    DegenerateIdeal,
    #[error("measured fiducials coincide; the rotation angle is undefined")]
    DegenerateMeasured,
    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Minimum baseline length between the two fiducials of a pair.
const MIN_BASELINE: Real = 1e-9;

/// Fit the board pose from two fiducial correspondences.
///
/// The rotation is the angle of the measured baseline `actual_b - actual_a`
/// minus the angle of the design baseline `ideal_b - ideal_a`, each taken
/// with a quadrant-aware arctangent, in degrees. The offset then solves
/// `actual_a = rotate(ideal_a, angle) + offset`. The returned location
/// carries the offset in x/y, zero z, and the fitted rotation; it can be fed
/// directly to the placement transforms as a board pose.
///
/// The rotation is a raw angle difference in (−360°, 360°) and is not
/// normalized: a measured baseline whose angle wraps past ±180° relative to
/// the design baseline comes back offset by a full turn, which is the same
/// rigid transform.
///
/// All four inputs must share units. Coincident points on either side of the
/// correspondence are rejected: a zero-length baseline leaves the angle
/// undefined.
pub fn angle_and_offset(
    ideal_a: &Location,
    ideal_b: &Location,
    actual_a: &Location,
    actual_b: &Location,
) -> Result<Location, FiducialError> {
    let ideal = ideal_b.subtract(ideal_a)?;
    let actual = actual_b.subtract(actual_a)?;

    if ideal.xy().norm() < MIN_BASELINE {
        return Err(FiducialError::DegenerateIdeal);
    }
    if actual.xy().norm() < MIN_BASELINE {
        return Err(FiducialError::DegenerateMeasured);
    }

    let angle = (actual.y.atan2(actual.x) - ideal.y.atan2(ideal.x)).to_degrees();

    // Solve actual_a = rotate(ideal_a, angle) + offset for the offset; the
    // subtraction also unit-checks across the two correspondence pairs.
    let offset = actual_a.subtract(&ideal_a.rotate_xy(angle))?;

    Ok(Location::new(offset.units, offset.x, offset.y, 0.0, angle))
}
