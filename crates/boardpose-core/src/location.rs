//! Unit-tagged machine locations.
//!
//! [`Location`] is the value type every transform in this workspace consumes
//! and produces: a 3D point plus a rotation angle, tagged with a length unit.
//! Operations return new values; nothing is mutated in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{rot2_deg, Real, Vec2};
use crate::LengthUnit;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("length unit mismatch: {left} vs {right}")]
    UnitMismatch { left: LengthUnit, right: LengthUnit },
}

/// A point in 3D space plus a rotation about Z, tagged with a length unit.
///
/// The rotation is in degrees, counter-clockwise positive, and is never
/// normalized into a canonical range: rotations compose additively and may
/// accumulate arbitrarily far past ±360°. Callers comparing angles must
/// account for the unbounded representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub units: LengthUnit,
    pub x: Real,
    pub y: Real,
    pub z: Real,
    /// Rotation about Z in degrees, unbounded.
    pub rotation: Real,
}

impl Location {
    /// Build a location from explicit components.
    pub fn new(units: LengthUnit, x: Real, y: Real, z: Real, rotation: Real) -> Self {
        Self {
            units,
            x,
            y,
            z,
            rotation,
        }
    }

    /// Origin with zero rotation in the given unit.
    pub fn origin(units: LengthUnit) -> Self {
        Self::new(units, 0.0, 0.0, 0.0, 0.0)
    }

    /// The (x, y) pair as a 2D vector.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Copy of this location with the rotation replaced.
    pub fn with_rotation(&self, rotation: Real) -> Self {
        Self { rotation, ..*self }
    }

    fn check_units(&self, other: &Location) -> Result<(), LocationError> {
        if self.units != other.units {
            return Err(LocationError::UnitMismatch {
                left: self.units,
                right: other.units,
            });
        }
        Ok(())
    }

    /// Component-wise sum of x, y, z and rotation.
    ///
    /// Fails if the unit tags differ; no implicit conversion is attempted.
    pub fn add(&self, other: &Location) -> Result<Location, LocationError> {
        self.check_units(other)?;
        Ok(Location::new(
            self.units,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.rotation + other.rotation,
        ))
    }

    /// Component-wise difference of x, y, z and rotation.
    ///
    /// Fails if the unit tags differ; no implicit conversion is attempted.
    pub fn subtract(&self, other: &Location) -> Result<Location, LocationError> {
        self.check_units(other)?;
        Ok(Location::new(
            self.units,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.rotation - other.rotation,
        ))
    }

    /// Component-wise scale of x, y, z and rotation.
    ///
    /// Mirroring along X is `multiply(-1.0, 1.0, 1.0, 1.0)`.
    pub fn multiply(&self, sx: Real, sy: Real, sz: Real, sr: Real) -> Location {
        Location::new(
            self.units,
            self.x * sx,
            self.y * sy,
            self.z * sz,
            self.rotation * sr,
        )
    }

    /// Rotate the (x, y) pair about the origin by `angle_deg` degrees,
    /// counter-clockwise positive.
    ///
    /// Z is unchanged and `angle_deg` is added to the rotation field, so
    /// repeated rotations compose additively.
    pub fn rotate_xy(&self, angle_deg: Real) -> Location {
        let xy = rot2_deg(angle_deg) * self.xy();
        Location::new(self.units, xy.x, xy.y, self.z, self.rotation + angle_deg)
    }

    /// Place `offset`, expressed in this location's local frame, into the
    /// frame this location itself lives in.
    ///
    /// `offset`'s (x, y) is rotated by `self.rotation`, the result is
    /// translated by this location's (x, y, z), and the rotations sum. This
    /// is the placement-composition primitive the board transforms build on.
    pub fn add_with_rotation(&self, offset: &Location) -> Result<Location, LocationError> {
        self.check_units(offset)?;
        let rotated = offset.rotate_xy(self.rotation);
        Ok(Location::new(
            self.units,
            self.x + rotated.x,
            self.y + rotated.y,
            self.z + rotated.z,
            rotated.rotation,
        ))
    }

    /// Euclidean distance to `other` in the XY plane.
    pub fn linear_distance_to(&self, other: &Location) -> Result<Real, LocationError> {
        self.check_units(other)?;
        Ok((self.xy() - other.xy()).norm())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3}, {:.3}° {})",
            self.x, self.y, self.z, self.rotation, self.units
        )
    }
}
