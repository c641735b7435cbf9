use nalgebra::{Rotation2, Vector2};

pub type Real = f64;

pub type Vec2 = Vector2<Real>;
pub type Rot2 = Rotation2<Real>;

/// Counter-clockwise rotation from an angle in degrees.
pub fn rot2_deg(angle_deg: Real) -> Rot2 {
    Rot2::new(angle_deg.to_radians())
}
