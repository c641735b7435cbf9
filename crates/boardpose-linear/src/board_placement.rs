//! Forward and inverse board placement transforms.
//!
//! A board is mounted on the machine at an arbitrary pose (translation plus
//! rotation about its own origin), possibly flipped to present its bottom
//! face to the tooling. These functions map design-space placement
//! coordinates into machine coordinates and back.

use boardpose_core::{Location, LocationError, Real, Side};

/// Map a design-space placement into machine coordinates.
///
/// For [`Side::Bottom`] the placement is first mirrored along X about the
/// board width line (`x' = width - x`); the result is then placed with
/// [`Location::add_with_rotation`]. The mirror is applied before the pose;
/// the two steps do not commute, and the inverse relies on this ordering.
///
/// `board` and `placement` must share units; `width` is in those same units
/// and only participates for bottom-side boards. Total over well-formed
/// inputs: the only failure is a unit mismatch propagated from the
/// arithmetic.
pub fn board_placement_location(
    board: &Location,
    side: Side,
    width: Real,
    placement: &Location,
) -> Result<Location, LocationError> {
    let placement = match side {
        Side::Top => *placement,
        Side::Bottom => mirror_x(placement, width),
    };
    board.add_with_rotation(&placement)
}

/// Map a machine-coordinate location back to its design-space placement.
///
/// Exact algebraic inverse of [`board_placement_location`], applied in
/// reverse order: undo the pose first (translate back, rotate by the negated
/// board rotation), then undo the bottom-side mirror. Round-trips the forward
/// transform up to floating-point error.
pub fn board_placement_location_inverse(
    board: &Location,
    side: Side,
    width: Real,
    location: &Location,
) -> Result<Location, LocationError> {
    // Undo the translation only; rotate_xy below corrects the rotation field.
    let translated = location.subtract(&board.with_rotation(0.0))?;
    let local = translated.rotate_xy(-board.rotation);
    Ok(match side {
        Side::Top => local,
        Side::Bottom => mirror_x(&local, width),
    })
}

/// Reflect x about the board width line. Self-inverse.
fn mirror_x(location: &Location, width: Real) -> Location {
    let flipped = location.multiply(-1.0, 1.0, 1.0, 1.0);
    Location {
        x: flipped.x + width,
        ..flipped
    }
}
