//! Integration tests for the board placement transforms.
//!
//! Exercises the forward/inverse round trip across poses, sides, and widths,
//! and the pose fit against placements generated by the forward transform.

use boardpose_core::test_utils::{assert_location_near, assert_near};
use boardpose_core::{synthetic, LengthUnit, Location, Side};
use boardpose_linear::{
    angle_and_offset, board_placement_location, board_placement_location_inverse,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const MM: LengthUnit = LengthUnit::Millimeters;

#[test]
fn round_trip_over_grid_and_rotation_chain() {
    let mut board = Location::new(MM, 5.0, 15.0, -8.0, 0.0);
    let grid = synthetic::grid_placements(4, 3, 12.5, MM);

    for step in [0.0, 55.0, 222.0, -322.0] {
        board = board.rotate_xy(step);
        for side in [Side::Top, Side::Bottom] {
            for place in &grid {
                let loc = board_placement_location(&board, side, 100.0, place).unwrap();
                let back = board_placement_location_inverse(&board, side, 100.0, &loc).unwrap();
                assert_location_near(&back, place, 0.01, 0.01);
            }
        }
    }
}

#[test]
fn random_pose_round_trip_sweep() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..250 {
        let board = Location::new(
            MM,
            rng.random_range(-150.0..150.0),
            rng.random_range(-150.0..150.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-720.0..720.0),
        );
        let width = rng.random_range(10.0..250.0);
        let side = if rng.random_bool(0.5) {
            Side::Bottom
        } else {
            Side::Top
        };
        let place = Location::new(
            MM,
            rng.random_range(-50.0..200.0),
            rng.random_range(-50.0..200.0),
            rng.random_range(-5.0..5.0),
            rng.random_range(-360.0..360.0),
        );

        let loc = board_placement_location(&board, side, width, &place).unwrap();
        let back = board_placement_location_inverse(&board, side, width, &loc).unwrap();
        assert_location_near(&back, &place, 0.01, 0.01);
    }
}

#[test]
fn fitted_pose_reprojects_onto_measurements() {
    let mut rng = StdRng::seed_from_u64(21);

    for _ in 0..100 {
        let board = Location::new(
            MM,
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
            0.0,
            rng.random_range(-170.0..170.0),
        );
        let ideal_a = Location::new(MM, 5.0, 35.0, 0.0, 0.0);
        let ideal_b = Location::new(MM, 55.0, 5.0, 0.0, 0.0);
        let actual_a = board_placement_location(&board, Side::Top, 100.0, &ideal_a).unwrap();
        let actual_b = board_placement_location(&board, Side::Top, 100.0, &ideal_b).unwrap();

        let fitted = angle_and_offset(&ideal_a, &ideal_b, &actual_a, &actual_b).unwrap();

        // The fitted pose must land both fiducials back on their measurements.
        let reproj_a = board_placement_location(&fitted, Side::Top, 100.0, &ideal_a).unwrap();
        let reproj_b = board_placement_location(&fitted, Side::Top, 100.0, &ideal_b).unwrap();
        assert_near("a", reproj_a.linear_distance_to(&actual_a).unwrap(), 0.0, 0.01);
        assert_near("b", reproj_b.linear_distance_to(&actual_b).unwrap(), 0.0, 0.01);
    }
}

#[test]
fn pose_recovery_matches_regression_rotations() {
    for rotation in [10.0, 92.0, -92.0] {
        let board = Location::new(MM, 5.0, 4.0, 0.0, rotation);
        let ideal_a = Location::new(MM, 5.0, 35.0, 0.0, 0.0);
        let ideal_b = Location::new(MM, 55.0, 5.0, 0.0, 0.0);
        let actual_a = board_placement_location(&board, Side::Top, 100.0, &ideal_a).unwrap();
        let actual_b = board_placement_location(&board, Side::Top, 100.0, &ideal_b).unwrap();

        let fitted = angle_and_offset(&ideal_a, &ideal_b, &actual_a, &actual_b).unwrap();
        assert_near("rotation", fitted.rotation, rotation, 1e-3);
        assert_near("x", fitted.x, board.x, 0.01);
        assert_near("y", fitted.y, board.y, 0.01);
    }
}
