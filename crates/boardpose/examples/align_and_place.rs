//! Calibrate a board pose from two fiducials, place a part, and project a
//! measured machine location back into design space.

use anyhow::Result;
use boardpose::{
    align_board, board_placement_location, board_placement_location_inverse,
    FiducialCorrespondence, LengthUnit, Location, Side,
};

fn main() -> Result<()> {
    let mm = LengthUnit::Millimeters;

    // The board was mounted at (5, 4) with a 10 degree twist; pretend these
    // came back from fiducial vision.
    let mounted = Location::new(mm, 5.0, 4.0, 0.0, 10.0);
    let ideal_a = Location::new(mm, 5.0, 35.0, 0.0, 0.0);
    let ideal_b = Location::new(mm, 55.0, 5.0, 0.0, 0.0);
    let a = FiducialCorrespondence {
        ideal: ideal_a,
        measured: board_placement_location(&mounted, Side::Top, 100.0, &ideal_a)?,
    };
    let b = FiducialCorrespondence {
        ideal: ideal_b,
        measured: board_placement_location(&mounted, Side::Top, 100.0, &ideal_b)?,
    };

    let alignment = align_board(&a, &b)?;
    println!("fitted pose: {}", alignment.pose);
    println!("residual:    {:.6}", alignment.residual);

    // Place a part from the design data, top and bottom side.
    let placement = Location::new(mm, 25.0, 12.5, 0.0, 90.0);
    for side in [Side::Top, Side::Bottom] {
        let target = board_placement_location(&alignment.pose, side, 100.0, &placement)?;
        let back = board_placement_location_inverse(&alignment.pose, side, 100.0, &target)?;
        println!("{side}: {placement} -> {target} (back: {back})");
    }

    Ok(())
}
