mod board_placement;
mod fiducial;

pub use board_placement::*;
pub use fiducial::*;
