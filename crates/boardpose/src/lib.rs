//! Board placement geometry for pick-and-place machines.
//!
//! A board is designed in its own coordinate frame, then mounted on the
//! machine at an arbitrary translation and rotation, possibly flipped to
//! present its bottom face. This crate maps design-space placements into
//! machine coordinates, projects machine coordinates back into design space,
//! and recovers the actual mounting pose from two measured fiducials.
//!
//! ```
//! use boardpose::{
//!     align_board, board_placement_location, board_placement_location_inverse,
//!     FiducialCorrespondence, LengthUnit, Location, Side,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mm = LengthUnit::Millimeters;
//!
//! // Two fiducials as authored, and where the machine actually measured them.
//! let a = FiducialCorrespondence {
//!     ideal: Location::new(mm, 5.0, 35.0, 0.0, 0.0),
//!     measured: Location::new(mm, 3.85, 39.34, 0.0, 0.0),
//! };
//! let b = FiducialCorrespondence {
//!     ideal: Location::new(mm, 55.0, 5.0, 0.0, 0.0),
//!     measured: Location::new(mm, 58.30, 18.47, 0.0, 0.0),
//! };
//! let alignment = align_board(&a, &b)?;
//!
//! // Every remaining design-space placement now lands on the real board.
//! let placement = Location::new(mm, 25.0, 12.5, 0.0, 90.0);
//! let target = board_placement_location(&alignment.pose, Side::Top, 100.0, &placement)?;
//!
//! // Machine feedback projects back into design space exactly.
//! let back = board_placement_location_inverse(&alignment.pose, Side::Top, 100.0, &target)?;
//! assert!((back.x - placement.x).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

pub use boardpose_core::*;
pub use boardpose_linear::*;
pub use boardpose_pipeline::*;
