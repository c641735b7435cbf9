//! Two-fiducial board alignment workflow.
//!
//! Calibration measures two fiducial markers on the mounted board; the fit
//! turns those correspondences into a board pose that every subsequent
//! placement is transformed through.

use anyhow::Result;
use boardpose_core::{Location, Real};
use boardpose_linear::angle_and_offset;
use log::debug;
use serde::{Deserialize, Serialize};

/// A known design-space point paired with its measured machine-space
/// counterpart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiducialCorrespondence {
    /// Design-space fiducial position.
    pub ideal: Location,
    /// Measured machine-space position.
    pub measured: Location,
}

/// Result of a board alignment run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoardAlignment {
    /// Fitted board pose: origin offset in x/y/z, rotation in degrees.
    pub pose: Location,
    /// Distance between the second measured fiducial and the fitted pose
    /// applied to its design position. The fit is exact at the first fiducial
    /// by construction, so measurement disagreement shows up here.
    pub residual: Real,
}

/// Fit the board pose from two fiducial correspondences and report the
/// leftover disagreement.
///
/// The fiducials must be distinct on both the design and the measured side,
/// and all four locations must share units; violations surface as errors from
/// the underlying fit.
pub fn align_board(
    a: &FiducialCorrespondence,
    b: &FiducialCorrespondence,
) -> Result<BoardAlignment> {
    let pose = angle_and_offset(&a.ideal, &b.ideal, &a.measured, &b.measured)?;
    let projected_b = pose.add_with_rotation(&b.ideal)?;
    let residual = projected_b.linear_distance_to(&b.measured)?;
    debug!("board alignment: pose {pose}, residual {residual:.4}");
    Ok(BoardAlignment { pose, residual })
}
