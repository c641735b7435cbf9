//! Orchestration layers around the board placement geometry.
//!
//! Nothing here adds geometry of its own: the alignment module wraps the
//! two-fiducial pose fit with a serializable report, and the feeder module
//! gives motion and actuation hardware a boundary to implement.

/// Two-fiducial board alignment workflow.
pub mod alignment;
/// Drag-feeder collaborator boundary.
pub mod feeder;

pub use alignment::*;
pub use feeder::*;
