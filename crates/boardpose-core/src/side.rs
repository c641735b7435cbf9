use serde::{Deserialize, Serialize};

/// Which physical face of the board is presented to the tooling.
///
/// `Bottom` placements are mirrored along X about the board width line before
/// the board pose is applied. The mirror and the rotation do not commute, so
/// the ordering is fixed by the transform functions and matched exactly by
/// their inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Top => write!(f, "Top"),
            Side::Bottom => write!(f, "Bottom"),
        }
    }
}
