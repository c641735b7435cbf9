//! Synthetic placement helpers for test suites.
//!
//! Deterministic generators only; randomized sweeps seed their own RNGs in
//! the test suites that need them.

use crate::{LengthUnit, Location, Real};

/// Generate an `nx * ny` grid of zero-rotation placements with the given
/// pitch, in row-major order (Y major).
pub fn grid_placements(nx: usize, ny: usize, pitch: Real, units: LengthUnit) -> Vec<Location> {
    let mut placements = Vec::with_capacity(nx.saturating_mul(ny));
    for j in 0..ny {
        for i in 0..nx {
            placements.push(Location::new(
                units,
                i as Real * pitch,
                j as Real * pitch,
                0.0,
                0.0,
            ));
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let grid = grid_placements(3, 2, 2.0, LengthUnit::Millimeters);
        assert_eq!(grid.len(), 6);
        assert_eq!((grid[0].x, grid[0].y), (0.0, 0.0));
        assert_eq!((grid[2].x, grid[2].y), (4.0, 0.0));
        assert_eq!((grid[3].x, grid[3].y), (0.0, 2.0));
    }
}
