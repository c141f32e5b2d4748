/*!
Input world-related data structures for the algorithm
*/

use std::ops::Add;

use tracing::trace;

use crate::error::ExtractionError;
use crate::traits::Coordinate;

/// Grids with more cells than this along one axis are rejected
pub const MAX_CELLS_PER_AXIS: usize = 4096;

/**
The cubic zone `[-range, range]` (on each axis) for which to run an extraction, and the side of its cells.

Every cell whose lowest corner lies in the zone is extracted, so the last cells stick out of
it by up to one `step`.
```
# use marching_field::structs::*;
let bounds = GridBounds::new(1.0, 0.5);
assert_eq!(bounds.cells_per_axis(), Ok(5));
assert_eq!(bounds.lattice_coordinate(4), 1.0);
// A step larger than the zone is a configuration error
assert!(GridBounds::new(1.0, 2.5).cells_per_axis().is_err());
```
*/
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds<F> {
    /// Half the side of the zone, which spans `-range..=range` on each axis
    pub range: F,
    /// Side of a cell
    pub step: F,
}

impl<F> GridBounds<F>
where
    F: Coordinate,
{
    /// Shortcut constructor
    pub fn new(range: F, step: F) -> Self {
        GridBounds { range, step }
    }

    /**
    Check the bounds, and count the cells to visit along each axis.
    All axes have the same count, so a pass visits the cube of it.
    */
    pub fn cells_per_axis(&self) -> Result<usize, ExtractionError> {
        if !(self.range.is_finite() && self.range > F::zero()) {
            return Err(ExtractionError::InvalidRange(self.range.as_f64()));
        }
        if !(self.step.is_finite() && self.step > F::zero()) {
            return Err(ExtractionError::InvalidStep(self.step.as_f64()));
        }
        let span = self.range + self.range;
        if self.step > span {
            return Err(ExtractionError::StepExceedsSpan {
                step: self.step.as_f64(),
                span: span.as_f64(),
            });
        }
        // A few epsilons of slack so that a range that is a multiple of the step keeps its last cell
        let slack = F::one() + F::epsilon() * F::from_f64(4.0);
        let steps = (span / self.step * slack).floor();
        let too_large = ExtractionError::GridTooLarge {
            cells_per_axis: steps.as_f64() + 1.0,
            max: MAX_CELLS_PER_AXIS,
        };
        let cells = match steps.to_usize() {
            Some(steps) if steps < MAX_CELLS_PER_AXIS => steps + 1,
            _ => return Err(too_large),
        };
        trace!(cells_per_axis = cells, "grid sized");
        Ok(cells)
    }

    /// World coordinate of the lattice plane with the given index (same on all axes)
    pub fn lattice_coordinate(&self, index: usize) -> F {
        -self.range + self.step * F::from_index(index)
    }

    /// World position of a lattice point
    pub fn lattice_point(&self, x: usize, y: usize, z: usize) -> Position<F> {
        Position {
            x: self.lattice_coordinate(x),
            y: self.lattice_coordinate(y),
            z: self.lattice_coordinate(z),
        }
    }
}

/// A world space position
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position<F> {
    /// X
    pub x: F,
    /// Y
    pub y: F,
    /// Z
    pub z: F,
}

impl<F> Position<F>
where
    F: Coordinate,
{
    /// Shortcut constructor
    pub fn new(x: F, y: F, z: F) -> Self {
        Position { x, y, z }
    }

    /// Interpolate between this `self` position and `other`, by the given `factor` (0 giving self, 1 giving other)
    pub fn interp_toward(&self, other: &Position<F>, factor: F) -> Position<F> {
        Position {
            x: self.x + factor * (other.x - self.x),
            y: self.y + factor * (other.y - self.y),
            z: self.z + factor * (other.z - self.z),
        }
    }

    /// Square of the euclidean distance to `other`
    pub fn distance_squared(&self, other: &Position<F>) -> F {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Whether no coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// XYZ
    pub fn to_array(&self) -> [F; 3] {
        [self.x, self.y, self.z]
    }
}

impl<F> Add<&[F; 3]> for &Position<F>
where
    F: Coordinate,
{
    type Output = Position<F>;

    fn add(self, rhs: &[F; 3]) -> Self::Output {
        Position {
            x: self.x + rhs[0],
            y: self.y + rhs[1],
            z: self.z + rhs[2],
        }
    }
}
