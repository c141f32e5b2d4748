/*!
Extraction parameters
*/

use crate::error::ExtractionError;
use crate::structs::GridBounds;
use crate::traits::Density;

/**
Configuration of an extraction pass.

The defaults reproduce a metaball scene: a `[-4, 4]` zone with `0.08` cells, and normals from
central differences with a `1e-4` step, left un-normalized
```
# use marching_field::config::ExtractionConfig;
# use marching_field::structs::GridBounds;
let config = ExtractionConfig::<f32>::default()
    .with_bounds(GridBounds::new(2.0, 0.1))
    .with_normalized_normals(true);
assert_eq!(config.cells_per_axis(), Ok(41));
```
*/
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionConfig<F> {
    /// Zone and cell size
    pub bounds: GridBounds<F>,
    /// Offset used on each axis for the central difference normal estimation
    pub normal_step: F,
    /**
    Whether normals are scaled to unit length.
    When false, normals are the raw central differences `F(p - step) - F(p + step)`, whose
    length grows with the field slope
    */
    pub normalize_normals: bool,
}

impl<F> Default for ExtractionConfig<F>
where
    F: Density,
{
    fn default() -> Self {
        Self {
            bounds: GridBounds::new(F::from_f64(4.0), F::from_f64(0.08)),
            normal_step: F::from_f64(1e-4),
            normalize_normals: false,
        }
    }
}

impl<F> ExtractionConfig<F>
where
    F: Density,
{
    /// Default parameters over the given bounds
    #[must_use]
    pub fn new(bounds: GridBounds<F>) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Set the zone and cell size
    #[must_use]
    pub fn with_bounds(mut self, bounds: GridBounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the central difference step used for normals
    #[must_use]
    pub fn with_normal_step(mut self, normal_step: F) -> Self {
        self.normal_step = normal_step;
        self
    }

    /// Set whether normals are scaled to unit length
    #[must_use]
    pub fn with_normalized_normals(mut self, normalize: bool) -> Self {
        self.normalize_normals = normalize;
        self
    }

    /**
    Check the whole configuration, and count the cells to visit along each axis.
    Fails with the [ExtractionError] for the first invalid parameter (normal step first, then bounds)
    */
    pub fn cells_per_axis(&self) -> Result<usize, ExtractionError> {
        if !(self.normal_step.is_finite() && self.normal_step > F::ZERO) {
            return Err(ExtractionError::InvalidNormalStep(self.normal_step.as_f64()));
        }
        self.bounds.cells_per_axis()
    }
}
