/*!
Errors reported by the extraction entry points
*/

use thiserror::Error;

/**
Configuration errors, rejected before a pass starts.

A pass that starts always completes: numeric trouble met while extracting (non-finite
densities, degenerate edges) is tallied in the [ExtractionReport](crate::report::ExtractionReport) instead
*/
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    /// The grid range is zero, negative or not finite
    #[error("grid range must be positive and finite, got {0}")]
    InvalidRange(f64),

    /// The grid step is zero, negative or not finite
    #[error("grid step must be positive and finite, got {0}")]
    InvalidStep(f64),

    /// The grid step is larger than the whole zone, so no cell would fit
    #[error("grid step {step} exceeds the span of the zone ({span})")]
    StepExceedsSpan {
        /// The provided step
        step: f64,
        /// Side of the zone, twice the range
        span: f64,
    },

    /// The finite difference step used for normals is zero, negative or not finite
    #[error("normal estimation step must be positive and finite, got {0}")]
    InvalidNormalStep(f64),

    /// The grid has too many cells along one axis
    #[error("grid would have {cells_per_axis} cells per axis, at most {max} are allowed")]
    GridTooLarge {
        /// Cells per axis the bounds would produce
        cells_per_axis: f64,
        /// The limit
        max: usize,
    },
}
