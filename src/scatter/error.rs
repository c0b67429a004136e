//! Scatter error types.

use thiserror::Error;

/// Errors that can occur when generating a prize layout
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScatterError {
    /// No prize template was supplied to copy
    #[error("No prize template assigned; nothing to scatter")]
    MissingTemplate,

    /// Scale bounds are inverted, non-finite or not positive
    #[error("Invalid scale range [{min}, {max}]")]
    InvalidScaleRange { min: f32, max: f32 },

    /// Spawn area has a negative or non-finite extent
    #[error("Invalid spawn area {width} x {height}")]
    InvalidSpawnArea { width: f32, height: f32 },
}
