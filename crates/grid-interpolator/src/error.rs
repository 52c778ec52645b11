//! Error types for gridding.

use thiserror::Error;

/// Errors that can occur while validating or combining grids.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// An IDW parameter is outside its valid range.
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A grid with zero cells was requested.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// Two grids that must be zipped cell-by-cell differ in shape.
    #[error("grid shape mismatch: expected {expected_width}x{expected_height}, found {found_width}x{found_height}")]
    ShapeMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },

    /// A linear remap was built from a zero-width source range.
    #[error("degenerate remap source range [{start}, {end}]")]
    DegenerateRange { start: f64, end: f64 },

    /// A value fell outside a remap's source range.
    #[error("value {value} outside remap range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl InterpolationError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Result type for gridding operations.
pub type Result<T> = std::result::Result<T, InterpolationError>;
