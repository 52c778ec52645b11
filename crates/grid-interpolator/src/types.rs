//! Core types for gridding.

use crate::error::{InterpolationError, Result};

/// A scattered sample: a position in grid-index space and one scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Sample {
    /// Create a new sample.
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }
}

/// Inverse-distance weighting parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdwParams {
    /// Distance exponent. Higher values bias cells toward their nearest samples.
    pub power: f64,
    /// Offset added in quadrature to every distance.
    pub smoothing: f64,
}

impl IdwParams {
    /// Create validated parameters.
    ///
    /// `power` must be finite and positive, `smoothing` finite and non-negative.
    pub fn new(power: f64, smoothing: f64) -> Result<Self> {
        if !power.is_finite() || power <= 0.0 {
            return Err(InterpolationError::invalid_parameter("power", power));
        }
        if !smoothing.is_finite() || smoothing < 0.0 {
            return Err(InterpolationError::invalid_parameter("smoothing", smoothing));
        }
        Ok(Self { power, smoothing })
    }
}

/// A dense grid of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Cell values in row-major order (row 0 first).
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Wrap row-major data. Returns `None` if the length does not match.
    pub fn from_row_major(data: Vec<f64>, width: usize, height: usize) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap row-major data whose length is `width * height` by construction.
    pub(crate) fn from_cells(data: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// A grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at a specific cell.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// All cell values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Whether `other` has the same width and height.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Number of cells holding exactly `value`.
    pub fn count_value(&self, value: f64) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    /// Get the total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
