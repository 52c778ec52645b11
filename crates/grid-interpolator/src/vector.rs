//! Wind vector fields built from speed and direction grids.

use crate::error::{InterpolationError, Result};
use crate::types::Grid;

/// Split a wind speed and meteorological direction into `(u, v)`.
///
/// Direction is in degrees and names where the wind blows *from*, so a
/// northerly (0°) wind has a negative `v`.
pub fn wind_components(speed: f64, direction_deg: f64) -> (f64, f64) {
    let rad = direction_deg.to_radians();
    (-speed * rad.sin(), -speed * rad.cos())
}

/// A `(u, v)` pair per grid cell, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    components: Vec<(f64, f64)>,
    width: usize,
    height: usize,
}

impl VectorField {
    /// Combine a magnitude grid and a direction grid cell by cell.
    ///
    /// Both grids must have the same shape.
    pub fn from_polar(magnitude: &Grid, direction: &Grid) -> Result<Self> {
        if !magnitude.same_shape(direction) {
            return Err(InterpolationError::ShapeMismatch {
                expected_width: magnitude.width(),
                expected_height: magnitude.height(),
                found_width: direction.width(),
                found_height: direction.height(),
            });
        }

        let components = magnitude
            .values()
            .iter()
            .zip(direction.values())
            .map(|(&speed, &dir)| wind_components(speed, dir))
            .collect();

        Ok(Self {
            components,
            width: magnitude.width(),
            height: magnitude.height(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Components in row-major order.
    pub fn components(&self) -> &[(f64, f64)] {
        &self.components
    }
}
