//! Inverse-distance weighted gridding of scattered samples.
//!
//! Station observations arrive as scattered points. This crate turns one
//! channel of them into a dense regular grid, and combines a speed grid and a
//! direction grid into a wind vector field.
//!
//! # Architecture
//!
//! ```text
//! stations (lat, lon, value)
//!      │
//!      ├─► LinearRemap (lat → x, lon → y)
//!      │
//!      ▼
//! Vec<Sample> ──► interpolate() ──► Grid   (one per channel)
//!                                    │
//!       speed Grid + direction Grid ─┴─► VectorField::from_polar()
//! ```
//!
//! Grid cells are addressed by their integer `(col, row)` index, and that
//! index is used directly as the query point. Callers are expected to
//! remap sample coordinates into the grid's index range first.
//!
//! # Example
//!
//! ```
//! use grid_interpolator::{interpolate, Sample};
//!
//! let samples = vec![Sample::new(0.0, 0.0, 10.0), Sample::new(10.0, 0.0, 20.0)];
//! let grid = interpolate(&samples, 11, 1, 2.0, 0.0);
//!
//! assert_eq!(grid.get(0, 0), Some(10.0));
//! assert!((grid.get(5, 0).unwrap() - 15.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod interpolation;
pub mod remap;
pub mod types;
pub mod vector;

// Re-export commonly used types at crate root
pub use error::{InterpolationError, Result};
pub use interpolation::{interpolate, interpolate_with, point_value, EXACT_HIT_TOLERANCE, NO_DATA};
pub use remap::LinearRemap;
pub use types::{Grid, IdwParams, Sample};
pub use vector::{wind_components, VectorField};
