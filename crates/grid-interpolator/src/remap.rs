//! Affine remapping between coordinate ranges.
//!
//! Stations are placed on the grid by mapping each geographic axis linearly
//! onto the grid's index range, e.g. latitude `[36, 41]` onto `[0, 100]`.

use crate::error::{InterpolationError, Result};

/// A linear map sending `src_start → dst_start` and `src_end → dst_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRemap {
    src_start: f64,
    src_end: f64,
    dst_start: f64,
    dst_end: f64,
}

impl LinearRemap {
    /// Create a remap between two ranges. The source range must have non-zero width.
    pub fn new(src: (f64, f64), dst: (f64, f64)) -> Result<Self> {
        let span = src.1 - src.0;
        if span == 0.0 || !span.is_finite() {
            return Err(InterpolationError::DegenerateRange {
                start: src.0,
                end: src.1,
            });
        }

        Ok(Self {
            src_start: src.0,
            src_end: src.1,
            dst_start: dst.0,
            dst_end: dst.1,
        })
    }

    /// Map a value. Values outside the source range are extrapolated.
    pub fn apply(&self, value: f64) -> f64 {
        let t = (value - self.src_start) / (self.src_end - self.src_start);
        self.dst_start + t * (self.dst_end - self.dst_start)
    }

    /// Map a value, rejecting anything outside the source range.
    pub fn apply_checked(&self, value: f64) -> Result<f64> {
        let (min, max) = self.source_bounds();
        if !(min..=max).contains(&value) {
            return Err(InterpolationError::OutOfRange { value, min, max });
        }
        Ok(self.apply(value))
    }

    /// The map going the other way.
    ///
    /// A zero-width destination range has no inverse.
    pub fn inverse(&self) -> Result<Self> {
        Self::new(
            (self.dst_start, self.dst_end),
            (self.src_start, self.src_end),
        )
    }

    /// Source range as `(min, max)` regardless of orientation.
    pub fn source_bounds(&self) -> (f64, f64) {
        (
            self.src_start.min(self.src_end),
            self.src_start.max(self.src_end),
        )
    }
}
