//! Inverse-distance weighted interpolation.

use tracing::debug;

use crate::error::{InterpolationError, Result};
use crate::types::{Grid, IdwParams, Sample};

/// Value written to cells that have no usable samples.
pub const NO_DATA: f64 = -9999.0;

/// Distances below this count as the query sitting on a sample.
pub const EXACT_HIT_TOLERANCE: f64 = 1e-10;

/// IDW estimate at a single query point.
///
/// Every distance is `sqrt(dx² + dy² + smoothing²)`. If the query coincides
/// with a sample (distance below [`EXACT_HIT_TOLERANCE`]) that sample's value
/// is returned as-is; the first such sample in slice order wins. With no
/// samples the result is [`NO_DATA`].
pub fn point_value(x: f64, y: f64, samples: &[Sample], power: f64, smoothing: f64) -> f64 {
    let smoothing_sq = smoothing * smoothing;
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for sample in samples {
        let dx = x - sample.x;
        let dy = y - sample.y;
        let dist = (dx * dx + dy * dy + smoothing_sq).sqrt();
        if dist < EXACT_HIT_TOLERANCE {
            return sample.value;
        }

        let weight = 1.0 / dist.powf(power);
        numerator += sample.value * weight;
        denominator += weight;
    }

    if denominator > 0.0 {
        numerator / denominator
    } else {
        NO_DATA
    }
}

/// Fill a `width × height` grid with IDW estimates.
///
/// The cell at `(col, row)` is evaluated at query point `(col, row)`. The
/// result is row-major. Parameters are not validated; see
/// [`interpolate_with`] for the checked variant.
pub fn interpolate(
    samples: &[Sample],
    width: usize,
    height: usize,
    power: f64,
    smoothing: f64,
) -> Grid {
    let mut data = Vec::with_capacity(width * height);

    for row in 0..height {
        for col in 0..width {
            data.push(point_value(
                col as f64,
                row as f64,
                samples,
                power,
                smoothing,
            ));
        }
    }

    Grid::from_cells(data, width, height)
}

/// Fill a grid with validated parameters and non-zero dimensions.
pub fn interpolate_with(
    samples: &[Sample],
    width: usize,
    height: usize,
    params: &IdwParams,
) -> Result<Grid> {
    if width == 0 || height == 0 {
        return Err(InterpolationError::EmptyGrid { width, height });
    }

    let grid = interpolate(samples, width, height, params.power, params.smoothing);

    debug!(
        samples = samples.len(),
        width,
        height,
        power = params.power,
        smoothing = params.smoothing,
        no_data_cells = grid.count_value(NO_DATA),
        "Interpolated grid"
    );

    Ok(grid)
}
