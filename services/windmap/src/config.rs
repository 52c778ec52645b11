//! Job settings.
//!
//! Grid geometry and IDW constants are fixed: the web map is built against
//! a 100×100 field over the Kansas bounding box and does not read them from
//! the file. Only the plumbing around the job (where data comes from, where
//! the file goes) is configurable, through command line flags in `main.rs`.

use grid_interpolator::{IdwParams, InterpolationError, LinearRemap};
use wind_common::BoundingBox;

/// Grid columns.
pub const GRID_WIDTH: usize = 100;
/// Grid rows.
pub const GRID_HEIGHT: usize = 100;

/// IDW distance exponent.
pub const IDW_POWER: f64 = 8.0;
/// IDW smoothing offset.
pub const IDW_SMOOTHING: f64 = 8.0;

/// Latitude span mapped onto the grid's x axis.
pub const LATITUDE_RANGE: (f64, f64) = (36.0, 41.0);
/// Longitude span mapped onto the grid's y axis.
pub const LONGITUDE_RANGE: (f64, f64) = (-103.0, -93.6);
/// Grid-index span both axes are mapped onto.
pub const GRID_INDEX_RANGE: (f64, f64) = (0.0, 100.0);

/// Bounds the front end draws the field into.
pub const DISPLAY_BOUNDS: BoundingBox = BoundingBox::new(-102.0, 37.0, -94.6, 40.0);

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct GridSettings {
    pub width: usize,
    pub height: usize,
    pub idw: IdwParams,
    /// Latitude → sample `x`.
    pub latitude: LinearRemap,
    /// Longitude → sample `y`.
    pub longitude: LinearRemap,
    pub display_bounds: BoundingBox,
}

impl GridSettings {
    /// The fixed production settings.
    pub fn standard() -> Result<Self, InterpolationError> {
        Ok(Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            idw: IdwParams::new(IDW_POWER, IDW_SMOOTHING)?,
            latitude: LinearRemap::new(LATITUDE_RANGE, GRID_INDEX_RANGE)?,
            longitude: LinearRemap::new(LONGITUDE_RANGE, GRID_INDEX_RANGE)?,
            display_bounds: DISPLAY_BOUNDS,
        })
    }

    /// Geographic corners of the grid as `(lat, lon)` at index `(0, 0)`
    /// and at the far end of the index range.
    pub fn grid_extent(&self) -> Result<((f64, f64), (f64, f64)), InterpolationError> {
        let lat = self.latitude.inverse()?;
        let lon = self.longitude.inverse()?;
        Ok((
            (lat.apply(GRID_INDEX_RANGE.0), lon.apply(GRID_INDEX_RANGE.0)),
            (lat.apply(GRID_INDEX_RANGE.1), lon.apply(GRID_INDEX_RANGE.1)),
        ))
    }
}
