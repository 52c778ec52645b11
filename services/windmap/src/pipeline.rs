//! One run of the wind field job: fetch, join, grid, combine.

use std::collections::HashMap;

use grid_interpolator::{interpolate_with, InterpolationError, Sample, VectorField, NO_DATA};
use mesonet::{MesonetError, Observation, Station, StationDataProvider};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use wind_common::ObservationTime;

use crate::config::GridSettings;
use crate::output::WindFieldRecord;

/// Reasons a run stops without writing output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch station data: {0}")]
    Upstream(#[from] MesonetError),

    #[error("{count} observed station(s) missing from the directory, first: {first}")]
    UnknownStations { count: usize, first: String },

    #[error("station {station} at ({latitude}, {longitude}) is outside the mapped area")]
    OutOfArea {
        station: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("gridding failed: {0}")]
    Grid(#[from] InterpolationError),
}

/// Joined observations split into one sample set per channel.
///
/// Both sets hold the same points in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelSamples {
    pub speed: Vec<Sample>,
    pub direction: Vec<Sample>,
}

impl ChannelSamples {
    pub fn len(&self) -> usize {
        self.speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }
}

/// Attach directory coordinates to each observation and place it on the grid.
///
/// Every observation whose station is missing from the directory is logged
/// before the join fails. When the directory repeats a name, the first entry
/// is used.
pub fn join_observations(
    stations: &[Station],
    observations: &[Observation],
    settings: &GridSettings,
) -> Result<ChannelSamples, PipelineError> {
    let mut directory: HashMap<&str, &Station> = HashMap::with_capacity(stations.len());
    for station in stations {
        directory.entry(station.name.as_str()).or_insert(station);
    }

    let mut samples = ChannelSamples::default();
    let mut missing: Vec<&str> = Vec::new();

    for observation in observations {
        let Some(station) = directory.get(observation.station.as_str()) else {
            warn!(station = %observation.station, "Observed station not in directory");
            missing.push(&observation.station);
            continue;
        };

        let place = settings
            .latitude
            .apply_checked(station.latitude)
            .and_then(|x| {
                settings
                    .longitude
                    .apply_checked(station.longitude)
                    .map(|y| (x, y))
            });
        let (x, y) = match place {
            Ok(xy) => xy,
            Err(e) => {
                warn!(station = %station.name, error = %e, "Station outside mapped area");
                return Err(PipelineError::OutOfArea {
                    station: station.name.clone(),
                    latitude: station.latitude,
                    longitude: station.longitude,
                });
            }
        };

        if !settings
            .display_bounds
            .contains_point(station.longitude, station.latitude)
        {
            debug!(station = %station.name, "Station outside display bounds");
        }

        samples.speed.push(Sample::new(x, y, observation.wind_speed));
        samples
            .direction
            .push(Sample::new(x, y, observation.wind_direction));
    }

    if let Some(first) = missing.first() {
        return Err(PipelineError::UnknownStations {
            count: missing.len(),
            first: first.to_string(),
        });
    }

    Ok(samples)
}

/// Grid both channels and combine them into a vector field.
pub fn build_field(
    samples: &ChannelSamples,
    settings: &GridSettings,
) -> Result<VectorField, PipelineError> {
    let speed = interpolate_with(&samples.speed, settings.width, settings.height, &settings.idw)?;
    let direction = interpolate_with(
        &samples.direction,
        settings.width,
        settings.height,
        &settings.idw,
    )?;

    let no_data = speed.count_value(NO_DATA);
    if no_data > 0 {
        warn!(cells = no_data, "Grid cells without data");
    }

    Ok(VectorField::from_polar(&speed, &direction)?)
}

/// Run the job against `provider` for one observation bucket.
#[instrument(skip(provider, time, settings), fields(time = %time))]
pub async fn run<P>(
    provider: &P,
    time: ObservationTime,
    settings: &GridSettings,
) -> Result<WindFieldRecord, PipelineError>
where
    P: StationDataProvider + ?Sized,
{
    let stations = provider.fetch_stations().await?;
    let observations = provider.fetch_observations(time).await?;
    info!(
        stations = stations.len(),
        observations = observations.len(),
        "Fetched mesonet data"
    );

    let samples = join_observations(&stations, &observations, settings)?;
    if samples.is_empty() {
        warn!("No observations joined; field will hold no-data values");
    }
    info!(samples = samples.len(), "Joined observations to stations");

    let field = build_field(&samples, settings)?;

    Ok(WindFieldRecord {
        timestamp: time.display_label(),
        field,
    })
}
