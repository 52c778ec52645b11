//! Provider backed by saved CSV responses.
//!
//! Used to replay a past run offline and to drive the pipeline in tests.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;
use wind_common::ObservationTime;

use crate::error::Result;
use crate::parse::{parse_observations, parse_station_directory};
use crate::provider::{Observation, Station, StationDataProvider};

/// Serves a fixed station directory and observation snapshot.
///
/// The requested observation time is ignored; the snapshot is whatever was
/// saved.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    stations_csv: String,
    observations_csv: String,
}

impl SnapshotProvider {
    /// Build from in-memory CSV text.
    pub fn new(stations_csv: impl Into<String>, observations_csv: impl Into<String>) -> Self {
        Self {
            stations_csv: stations_csv.into(),
            observations_csv: observations_csv.into(),
        }
    }

    /// Load both responses from disk.
    pub async fn from_files(stations: &Path, observations: &Path) -> Result<Self> {
        let stations_csv = tokio::fs::read_to_string(stations).await?;
        let observations_csv = tokio::fs::read_to_string(observations).await?;
        info!(
            stations = %stations.display(),
            observations = %observations.display(),
            "Loaded saved mesonet responses"
        );
        Ok(Self::new(stations_csv, observations_csv))
    }
}

#[async_trait]
impl StationDataProvider for SnapshotProvider {
    async fn fetch_stations(&self) -> Result<Vec<Station>> {
        parse_station_directory(&self.stations_csv)
    }

    async fn fetch_observations(&self, _time: ObservationTime) -> Result<Vec<Observation>> {
        parse_observations(&self.observations_csv)
    }
}
