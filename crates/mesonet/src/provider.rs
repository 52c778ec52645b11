//! Station data provider abstraction.

use async_trait::async_trait;
use wind_common::ObservationTime;

use crate::error::Result;

/// An entry in the station directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One station's wind reading from an observation snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station: String,
    /// Wind speed (column 11 of the feed).
    pub wind_speed: f64,
    /// Direction the wind blows from, degrees (column 15 of the feed).
    pub wind_direction: f64,
}

/// Source of station metadata and observation snapshots.
#[async_trait]
pub trait StationDataProvider: Send + Sync {
    /// Fetch the station directory.
    async fn fetch_stations(&self) -> Result<Vec<Station>>;

    /// Fetch the observation snapshot for one bucket.
    ///
    /// Fails as a whole if any row is malformed.
    async fn fetch_observations(&self, time: ObservationTime) -> Result<Vec<Observation>>;
}
