//! HTTP client for the mesonet REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};
use wind_common::ObservationTime;

use crate::error::{MesonetError, Result};
use crate::parse::{parse_observations, parse_station_directory};
use crate::provider::{Observation, Station, StationDataProvider};

/// Base URL of the Kansas Mesonet REST API.
pub const DEFAULT_BASE_URL: &str = "http://mesonet.k-state.edu/rest";

/// Station selector used for snapshot requests.
const ALL_STATIONS: &str = "all";

/// Observation interval requested from the feed.
const INTERVAL: &str = "5min";

/// Live mesonet data source.
pub struct MesonetClient {
    client: Client,
    base_url: String,
}

impl MesonetClient {
    /// Create a client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the station directory.
    pub fn stations_url(&self) -> String {
        format!("{}/stationnames/", self.base_url)
    }

    /// URL of the snapshot for one bucket (start and end are the same instant).
    pub fn observations_url(&self, time: ObservationTime) -> String {
        let stamp = time.query_stamp();
        format!(
            "{}/stationdata/?stn={}&int={}&t_start={}&t_end={}",
            self.base_url, ALL_STATIONS, INTERVAL, stamp, stamp
        )
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!(url = %url, "Requesting");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MesonetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl StationDataProvider for MesonetClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_stations(&self) -> Result<Vec<Station>> {
        let body = self.fetch_text(&self.stations_url()).await?;
        let stations = parse_station_directory(&body)?;
        info!(count = stations.len(), "Fetched station directory");
        Ok(stations)
    }

    #[instrument(skip(self, time), fields(base_url = %self.base_url, time = %time))]
    async fn fetch_observations(&self, time: ObservationTime) -> Result<Vec<Observation>> {
        let body = self.fetch_text(&self.observations_url(time)).await?;
        let observations = parse_observations(&body)?;
        info!(count = observations.len(), "Fetched observation snapshot");
        Ok(observations)
    }
}
