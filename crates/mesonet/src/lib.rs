//! Mesonet station data access.
//!
//! Two upstream resources feed the wind field job:
//!
//! - the station directory (`name, county, latitude, longitude`)
//! - the 5-minute observation snapshot for every station
//!
//! Both are plain CSV. [`StationDataProvider`] abstracts where they come
//! from so the pipeline can run against the live HTTP API
//! ([`MesonetClient`]) or against saved responses ([`SnapshotProvider`]).

pub mod client;
pub mod error;
pub mod parse;
pub mod provider;
pub mod snapshot;

// Re-exports
pub use client::{MesonetClient, DEFAULT_BASE_URL};
pub use error::{MesonetError, Result};
pub use parse::{parse_observations, parse_station_directory};
pub use provider::{Observation, Station, StationDataProvider};
pub use snapshot::SnapshotProvider;
