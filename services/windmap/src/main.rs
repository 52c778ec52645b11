//! Wind field builder.
//!
//! Fetches the latest 5-minute mesonet snapshot, grids wind speed and
//! direction with inverse-distance weighting, and writes the vector field
//! consumed by the web map. Runs once and exits:
//! - One fetch of the station directory and one of the snapshot
//! - Any malformed row or unknown station aborts the run
//! - The output file is only replaced after a clean run

mod config;
mod output;
mod pipeline;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use mesonet::{MesonetClient, SnapshotProvider, StationDataProvider, DEFAULT_BASE_URL};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use wind_common::ObservationTime;

use config::GridSettings;

#[derive(Parser, Debug)]
#[command(name = "windmap")]
#[command(about = "Build the wind vector field file from mesonet observations")]
struct Args {
    /// Output file
    #[arg(short, long, env = "WINDMAP_OUTPUT", default_value = "winddata.js")]
    output: PathBuf,

    /// Mesonet REST API base URL
    #[arg(long, env = "MESONET_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Observation instant as YYYYMMDDHHMMSS (default: now, bucket-aligned)
    #[arg(long, env = "WINDMAP_AT")]
    at: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "60")]
    timeout_secs: u64,

    /// Replay a saved station directory instead of fetching it
    #[arg(long, requires = "observations_csv")]
    stations_csv: Option<PathBuf>,

    /// Replay a saved observation snapshot instead of fetching it
    #[arg(long, requires = "stations_csv")]
    observations_csv: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let settings = GridSettings::standard().context("Invalid grid settings")?;
    let time = match &args.at {
        Some(stamp) => ObservationTime::from_query_stamp(stamp)?,
        None => ObservationTime::now(),
    };

    let ((lat0, lon0), (lat1, lon1)) = settings.grid_extent()?;
    info!(
        time = %time,
        width = settings.width,
        height = settings.height,
        lat0, lon0, lat1, lon1,
        "Starting wind field build"
    );

    let provider: Box<dyn StationDataProvider> = match (&args.stations_csv, &args.observations_csv) {
        (Some(stations), Some(observations)) => {
            Box::new(SnapshotProvider::from_files(stations, observations).await?)
        }
        _ => Box::new(MesonetClient::new(
            args.base_url.as_str(),
            Duration::from_secs(args.timeout_secs),
        )?),
    };

    let record = match pipeline::run(provider.as_ref(), time, &settings).await {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "Run aborted, no output written");
            return Err(e.into());
        }
    };

    let bytes = output::write_record(&args.output, &record).await?;
    info!(
        path = %args.output.display(),
        bytes,
        cells = record.field.components().len(),
        "Wrote wind field"
    );

    Ok(())
}
