//! Canned mesonet responses for tests.
//!
//! The observation layout mirrors the 5-minute station data feed: station
//! name in column 1, wind speed in column 11 and wind direction in column 15.

/// Number of columns in an observation row.
pub const OBSERVATION_COLUMNS: usize = 17;

/// Header line of the observation feed.
pub const OBSERVATION_HEADER: &str = "TIMESTAMP,STATION,TEMP2MAVG,TEMP10MAVG,RELHUM2MAVG,\
RELHUM10MAVG,PRESSUREAVG,PRECIP,SRAVG,SOILTMP5AVG,SOILTMP10AVG,WSPD2MAVG,WSPD2MMAX,\
WSPD10MAVG,WSPD10MMAX,WDIR2M,WDIR2MSTD";

/// Stations used throughout the fixtures: `(name, latitude, longitude)`.
pub const STATIONS: &[(&str, f64, f64)] = &[
    ("Manhattan", 39.21, -96.59),
    ("Hays", 38.85, -99.33),
    ("Garden City", 37.99, -100.81),
    ("Parsons", 37.37, -95.29),
    ("Colby", 39.39, -101.07),
];

/// Station directory CSV for [`STATIONS`], without a header.
pub fn station_directory_csv() -> String {
    STATIONS
        .iter()
        .map(|(name, lat, lon)| format!("{},{},{},{}\n", name, county_of(name), lat, lon))
        .collect()
}

/// Station directory CSV for [`STATIONS`] preceded by a header line.
pub fn station_directory_csv_with_header() -> String {
    format!("NAME,COUNTY,LATITUDE,LONGITUDE\n{}", station_directory_csv())
}

/// A single observation row with the given wind speed and direction.
pub fn observation_row(name: &str, speed: f64, direction: f64) -> String {
    let mut columns: Vec<String> = Vec::with_capacity(OBSERVATION_COLUMNS);
    columns.push("2016-12-09 11:05:00".to_string());
    columns.push(name.to_string());
    for i in 2..OBSERVATION_COLUMNS {
        let column = match i {
            11 => speed.to_string(),
            15 => direction.to_string(),
            _ => format!("{}.5", i),
        };
        columns.push(column);
    }
    columns.join(",")
}

/// Observation feed with a header and one row per `(name, speed, direction)`.
pub fn observation_csv(rows: &[(&str, f64, f64)]) -> String {
    let mut csv = String::from(OBSERVATION_HEADER);
    csv.push('\n');
    for (name, speed, direction) in rows {
        csv.push_str(&observation_row(name, *speed, *direction));
        csv.push('\n');
    }
    csv
}

/// Observation feed covering every fixture station with a northerly wind
/// whose speed grows with station index (Manhattan 5, Hays 6, ...).
pub fn observation_csv_for_all_stations() -> String {
    let rows: Vec<(&str, f64, f64)> = STATIONS
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, 5.0 + i as f64, 0.0))
        .collect();
    observation_csv(&rows)
}

/// An observation row cut off before the wind direction column.
pub fn truncated_observation_row(name: &str) -> String {
    let full = observation_row(name, 4.0, 180.0);
    full.split(',').take(12).collect::<Vec<_>>().join(",")
}

fn county_of(name: &str) -> &'static str {
    match name {
        "Manhattan" => "Riley",
        "Hays" => "Ellis",
        "Garden City" => "Finney",
        "Parsons" => "Labette",
        "Colby" => "Thomas",
        _ => "Unknown",
    }
}
