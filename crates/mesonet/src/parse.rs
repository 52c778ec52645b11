//! CSV parsing for mesonet responses.
//!
//! Column positions are a contract with the upstream feed and must not move.

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{MesonetError, Result};
use crate::provider::{Observation, Station};

/// Station directory columns.
pub mod directory_columns {
    pub const NAME: usize = 0;
    pub const LATITUDE: usize = 2;
    pub const LONGITUDE: usize = 3;
}

/// Observation snapshot columns.
pub mod observation_columns {
    pub const STATION: usize = 1;
    pub const WIND_SPEED: usize = 11;
    pub const WIND_DIRECTION: usize = 15;
}

/// Parse the station directory.
///
/// Rows with fewer than four columns are an error. Rows whose coordinates
/// are not numbers (a header line, for instance) are skipped.
pub fn parse_station_directory(text: &str) -> Result<Vec<Station>> {
    use directory_columns::*;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut stations = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = line_of(&record);

        if record.len() <= LONGITUDE {
            return Err(MesonetError::MalformedDirectoryRow {
                line,
                reason: format!("expected at least {} columns, found {}", LONGITUDE + 1, record.len()),
            });
        }

        let name = &record[NAME];
        match (parse_number(&record[LATITUDE]), parse_number(&record[LONGITUDE])) {
            (Some(latitude), Some(longitude)) => stations.push(Station {
                name: name.to_string(),
                latitude,
                longitude,
            }),
            _ => {
                debug!(line, name, "Skipping station directory row without coordinates");
            }
        }
    }

    Ok(stations)
}

/// Parse an observation snapshot.
///
/// The first row is the header: it must be as wide as a data row but is not
/// turned into an observation. Short rows, non-numeric wind values and blank
/// lines are all malformed. Every malformed row is logged; if there was at
/// least one, the whole snapshot is rejected.
pub fn parse_observations(text: &str) -> Result<Vec<Observation>> {
    let mut malformed = Vec::new();
    for line in blank_lines(text) {
        warn!(line, reason = "blank line", "Data not available for observation row");
        malformed.push(line);
    }

    // The reader drops empty lines on its own, hence the scan above.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut observations = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = line_of(&record);

        let outcome = if index == 0 {
            check_width(&record)
        } else {
            observation_from_record(&record).map(|observation| observations.push(observation))
        };

        if let Err(reason) = outcome {
            warn!(line, reason = %reason, "Data not available for observation row");
            malformed.push(line);
        }
    }

    if let Some(&first_line) = malformed.iter().min() {
        return Err(MesonetError::MalformedObservations {
            count: malformed.len(),
            first_line,
        });
    }

    Ok(observations)
}

/// 1-based numbers of empty lines. A final line terminator does not open a
/// new line.
fn blank_lines(text: &str) -> Vec<u64> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| line.is_empty())
        .map(|(i, _)| i as u64 + 1)
        .collect()
}

fn check_width(record: &StringRecord) -> std::result::Result<(), String> {
    use observation_columns::WIND_DIRECTION;

    if record.len() <= WIND_DIRECTION {
        return Err(format!(
            "expected at least {} columns, found {}",
            WIND_DIRECTION + 1,
            record.len()
        ));
    }
    Ok(())
}

fn observation_from_record(record: &StringRecord) -> std::result::Result<Observation, String> {
    use observation_columns::*;

    check_width(record)?;

    let wind_speed = parse_number(&record[WIND_SPEED])
        .ok_or_else(|| format!("wind speed {:?} is not a number", &record[WIND_SPEED]))?;
    let wind_direction = parse_number(&record[WIND_DIRECTION])
        .ok_or_else(|| format!("wind direction {:?} is not a number", &record[WIND_DIRECTION]))?;

    Ok(Observation {
        station: record[STATION].to_string(),
        wind_speed,
        wind_direction,
    })
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse().ok()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory_skips_header() {
        let text = "NAME,COUNTY,LATITUDE,LONGITUDE\nHays,Ellis,38.85,-99.33\n";
        let stations = parse_station_directory(text).unwrap();
        assert_eq!(
            stations,
            vec![Station {
                name: "Hays".to_string(),
                latitude: 38.85,
                longitude: -99.33
            }]
        );
    }

    #[test]
    fn test_parse_directory_short_row_is_error() {
        let text = "Hays,Ellis,38.85,-99.33\nColby,Thomas\n";
        let err = parse_station_directory(text).unwrap_err();
        assert!(matches!(err, MesonetError::MalformedDirectoryRow { line: 2, .. }));
    }

    #[test]
    fn test_parse_directory_quoted_name() {
        let text = "\"Garden City\",Finney,37.99,-100.81\n";
        let stations = parse_station_directory(text).unwrap();
        assert_eq!(stations[0].name, "Garden City");
    }

    #[test]
    fn test_parse_observations_reads_wind_columns() {
        let header = (0..17).map(|i| format!("C{}", i)).collect::<Vec<_>>().join(",");
        let row = "t,Hays,a,b,c,d,e,f,g,h,i,12.5,k,l,m,270,o";
        let text = format!("{}\n{}\n", header, row);

        let observations = parse_observations(&text).unwrap();
        assert_eq!(
            observations,
            vec![Observation {
                station: "Hays".to_string(),
                wind_speed: 12.5,
                wind_direction: 270.0,
            }]
        );
    }

    #[test]
    fn test_parse_observations_non_numeric_value() {
        let header = (0..17).map(|i| format!("C{}", i)).collect::<Vec<_>>().join(",");
        let row = "t,Hays,a,b,c,d,e,f,g,h,i,,k,l,m,270,o";
        let text = format!("{}\n{}\n", header, row);

        let err = parse_observations(&text).unwrap_err();
        assert!(matches!(
            err,
            MesonetError::MalformedObservations {
                count: 1,
                first_line: 2
            }
        ));
    }

    #[test]
    fn test_parse_observations_header_only() {
        let header = (0..17).map(|i| format!("C{}", i)).collect::<Vec<_>>().join(",");
        assert!(parse_observations(&header).unwrap().is_empty());
    }

    #[test]
    fn test_parse_observations_short_header_is_malformed() {
        let row = "t,Hays,a,b,c,d,e,f,g,h,i,12.5,k,l,m,270,o";
        let text = format!("TIMESTAMP,STATION\n{}\n", row);

        let err = parse_observations(&text).unwrap_err();
        assert!(matches!(
            err,
            MesonetError::MalformedObservations {
                count: 1,
                first_line: 1
            }
        ));
    }

    #[test]
    fn test_parse_observations_blank_line_is_malformed() {
        let header = (0..17).map(|i| format!("C{}", i)).collect::<Vec<_>>().join(",");
        let hays = "t,Hays,a,b,c,d,e,f,g,h,i,12.5,k,l,m,270,o";
        let colby = "t,Colby,a,b,c,d,e,f,g,h,i,3.0,k,l,m,90,o";
        let text = format!("{}\n{}\n\n{}\n", header, hays, colby);

        let err = parse_observations(&text).unwrap_err();
        assert!(matches!(
            err,
            MesonetError::MalformedObservations {
                count: 1,
                first_line: 3
            }
        ));
    }

    #[test]
    fn test_blank_lines_ignores_final_terminator() {
        assert!(blank_lines("a\nb\n").is_empty());
        assert_eq!(blank_lines("a\n\nb\n"), vec![2]);
        assert_eq!(blank_lines("a\r\n\r\nb"), vec![2]);
        assert_eq!(blank_lines("a\n\n"), vec![2]);
    }
}
