//! The `winddata.js` artifact read by the web map.
//!
//! The file assigns one object literal to `windData`:
//!
//! ```text
//! var windData = {timestamp:"3:05 pm on December 09, 2016",x0:-102.0,y0:37,
//!   x1:-94.6,y1:40,gridWidth:100.0,gridHeight:100.0,field:[u,v,u,v,...,]}
//! ```
//!
//! The bounds are fixed text that existing files have always carried. The
//! field is row-major and keeps the trailing comma before `]`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grid_interpolator::VectorField;

/// JavaScript variable the front end reads.
pub const VARIABLE_NAME: &str = "windData";

/// Header text for [`crate::config::DISPLAY_BOUNDS`].
pub const BOUNDS_HEADER: &str = "x0:-102.0,y0:37,x1:-94.6,y1:40";

/// Everything written to the output file.
#[derive(Debug, Clone)]
pub struct WindFieldRecord {
    /// Pre-formatted observation label.
    pub timestamp: String,
    pub field: VectorField,
}

impl WindFieldRecord {
    /// Render the file contents.
    pub fn render(&self) -> String {
        // Roughly two 20-character numbers per cell.
        let mut out = String::with_capacity(128 + self.field.components().len() * 44);

        let timestamp = serde_json::to_string(&self.timestamp)
            .unwrap_or_else(|_| format!("\"{}\"", self.timestamp));

        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "var {} = {{timestamp:{},{},gridWidth:{:?},gridHeight:{:?},field:[",
            VARIABLE_NAME,
            timestamp,
            BOUNDS_HEADER,
            self.field.width() as f64,
            self.field.height() as f64,
        );

        for (u, v) in self.field.components() {
            let _ = write!(out, "{:?},{:?},", u, v);
        }

        out.push_str("]}");
        out
    }
}

/// Write the record to `path`, returning the number of bytes written.
///
/// The contents go to a sibling temp file first and are renamed into place,
/// so readers never see a half-written field.
pub async fn write_record(path: &Path, record: &WindFieldRecord) -> Result<u64> {
    let contents = record.render();
    let temp_path = temp_path_for(path);

    tokio::fs::write(&temp_path, contents.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        tokio::fs::remove_file(&temp_path).await.ok();
        return Err(e).with_context(|| format!("Failed to move output into {}", path.display()));
    }

    Ok(contents.len() as u64)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "winddata.js".into());
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_interpolator::Grid;

    fn record(speed: f64, direction: f64, width: usize, height: usize) -> WindFieldRecord {
        let field = VectorField::from_polar(
            &Grid::filled(width, height, speed),
            &Grid::filled(width, height, direction),
        )
        .unwrap();
        WindFieldRecord {
            timestamp: "3:05 pm on December 09, 2016".to_string(),
            field,
        }
    }

    #[test]
    fn test_render_header_and_shape() {
        let text = record(10.0, 0.0, 2, 1).render();
        assert_eq!(
            text,
            "var windData = {timestamp:\"3:05 pm on December 09, 2016\",x0:-102.0,y0:37,\
             x1:-94.6,y1:40,gridWidth:2.0,gridHeight:1.0,field:[-0.0,-10.0,-0.0,-10.0,]}"
        );
    }

    #[test]
    fn test_bounds_header_matches_display_bounds() {
        let values: Vec<f64> = BOUNDS_HEADER
            .split(',')
            .map(|pair| pair.split_once(':').unwrap().1.parse().unwrap())
            .collect();
        let b = crate::config::DISPLAY_BOUNDS;
        assert_eq!(values, vec![b.min_x, b.min_y, b.max_x, b.max_y]);
    }

    #[test]
    fn test_render_pair_count() {
        let text = record(3.0, 45.0, 4, 3).render();
        let start = text.find("field:[").unwrap() + "field:[".len();
        let body = &text[start..text.len() - 2];
        let numbers: Vec<&str> = body.split(',').filter(|s| !s.is_empty()).collect();
        assert_eq!(numbers.len(), 4 * 3 * 2);
        assert!(numbers.iter().all(|n| n.parse::<f64>().is_ok()));
    }

    #[test]
    fn test_render_escapes_timestamp() {
        let mut r = record(1.0, 0.0, 1, 1);
        r.timestamp = "say \"hi\"".to_string();
        assert!(r.render().contains("timestamp:\"say \\\"hi\\\"\""));
    }

    #[tokio::test]
    async fn test_write_record_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("winddata.js");
        std::fs::write(&path, "stale").unwrap();

        let r = record(10.0, 90.0, 3, 3);
        let bytes = write_record(&path, &r).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, r.render());
        assert_eq!(bytes, written.len() as u64);
        assert!(written.starts_with("var windData = {timestamp:"));
        assert!(written.ends_with(",]}"));
        assert!(!temp_path_for(&path).exists());
    }

    #[tokio::test]
    async fn test_write_record_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("winddata.js");
        assert!(write_record(&path, &record(1.0, 0.0, 1, 1)).await.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/srv/www/winddata.js"));
        assert_eq!(temp, PathBuf::from("/srv/www/winddata.js.partial"));
    }
}
