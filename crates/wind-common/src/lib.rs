//! Common types shared across the wind field builder crates.

pub mod bbox;
pub mod time;

pub use bbox::BoundingBox;
pub use time::{ObservationTime, TimeParseError, BUCKET_MINUTES};
