//! Small id and timestamp helpers shared across the crate.

use chrono::{DateTime, Utc};

/// A UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Generates a random UUID v4 string for record ids.
#[must_use]
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Returns the current UTC timestamp.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

/// Formats a timestamp for human-readable display inside artifacts.
#[must_use]
pub fn display_timestamp(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
