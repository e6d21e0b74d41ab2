use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("arrival {arrival} is before departure {departure}")]
    InvalidInterval {
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
    },
    #[error("at least 2 sample points are required, got {requested}")]
    InsufficientSamples { requested: usize },
    #[error("unknown time zone id: {0}")]
    UnknownZone(String),
    #[error("local time {local} does not exist in zone {zone} (skipped by a DST transition)")]
    NonexistentLocalTime { local: NaiveDateTime, zone: String },
}
