use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Side of the vehicle's longitudinal axis on which the sun bearing falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunSide {
    Left,
    Right,
}

/// One annotated point of a trajectory. Immutable once built; ordered by
/// `index` within its [`Trajectory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub index: usize,
    pub point: GeoPoint,
    pub timestamp: DateTime<Utc>,
    /// Heading flown into this sample, degrees clockwise from true north in
    /// [0, 360). The first sample uses the due-east convention value.
    pub heading_deg: f64,
    pub solar_altitude_deg: f64,
    pub solar_azimuth_deg: f64,
    pub sun_side: SunSide,
}

/// A fully assembled route: every sample annotated, boundary points and
/// instants retained. Either complete and internally consistent or never
/// returned at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub departure: GeoPoint,
    pub arrival: GeoPoint,
    pub departure_utc: DateTime<Utc>,
    pub arrival_utc: DateTime<Utc>,
    pub samples: Vec<TrajectorySample>,
}
