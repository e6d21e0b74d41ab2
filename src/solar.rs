use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::geo::GeoPoint;

/// Sun position as seen from a point at an instant. Altitude is degrees
/// above the local horizon (negative at night); azimuth is degrees clockwise
/// from true north in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
}

/// Failure reported by a [`SolarPositionProvider`]. Carried verbatim; the
/// engine never retries a lookup.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("solar position lookup failed: {0}")]
pub struct SolarError(pub String);

/// Computes the sun's apparent position. Implemented by an external
/// collaborator (an ephemeris library or service client); the engine treats
/// any failure as fatal to the current build.
pub trait SolarPositionProvider {
    fn position(&self, point: &GeoPoint, at: DateTime<Utc>) -> Result<SolarPosition, SolarError>;
}
