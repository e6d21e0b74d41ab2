use serde::{Deserialize, Serialize};

use crate::geo::GeoError;

/// A geographic coordinate in degrees. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting coordinates outside the valid ranges
    /// (latitude [-90, 90], longitude [-180, 180]).
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude_deg) || latitude_deg.is_nan() {
            return Err(GeoError::InvalidLatitude(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) || longitude_deg.is_nan() {
            return Err(GeoError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Unit-sphere Cartesian coordinates:
    /// x=cos(lat)*cos(lon), y=cos(lat)*sin(lon), z=sin(lat).
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let lat = self.lat_rad();
        let lon = self.lon_rad();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// Inverse of [`to_unit_vector`](Self::to_unit_vector). The z component
    /// is clamped before `asin` to absorb floating-point drift.
    pub fn from_unit_vector(v: [f64; 3]) -> Self {
        Self {
            latitude_deg: v[2].clamp(-1.0, 1.0).asin().to_degrees(),
            longitude_deg: v[1].atan2(v[0]).to_degrees(),
        }
    }
}
