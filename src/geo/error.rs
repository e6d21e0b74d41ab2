use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),
    #[error("invalid longitude {0}° (must be between -180° and +180°)")]
    InvalidLongitude(f64),
    #[error("great-circle route is ambiguous: endpoints are antipodal (separation {separation_deg:.6}°)")]
    AmbiguousRoute { separation_deg: f64 },
}
