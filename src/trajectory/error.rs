use thiserror::Error;

use crate::geo::GeoError;
use crate::solar::SolarError;
use crate::time::TimeError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("route error: {0}")]
    Route(#[from] GeoError),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    #[error(transparent)]
    Solar(#[from] SolarError),
}
