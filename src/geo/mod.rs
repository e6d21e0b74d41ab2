mod bearing;
mod error;
mod interpolate;
mod point;

pub use bearing::{initial_bearing, FIRST_SAMPLE_HEADING_DEG};
pub use error::GeoError;
pub use interpolate::{central_angle, interpolate};
pub use point::GeoPoint;
