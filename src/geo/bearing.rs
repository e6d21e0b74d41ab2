use crate::geo::GeoPoint;

/// Heading assigned to the first sample of a trajectory, which has no
/// previous point to measure from. Due east by convention.
pub const FIRST_SAMPLE_HEADING_DEG: f64 = 90.0;

/// Initial great-circle bearing from `from` toward `to`, in degrees
/// clockwise from true north, normalized to [0, 360).
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let dlon = to.lon_rad() - from.lon_rad();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    x.atan2(y).to_degrees().rem_euclid(360.0)
}
