use std::f64::consts::PI;

use crate::geo::{GeoError, GeoPoint};

/// Angular separations below this are treated as coincident endpoints;
/// separations within this of pi are treated as antipodal. Roughly 6 mm on
/// the Earth's surface.
const SINGULARITY_EPSILON_RAD: f64 = 1e-9;

/// Central angle between two points via the haversine formula (radians).
pub fn central_angle(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let sin_half_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_half_dlon = ((to.lon_rad() - from.lon_rad()) / 2.0).sin();

    let h = sin_half_dlat * sin_half_dlat
        + lat1.cos() * lat2.cos() * sin_half_dlon * sin_half_dlon;
    2.0 * h.sqrt().min(1.0).asin()
}

/// Interpolates `steps + 1` points along the minor-arc great circle from
/// `from` to `to`, endpoints included, using spherical linear interpolation
/// of the endpoint unit vectors.
///
/// Coincident endpoints produce `steps + 1` copies of `from`. Antipodal
/// endpoints have no unique great circle and fail with
/// [`GeoError::AmbiguousRoute`]. `steps` must be at least 1.
pub fn interpolate(
    from: &GeoPoint,
    to: &GeoPoint,
    steps: usize,
) -> Result<Vec<GeoPoint>, GeoError> {
    debug_assert!(steps >= 1, "interpolate requires at least one step");

    let d = central_angle(from, to);
    if d < SINGULARITY_EPSILON_RAD {
        return Ok(vec![*from; steps + 1]);
    }
    if PI - d < SINGULARITY_EPSILON_RAD {
        return Err(GeoError::AmbiguousRoute {
            separation_deg: d.to_degrees(),
        });
    }

    let v1 = from.to_unit_vector();
    let v2 = to.to_unit_vector();
    let sin_d = d.sin();

    let mut points = Vec::with_capacity(steps + 1);
    points.push(*from);
    for i in 1..steps {
        let f = i as f64 / steps as f64;
        let a = ((1.0 - f) * d).sin() / sin_d;
        let b = (f * d).sin() / sin_d;
        let blended = [
            a * v1[0] + b * v2[0],
            a * v1[1] + b * v2[1],
            a * v1[2] + b * v2[2],
        ];
        points.push(GeoPoint::from_unit_vector(blended));
    }
    points.push(*to);

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn central_angle_equator_quarter() {
        let d = central_angle(&point(0.0, 0.0), &point(0.0, 90.0));
        assert_relative_eq!(d, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn central_angle_same_point_is_zero() {
        let d = central_angle(&point(45.0, 90.0), &point(45.0, 90.0));
        assert!(d.abs() < 1e-12, "same point should be 0, got {}", d);
    }

    #[test]
    fn central_angle_symmetric() {
        let a = point(30.0, 45.0);
        let b = point(60.0, -10.0);
        assert_relative_eq!(central_angle(&a, &b), central_angle(&b, &a), epsilon = 1e-12);
    }

    #[test]
    fn identity_route_repeats_the_point() {
        let p = point(41.2753, 28.7519);
        for steps in [1, 2, 10] {
            let path = interpolate(&p, &p, steps).unwrap();
            assert_eq!(path.len(), steps + 1);
            for q in path {
                assert_eq!(q, p);
            }
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let istanbul = point(41.2753, 28.7519);
        let new_york = point(40.6413, -73.7781);
        let path = interpolate(&istanbul, &new_york, 60).unwrap();
        assert_eq!(path.len(), 61);
        assert_eq!(path[0], istanbul);
        assert_eq!(path[60], new_york);
    }

    #[test]
    fn antipodal_route_is_rejected() {
        let err = interpolate(&point(0.0, 0.0), &point(0.0, 180.0), 10).unwrap_err();
        assert!(matches!(err, GeoError::AmbiguousRoute { .. }));

        let err = interpolate(&point(90.0, 0.0), &point(-90.0, 0.0), 10).unwrap_err();
        assert!(matches!(err, GeoError::AmbiguousRoute { .. }));
    }

    #[test]
    fn equatorial_midpoint() {
        let path = interpolate(&point(0.0, 0.0), &point(0.0, 90.0), 2).unwrap();
        assert_relative_eq!(path[1].latitude_deg, 0.0, epsilon = 1e-9);
        assert_relative_eq!(path[1].longitude_deg, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn meridian_midpoint() {
        let path = interpolate(&point(0.0, 0.0), &point(60.0, 0.0), 2).unwrap();
        assert_relative_eq!(path[1].latitude_deg, 30.0, epsilon = 1e-9);
        assert_relative_eq!(path[1].longitude_deg, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn crosses_the_antimeridian_on_the_short_arc() {
        // Naive lat/lon interpolation would sweep the long way through lon 0.
        let path = interpolate(&point(0.0, 170.0), &point(0.0, -170.0), 2).unwrap();
        let mid = path[1];
        assert_relative_eq!(mid.latitude_deg, 0.0, epsilon = 1e-9);
        assert_relative_eq!(mid.longitude_deg.abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn long_route_stays_on_the_great_circle() {
        // Every interpolated point must see the two endpoints at angles
        // summing to the total separation.
        let istanbul = point(41.2753, 28.7519);
        let new_york = point(40.6413, -73.7781);
        let total = central_angle(&istanbul, &new_york);
        let path = interpolate(&istanbul, &new_york, 20).unwrap();
        for p in &path {
            let sum = central_angle(&istanbul, p) + central_angle(p, &new_york);
            assert_relative_eq!(sum, total, epsilon = 1e-9);
        }
    }

    #[test]
    fn samples_are_evenly_spaced_in_angle() {
        let a = point(10.0, -20.0);
        let b = point(55.0, 40.0);
        let steps = 8;
        let expected = central_angle(&a, &b) / steps as f64;
        let path = interpolate(&a, &b, steps).unwrap();
        for pair in path.windows(2) {
            assert_relative_eq!(central_angle(&pair[0], &pair[1]), expected, epsilon = 1e-9);
        }
    }
}
