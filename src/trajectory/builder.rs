use chrono::NaiveDateTime;

use crate::geo::{initial_bearing, interpolate, GeoPoint, FIRST_SAMPLE_HEADING_DEG};
use crate::solar::SolarPositionProvider;
use crate::time::{sample_times, to_utc};
use crate::trajectory::{sun_side, Trajectory, TrajectoryError, TrajectorySample};

/// Builds the annotated trajectory between `departure` and `arrival`.
///
/// Local wall-clock times are normalized to UTC in their own zones, the
/// route is interpolated into `steps + 1` great-circle samples, each sample
/// gets a linearly spaced timestamp, the heading flown from its predecessor,
/// the provider's solar position, and the resulting side-of-track label.
///
/// Any failure, including a provider failure on a single sample, aborts the
/// whole build; there is no partial result.
#[allow(clippy::too_many_arguments)]
pub fn build_trajectory(
    departure: GeoPoint,
    arrival: GeoPoint,
    departure_local: NaiveDateTime,
    departure_zone: &str,
    arrival_local: NaiveDateTime,
    arrival_zone: &str,
    steps: usize,
    provider: &dyn SolarPositionProvider,
) -> Result<Trajectory, TrajectoryError> {
    let departure_utc = to_utc(departure_local, departure_zone)?;
    let arrival_utc = to_utc(arrival_local, arrival_zone)?;

    let times = sample_times(departure_utc, arrival_utc, steps + 1)?;
    let points = interpolate(&departure, &arrival, steps)?;

    log::debug!(
        "building trajectory: ({:.4}, {:.4}) -> ({:.4}, {:.4}), {} samples over {}",
        departure.latitude_deg,
        departure.longitude_deg,
        arrival.latitude_deg,
        arrival.longitude_deg,
        points.len(),
        arrival_utc - departure_utc,
    );

    let mut samples = Vec::with_capacity(points.len());
    for (index, (point, timestamp)) in points.iter().zip(&times).enumerate() {
        let heading_deg = if index == 0 {
            FIRST_SAMPLE_HEADING_DEG
        } else {
            initial_bearing(&points[index - 1], point)
        };

        let sun = provider.position(point, *timestamp)?;

        samples.push(TrajectorySample {
            index,
            point: *point,
            timestamp: *timestamp,
            heading_deg,
            solar_altitude_deg: sun.altitude_deg,
            solar_azimuth_deg: sun.azimuth_deg,
            sun_side: sun_side(heading_deg, sun.azimuth_deg),
        });
    }

    Ok(Trajectory {
        departure,
        arrival,
        departure_utc,
        arrival_utc,
        samples,
    })
}
