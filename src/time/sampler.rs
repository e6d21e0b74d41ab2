use chrono::{DateTime, Utc};

use crate::time::TimeError;

/// Produces `n_points` instants linearly spaced between `departure` and
/// `arrival` inclusive, assuming uniform speed along the route. Acceleration
/// and deceleration phases are deliberately not modeled.
pub fn sample_times(
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    n_points: usize,
) -> Result<Vec<DateTime<Utc>>, TimeError> {
    if arrival < departure {
        return Err(TimeError::InvalidInterval { departure, arrival });
    }
    if n_points < 2 {
        return Err(TimeError::InsufficientSamples {
            requested: n_points,
        });
    }

    let total = arrival - departure;
    let legs = (n_points - 1) as i32;
    let times = (0..n_points)
        .map(|i| departure + total * i as i32 / legs)
        .collect();
    Ok(times)
}
