use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::time::TimeError;

/// Interprets `local` as wall-clock time in the IANA zone named by `zone_id`
/// and returns the equivalent UTC instant, honoring the zone's offset rules
/// for that date (including daylight-saving transitions).
///
/// A wall-clock time repeated by a fall-back transition resolves to the
/// earlier of the two instants. A time skipped by a spring-forward
/// transition does not exist and fails with
/// [`TimeError::NonexistentLocalTime`].
pub fn to_utc(local: NaiveDateTime, zone_id: &str) -> Result<DateTime<Utc>, TimeError> {
    let tz: Tz = zone_id
        .parse()
        .map_err(|_| TimeError::UnknownZone(zone_id.to_string()))?;

    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(TimeError::NonexistentLocalTime {
            local,
            zone: zone_id.to_string(),
        }),
    }
}
