use crate::trajectory::SunSide;

/// Classifies which side of the direction of travel the sun falls on.
///
/// `diff = (azimuth - heading) mod 360`: [0, 180] is `Right`, (180, 360) is
/// `Left`. The boundaries are deliberate conventions, not accidents: sun
/// directly ahead (diff 0) and directly behind (diff 180) both classify as
/// `Right`.
pub fn sun_side(heading_deg: f64, solar_azimuth_deg: f64) -> SunSide {
    let diff = (solar_azimuth_deg - heading_deg).rem_euclid(360.0);
    if diff <= 180.0 {
        SunSide::Right
    } else {
        SunSide::Left
    }
}
