use crate::geo::GeoPoint;

/// Maps a coordinate to an IANA zone id. Implemented by an external
/// collaborator (typically a tz-boundary geocoder); the engine only consumes
/// the result.
pub trait ZoneResolver {
    /// Returns the zone id covering `point`, or `None` when the resolver has
    /// no answer (open ocean, missing data).
    fn zone_for(&self, point: &GeoPoint) -> Option<String>;
}

/// Resolves the zone for `point`, falling back to `"UTC"` when the resolver
/// has no answer.
pub fn zone_or_utc<R: ZoneResolver + ?Sized>(resolver: &R, point: &GeoPoint) -> String {
    match resolver.zone_for(point) {
        Some(zone) => zone,
        None => {
            log::debug!(
                "no zone for ({:.4}, {:.4}), falling back to UTC",
                point.latitude_deg,
                point.longitude_deg
            );
            "UTC".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver(Option<String>);

    impl ZoneResolver for FixedResolver {
        fn zone_for(&self, _point: &GeoPoint) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn resolver_answer_is_passed_through() {
        let resolver = FixedResolver(Some("Europe/Istanbul".into()));
        let p = GeoPoint::new(41.2753, 28.7519).unwrap();
        assert_eq!(zone_or_utc(&resolver, &p), "Europe/Istanbul");
    }

    #[test]
    fn missing_answer_falls_back_to_utc() {
        let resolver = FixedResolver(None);
        let p = GeoPoint::new(0.0, -140.0).unwrap();
        assert_eq!(zone_or_utc(&resolver, &p), "UTC");
    }
}
