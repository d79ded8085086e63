//! Antipode computation
//!
//! The antipode of a point is found by negating latitude and shifting
//! longitude by 180 degrees, normalized into (-180, 180].

use crate::coord::{normalize_longitude, Coordinates};

/// Compute the antipode of a coordinate
///
/// Total over finite inputs: values outside the canonical geographic
/// ranges are normalized (longitude) and clamped (latitude) rather than
/// rejected. At the poles the longitude is geometrically meaningless but
/// is still returned in normalized form; the caller decides how to
/// display it.
///
/// Applying the function twice returns the original coordinate within
/// floating-point tolerance, except across the pole/antimeridian
/// boundary re-normalization.
pub fn antipode(c: Coordinates) -> Coordinates {
    let lat = (-c.lat).clamp(-90.0, 90.0);
    let shifted = if c.lon >= 0.0 {
        c.lon - 180.0
    } else {
        c.lon + 180.0
    };
    Coordinates::new(lat, normalize_longitude(shifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_york_antipode() {
        // New York maps to the Indian Ocean southwest of Australia
        let nyc = Coordinates::new(40.7128, -74.0060);
        let anti = antipode(nyc);

        assert_relative_eq!(anti.lat, -40.7128, epsilon = 1e-9);
        assert_relative_eq!(anti.lon, 105.9940, epsilon = 1e-9);
    }

    #[test]
    fn test_prime_meridian_maps_to_antimeridian() {
        // lon 0 shifts to the antimeridian, which must report as +180
        let anti = antipode(Coordinates::new(0.0, 0.0));
        assert_relative_eq!(anti.lat, 0.0);
        assert_relative_eq!(anti.lon, 180.0);
    }

    #[test]
    fn test_poles() {
        let north = antipode(Coordinates::new(90.0, 0.0));
        assert_relative_eq!(north.lat, -90.0);
        assert_relative_eq!(north.lon, 180.0);

        let south = antipode(Coordinates::new(-90.0, 0.0));
        assert_relative_eq!(south.lat, 90.0);
        assert_relative_eq!(south.lon, 180.0);
    }

    #[test]
    fn test_involution() {
        // Applying twice returns to the original for interior coordinates
        let points = [
            Coordinates::new(40.7128, -74.0060),
            Coordinates::new(-33.8688, 151.2093),
            Coordinates::new(51.5074, -0.1278),
            Coordinates::new(1.3521, 103.8198),
            Coordinates::new(-13.5, 47.25),
        ];
        for p in points {
            let round_trip = antipode(antipode(p));
            assert_relative_eq!(round_trip.lat, p.lat, epsilon = 1e-9);
            assert_relative_eq!(round_trip.lon, p.lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_range_invariants() {
        // Outputs stay in [-90, 90] x (-180, 180] even for sloppy inputs
        let inputs = [
            Coordinates::new(0.0, 360.0),
            Coordinates::new(45.0, 540.0),
            Coordinates::new(-45.0, -540.0),
            Coordinates::new(89.999, 179.999),
            Coordinates::new(-89.999, -179.999),
            Coordinates::new(12.0, -180.0),
        ];
        for c in inputs {
            let a = antipode(c);
            assert!((-90.0..=90.0).contains(&a.lat), "lat {} out of range", a.lat);
            assert!(
                a.lon > -180.0 && a.lon <= 180.0,
                "lon {} out of range",
                a.lon
            );
        }
    }

    #[test]
    fn test_antimeridian_input() {
        // +180 and -180 describe the same meridian, so both antipodes
        // land on the prime meridian
        let from_east = antipode(Coordinates::new(10.0, 180.0));
        let from_west = antipode(Coordinates::new(10.0, -180.0));
        assert_relative_eq!(from_east.lon, 0.0, epsilon = 1e-9);
        assert_relative_eq!(from_west.lon, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equator_symmetry() {
        let anti = antipode(Coordinates::new(0.0, 90.0));
        assert_relative_eq!(anti.lat, 0.0);
        assert_relative_eq!(anti.lon, -90.0);
    }
}
