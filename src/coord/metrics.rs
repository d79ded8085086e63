//! Derived metrics for coordinate pairs
//!
//! Simple consumers of `Coordinates`: great-circle distance, an
//! approximate time-zone offset, and hemisphere labels.

use crate::constants::geo::{DEGREES_PER_TIMEZONE_HOUR, EARTH_RADIUS_KM};
use crate::coord::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Great-circle distance between two points in kilometers (haversine)
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    // Rounding can push h past 1 for antipodal pairs; sqrt(1 - h) would be NaN
    let h = ((dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Approximate time-zone offset between two points in whole hours
///
/// Longitude-difference heuristic only; ignores real time-zone
/// boundaries and daylight saving.
pub fn time_offset_hours(a: Coordinates, b: Coordinates) -> i64 {
    ((a.lon - b.lon).abs() / DEGREES_PER_TIMEZONE_HOUR).round() as i64
}

/// North/south half of the globe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatHemisphere {
    Northern,
    Southern,
}

/// East/west half of the globe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LonHemisphere {
    Eastern,
    Western,
}

/// Hemisphere pair for a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hemisphere {
    pub lat: LatHemisphere,
    pub lon: LonHemisphere,
}

impl fmt::Display for LatHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Northern => write!(f, "Northern"),
            Self::Southern => write!(f, "Southern"),
        }
    }
}

impl fmt::Display for LonHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eastern => write!(f, "Eastern"),
            Self::Western => write!(f, "Western"),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.lat, self.lon)
    }
}

/// Hemisphere labels for a coordinate
///
/// Zero latitude/longitude reports the non-negative branch (Northern,
/// Eastern) by convention.
pub fn hemisphere(c: Coordinates) -> Hemisphere {
    Hemisphere {
        lat: if c.lat >= 0.0 {
            LatHemisphere::Northern
        } else {
            LatHemisphere::Southern
        },
        lon: if c.lon >= 0.0 {
            LonHemisphere::Eastern
        } else {
            LonHemisphere::Western
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_known_distance() {
        // One degree of latitude is roughly 111 km
        let a = Coordinates::new(40.7128, -74.0060);
        let b = Coordinates::new(41.7128, -74.0060);

        let distance = haversine_km(a, b);
        assert!(
            (distance - 111.0).abs() < 1.0,
            "distance {} should be about 111 km",
            distance
        );
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Coordinates::new(40.7128, -74.0060);
        let b = Coordinates::new(-33.8688, 151.2093);
        assert_relative_eq!(haversine_km(a, b), haversine_km(b, a), epsilon = 1e-9);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let a = Coordinates::new(48.8566, 2.3522);
        assert_relative_eq!(haversine_km(a, a), 0.0);
    }

    #[test]
    fn test_haversine_antipodal_is_half_circumference() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        assert_relative_eq!(
            haversine_km(a, b),
            std::f64::consts::PI * EARTH_RADIUS_KM,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_haversine_antipodal_pair_is_finite() {
        // This pair rounds h slightly past 1 without the clamp
        let a = Coordinates::new(-12.0, 77.0);
        let b = Coordinates::new(12.0, -103.0);

        let distance = haversine_km(a, b);
        assert!(distance.is_finite());
        assert_relative_eq!(
            distance,
            std::f64::consts::PI * EARTH_RADIUS_KM,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_time_offset() {
        let a = Coordinates::new(0.0, 0.0);
        assert_eq!(time_offset_hours(a, Coordinates::new(0.0, 180.0)), 12);
        assert_eq!(time_offset_hours(a, Coordinates::new(0.0, 15.0)), 1);
        assert_eq!(time_offset_hours(a, Coordinates::new(0.0, -15.0)), 1);
        assert_eq!(time_offset_hours(a, Coordinates::new(0.0, 7.0)), 0);
        assert_eq!(time_offset_hours(a, a), 0);
    }

    #[test]
    fn test_hemisphere_labels() {
        let nyc = hemisphere(Coordinates::new(40.7128, -74.0060));
        assert_eq!(nyc.lat, LatHemisphere::Northern);
        assert_eq!(nyc.lon, LonHemisphere::Western);
        assert_eq!(nyc.to_string(), "Northern & Western");

        let sydney = hemisphere(Coordinates::new(-33.8688, 151.2093));
        assert_eq!(sydney.to_string(), "Southern & Eastern");
    }

    #[test]
    fn test_hemisphere_zero_is_non_negative_branch() {
        let origin = hemisphere(Coordinates::new(0.0, 0.0));
        assert_eq!(origin.lat, LatHemisphere::Northern);
        assert_eq!(origin.lon, LonHemisphere::Eastern);
    }
}
