//! Coordinate type and spherical geometry
//!
//! This module handles:
//! - The `Coordinates` value type and longitude normalization
//! - Antipode computation
//! - Great-circle (geodesic) path sampling
//! - Derived metrics (distance, time offset, hemispheres)

pub mod antipode;
pub mod geodesic;
pub mod metrics;
pub mod report;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in degrees
///
/// Immutable value type; every operation returns a new value. Canonical
/// ranges are lat in [-90, 90] and lon in (-180, 180], with +180 the
/// single representative of the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validate that coordinates are finite and within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Coordinates must be finite, got ({}, {})",
                self.lat, self.lon
            )));
        }
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lon < -180.0 || self.lon > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

/// Normalize a longitude into the canonical (-180, 180] range
///
/// Handles inputs arbitrarily far outside the range. The antimeridian has
/// a single representative: -180 maps to +180.
pub fn normalize_longitude(lon: f64) -> f64 {
    let x = ((lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;
    if x == -180.0 {
        180.0
    } else {
        x
    }
}
