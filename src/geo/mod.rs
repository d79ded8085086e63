//! Geocoding module
//!
//! Provides geocoding (location name to coordinates) and IP geolocation,
//! standing in for the browser geolocation of a front-end.

pub mod ip_location;
pub mod nominatim;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A geocoded location result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Display name (address or description)
    pub display_name: String,
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a location string to coordinates
    ///
    /// Returns the best match for the query, or None if not found
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<GeoLocation>>> + Send;

    /// Reverse geocode coordinates to a location name
    fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl std::future::Future<Output = Result<Option<GeoLocation>>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder() -> nominatim::NominatimBackend {
    nominatim::NominatimBackend::new()
}

/// Get the IP location service
pub fn get_ip_locator() -> ip_location::IpLocator {
    ip_location::IpLocator::new()
}
