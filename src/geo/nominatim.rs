//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for geocoding.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::constants::api::NOMINATIM_URL;
use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use serde::Deserialize;

const USER_AGENT: &str = "antipodal/0.1.0";

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimBackend {
    /// Create a new Nominatim backend
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Parse lat/lon strings to f64
    fn parse_coords(lat: &str, lon: &str) -> Result<(f64, f64)> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid latitude: {}", lat)))?;
        let lon: f64 = lon
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid longitude: {}", lon)))?;
        Ok((lat, lon))
    }
}

impl Default for NominatimBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoBackend for NominatimBackend {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            NOMINATIM_URL,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse Nominatim response: {}", e)))?;

        if let Some(result) = results.into_iter().next() {
            let (lat, lon) = Self::parse_coords(&result.lat, &result.lon)?;
            Ok(Some(GeoLocation {
                lat,
                lon,
                display_name: result.display_name,
            }))
        } else {
            Ok(None)
        }
    }

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Option<GeoLocation>> {
        let url = format!("{}/reverse?lat={}&lon={}&format=json", NOMINATIM_URL, lat, lon);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            return Err(Error::Geo(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let result: NominatimResult = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse Nominatim response: {}", e)))?;

        let (parsed_lat, parsed_lon) = Self::parse_coords(&result.lat, &result.lon)?;
        Ok(Some(GeoLocation {
            lat: parsed_lat,
            lon: parsed_lon,
            display_name: result.display_name,
        }))
    }
}
