//! Elevation proxy client
//!
//! Looks up terrain elevation from the free Open-Elevation API.

use crate::constants::api::OPEN_ELEVATION_URL;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Open-Elevation lookup response
#[derive(Debug, Deserialize)]
struct ElevationResponse {
    results: Vec<ElevationResult>,
}

#[derive(Debug, Deserialize)]
struct ElevationResult {
    elevation: f64,
}

/// Open-Elevation client
#[derive(Debug, Clone, Default)]
pub struct ElevationClient {
    client: reqwest::Client,
}

impl ElevationClient {
    /// Create a new elevation client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch elevation in whole meters for a coordinate
    ///
    /// Returns None when the API has no data for the location.
    pub async fn fetch(&self, coords: Coordinates) -> Result<Option<i64>> {
        let url = format!("{}?locations={},{}", OPEN_ELEVATION_URL, coords.lat, coords.lon);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Elevation(format!("Elevation request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Elevation(format!(
                "Elevation API returned status: {}",
                response.status()
            )));
        }

        let data: ElevationResponse = response
            .json()
            .await
            .map_err(|e| Error::Elevation(format!("Failed to parse elevation response: {}", e)))?;

        Ok(data.results.first().map(|r| r.elevation.round() as i64))
    }
}
