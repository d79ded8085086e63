//! Server shared state
//!
//! Holds configuration and the external-service clients for the HTTP
//! server. Clients snapshot their API keys at startup; key changes
//! require a restart.

use crate::config::Config;
use crate::elevation::ElevationClient;
use crate::facts::FactsClient;
use crate::weather::WeatherClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    weather: WeatherClient,
    elevation: ElevationClient,
    facts: FactsClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let weather = WeatherClient::new(config.api_keys.openweather.clone());
        let facts = FactsClient::new(config.api_keys.openai.clone());
        Self {
            config: Arc::new(RwLock::new(config)),
            weather,
            elevation: ElevationClient::new(),
            facts,
        }
    }

    /// Weather service client
    pub fn weather(&self) -> &WeatherClient {
        &self.weather
    }

    /// Elevation service client
    pub fn elevation(&self) -> &ElevationClient {
        &self.elevation
    }

    /// Facts service client
    pub fn facts(&self) -> &FactsClient {
        &self.facts
    }

    /// Default number of path segments from config
    pub async fn default_path_points(&self) -> usize {
        self.config.read().await.defaults.path_points
    }
}
