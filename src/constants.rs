//! Centralized constants for the antipodal crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (spherical approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Degrees of longitude spanned by one nominal time-zone hour
    pub const DEGREES_PER_TIMEZONE_HOUR: f64 = 15.0;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";

    /// OpenWeatherMap current conditions API (requires API key)
    pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

    /// Open-Elevation lookup API (free, no key required)
    pub const OPEN_ELEVATION_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

    /// OpenAI chat completions API (requires API key)
    pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
}

/// Cache settings
pub mod cache {
    /// IP location cache duration in seconds (1 hour)
    pub const IP_LOCATION_TTL_SECS: u64 = 3600;

    /// IP location cache file name
    pub const IP_LOCATION_CACHE_FILE: &str = "ip_location_cache.json";
}
