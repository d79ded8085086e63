//! Error types for antipodal

use thiserror::Error;

/// Main error type for antipodal operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid point count: {0}")]
    InvalidPointCount(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geo error: {0}")]
    Geo(String),

    #[error("Weather error: {0}")]
    Weather(String),

    #[error("Elevation error: {0}")]
    Elevation(String),

    #[error("Facts error: {0}")]
    Facts(String),
}

/// Result type alias for antipodal operations
pub type Result<T> = std::result::Result<T, Error>;
