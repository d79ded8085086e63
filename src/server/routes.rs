//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::report::{build_report, AntipodeReport};
use crate::coord::Coordinates;
use crate::error::Error;
use crate::format::available_formats;
use crate::geo::{get_ip_locator, GeoLocation};
use crate::presets::{Preset, PRESETS};
use crate::server::state::AppState;
use crate::weather::WeatherData;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::warn;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then fallback to common locations
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join("static");
            if path.exists() {
                path.to_string_lossy().to_string()
            } else {
                "static".to_string()
            }
        } else {
            "static".to_string()
        }
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/antipode", post(antipode_handler))
        .route("/api/weather", post(weather_handler))
        .route("/api/elevation", post(elevation_handler))
        .route("/api/facts", post(facts_handler))
        .route("/api/location", get(location_handler))
        .route("/api/presets", get(presets_handler))
        .route("/api/status", get(status_handler))
        .route("/api/formats", get(formats_handler))
        .nest_service(
            "/",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// Antipode lookup request body
#[derive(Debug, Deserialize)]
pub struct AntipodeRequest {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Number of geodesic path segments (config default when omitted)
    pub path_points: Option<usize>,
    /// Whether to include the sampled path in the response
    #[serde(default = "default_include_path")]
    pub include_path: bool,
}

fn default_include_path() -> bool {
    true
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidPointCount(_) => "INVALID_POINT_COUNT",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Antipode lookup endpoint
///
/// POST /api/antipode
async fn antipode_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AntipodeRequest>,
) -> Result<Json<AntipodeReport>, ApiError> {
    let origin = Coordinates::new(req.lat, req.lon);
    origin.validate().map_err(ApiError::from)?;

    let path_points = match req.path_points {
        Some(n) => n,
        None => state.default_path_points().await,
    };

    let report = build_report(origin, path_points, req.include_path).map_err(ApiError::from)?;

    Ok(Json(report))
}

/// Request for the paired data panels (weather, elevation, facts)
#[derive(Debug, Deserialize)]
pub struct PairRequest {
    pub user_lat: f64,
    pub user_lon: f64,
    pub antipode_lat: f64,
    pub antipode_lon: f64,
}

impl PairRequest {
    fn user(&self) -> Coordinates {
        Coordinates::new(self.user_lat, self.user_lon)
    }

    fn antipode(&self) -> Coordinates {
        Coordinates::new(self.antipode_lat, self.antipode_lon)
    }

    fn validate(&self) -> Result<(), ApiError> {
        self.user().validate().map_err(ApiError::from)?;
        self.antipode().validate().map_err(ApiError::from)?;
        Ok(())
    }
}

/// Weather for both ends of the pair
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherPairResponse {
    pub user_weather: Option<WeatherData>,
    pub antipode_weather: Option<WeatherData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Weather panel endpoint
///
/// POST /api/weather
///
/// Upstream failures degrade to nulls; the endpoint itself only rejects
/// invalid coordinates.
async fn weather_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PairRequest>,
) -> Result<Json<WeatherPairResponse>, ApiError> {
    req.validate()?;

    if !state.weather().is_configured() {
        return Ok(Json(WeatherPairResponse {
            user_weather: None,
            antipode_weather: None,
            error: Some("Weather API key not configured".to_string()),
        }));
    }

    let (user, antipode) = tokio::join!(
        state.weather().fetch(req.user()),
        state.weather().fetch(req.antipode())
    );

    Ok(Json(WeatherPairResponse {
        user_weather: user.map_err(|e| warn!("User weather fetch failed: {}", e)).ok(),
        antipode_weather: antipode
            .map_err(|e| warn!("Antipode weather fetch failed: {}", e))
            .ok(),
        error: None,
    }))
}

/// Elevation for both ends of the pair
#[derive(Debug, Serialize, Deserialize)]
pub struct ElevationPairResponse {
    pub user_elevation: Option<i64>,
    pub antipode_elevation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Elevation panel endpoint
///
/// POST /api/elevation
async fn elevation_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PairRequest>,
) -> Result<Json<ElevationPairResponse>, ApiError> {
    req.validate()?;

    let (user, antipode) = tokio::join!(
        state.elevation().fetch(req.user()),
        state.elevation().fetch(req.antipode())
    );

    Ok(Json(ElevationPairResponse {
        user_elevation: user
            .map_err(|e| warn!("User elevation fetch failed: {}", e))
            .ok()
            .flatten(),
        antipode_elevation: antipode
            .map_err(|e| warn!("Antipode elevation fetch failed: {}", e))
            .ok()
            .flatten(),
        error: None,
    }))
}

/// Facts response
#[derive(Debug, Serialize, Deserialize)]
pub struct FactsResponse {
    pub facts: Vec<String>,
}

/// Facts panel endpoint
///
/// POST /api/facts
///
/// Always succeeds; generation falls back to the static pool.
async fn facts_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PairRequest>,
) -> Result<Json<FactsResponse>, ApiError> {
    req.validate()?;

    let facts = state.facts().generate(req.user(), req.antipode()).await;
    Ok(Json(FactsResponse { facts }))
}

/// Get current location from IP address
///
/// GET /api/location
async fn location_handler() -> Result<Json<GeoLocation>, ApiError> {
    let locator = get_ip_locator();

    let location = locator.locate().await.map_err(|e| ApiError {
        error: e.to_string(),
        code: "LOCATION_ERROR".to_string(),
    })?;

    Ok(Json(location))
}

/// Presets list response
#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub presets: Vec<Preset>,
}

/// List built-in preset locations
///
/// GET /api/presets
async fn presets_handler() -> Json<PresetsResponse> {
    Json(PresetsResponse {
        presets: PRESETS.to_vec(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    let formats = available_formats()
        .into_iter()
        .map(|f| FormatInfo {
            name: f.name,
            description: f.description,
        })
        .collect();

    Json(FormatsResponse { formats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(crate::config::Config::default()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert!(!status.version.is_empty());
    }

    #[tokio::test]
    async fn test_formats_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/formats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let formats: FormatsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(formats.formats.len(), 4);
    }

    #[tokio::test]
    async fn test_presets_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/presets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let presets: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(presets["presets"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_antipode_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/antipode",
                serde_json::json!({"lat": 40.7128, "lon": -74.0060}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let report: AntipodeReport = serde_json::from_slice(&body).unwrap();

        assert!((report.antipode.lat + 40.7128).abs() < 1e-9);
        assert!((report.antipode.lon - 105.9940).abs() < 1e-9);
        // Config default path length
        assert_eq!(report.path.unwrap().len(), 101);
    }

    #[tokio::test]
    async fn test_antipode_endpoint_without_path() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/antipode",
                serde_json::json!({"lat": 10.0, "lon": 20.0, "include_path": false}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let report: AntipodeReport = serde_json::from_slice(&body).unwrap();

        assert!(report.path.is_none());
    }

    #[tokio::test]
    async fn test_antipode_invalid_coordinates() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/antipode",
                serde_json::json!({"lat": 91.0, "lon": -74.0060}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_antipode_invalid_point_count() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/antipode",
                serde_json::json!({"lat": 40.7128, "lon": -74.0060, "path_points": 0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_POINT_COUNT");
    }

    #[tokio::test]
    async fn test_weather_endpoint_unconfigured() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/weather",
                serde_json::json!({
                    "user_lat": 40.7128,
                    "user_lon": -74.0060,
                    "antipode_lat": -40.7128,
                    "antipode_lon": 105.9940
                }),
            ))
            .await
            .unwrap();

        // Missing API key is a degraded response, not a failure
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let weather: WeatherPairResponse = serde_json::from_slice(&body).unwrap();

        assert!(weather.user_weather.is_none());
        assert!(weather.antipode_weather.is_none());
        assert!(weather.error.is_some());
    }

    #[tokio::test]
    async fn test_weather_endpoint_invalid_coordinates() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/weather",
                serde_json::json!({
                    "user_lat": 200.0,
                    "user_lon": 0.0,
                    "antipode_lat": 0.0,
                    "antipode_lon": 0.0
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_facts_endpoint_fallback() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/facts",
                serde_json::json!({
                    "user_lat": 40.7128,
                    "user_lon": -74.0060,
                    "antipode_lat": -40.7128,
                    "antipode_lon": 105.9940
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let facts: FactsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(facts.facts.len(), crate::facts::FACT_COUNT);
    }
}
