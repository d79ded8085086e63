//! Antipode report assembly
//!
//! Bundles a single lookup into the response consumed by the formatters
//! and the HTTP API: the coordinate pair, derived metrics, and an
//! optional geodesic path.

use crate::coord::antipode::antipode;
use crate::coord::geodesic::geodesic_path;
use crate::coord::metrics::{haversine_km, hemisphere, time_offset_hours, Hemisphere};
use crate::coord::Coordinates;
use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full result of one antipode lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntipodeReport {
    /// Unique ID for this lookup
    pub id: String,

    /// The queried point
    pub origin: Coordinates,

    /// Its antipode
    pub antipode: Coordinates,

    /// Great-circle distance between the pair in kilometers
    pub distance_km: f64,

    /// Approximate time-zone offset in whole hours
    pub time_offset_hours: i64,

    /// Hemispheres of the origin
    pub origin_hemisphere: Hemisphere,

    /// Hemispheres of the antipode
    pub antipode_hemisphere: Hemisphere,

    /// Sampled geodesic path from origin to antipode, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Coordinates>>,

    /// When this report was generated (RFC 3339)
    pub generated_at: String,
}

/// Build a report for one origin coordinate
///
/// The origin must be a valid geographic coordinate. The pair is
/// antipodal by construction, so a requested path always takes the
/// deterministic meridian-plane route of the geodesic sampler.
pub fn build_report(
    origin: Coordinates,
    path_points: usize,
    include_path: bool,
) -> Result<AntipodeReport> {
    origin.validate()?;

    let opposite = antipode(origin);
    let path = if include_path {
        Some(geodesic_path(origin, opposite, path_points)?)
    } else {
        None
    };

    Ok(AntipodeReport {
        id: Uuid::new_v4().to_string(),
        origin,
        antipode: opposite,
        distance_km: haversine_km(origin, opposite),
        time_offset_hours: time_offset_hours(origin, opposite),
        origin_hemisphere: hemisphere(origin),
        antipode_hemisphere: hemisphere(opposite),
        path,
        generated_at: Utc::now().to_rfc3339(),
    })
}
