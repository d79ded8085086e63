//! Great-circle path sampling
//!
//! Spherical linear interpolation between two coordinates, producing an
//! ordered sequence of points on the minor great-circle arc. Consumers
//! use the sequence to draw curved connectors on a 2-D map projection.

use crate::coord::{normalize_longitude, Coordinates};
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Default number of path segments
pub const DEFAULT_PATH_POINTS: usize = 100;

/// sin(d) below this is treated as degenerate (coincident or antipodal)
const DEGENERATE_EPSILON: f64 = 1e-10;

/// Sample the great-circle arc between two coordinates
///
/// Returns `num_points + 1` samples, inclusive of both endpoints. The
/// first sample equals `from` and the last equals `to` within
/// floating-point tolerance; intermediate samples advance monotonically
/// along the arc.
///
/// Degenerate inputs are legitimate and never produce NaN:
/// - coincident endpoints yield `num_points + 1` copies of `from`;
/// - antipodal endpoints have no unique connecting arc, so the path
///   follows the great circle in the plane of the start point's meridian
///   (crossing the nearest pole); when the start point is itself a pole,
///   the reference axis falls back to the equator/prime-meridian
///   intersection.
///
/// # Errors
/// `InvalidPointCount` when `num_points` is zero, `InvalidCoordinates`
/// when either endpoint has a non-finite component.
pub fn geodesic_path(
    from: Coordinates,
    to: Coordinates,
    num_points: usize,
) -> Result<Vec<Coordinates>> {
    if num_points == 0 {
        return Err(Error::InvalidPointCount(
            "num_points must be at least 1".to_string(),
        ));
    }
    for c in [from, to] {
        if !c.lat.is_finite() || !c.lon.is_finite() {
            return Err(Error::InvalidCoordinates(format!(
                "Path endpoints must be finite, got ({}, {})",
                c.lat, c.lon
            )));
        }
    }

    let lat1 = from.lat.to_radians();
    let lon1 = from.lon.to_radians();
    let lat2 = to.lat.to_radians();
    let lon2 = to.lon.to_radians();

    let d = central_angle(lat1, lon1, lat2, lon2);

    if d.sin().abs() < DEGENERATE_EPSILON {
        // sin(d) vanishes at both d = 0 and d = pi
        return Ok(if d < PI / 2.0 {
            vec![from; num_points + 1]
        } else {
            antipodal_path(from, num_points)
        });
    }

    let u = to_unit_vector(lat1, lon1);
    let v = to_unit_vector(lat2, lon2);
    let sin_d = d.sin();

    let mut points = Vec::with_capacity(num_points + 1);
    for i in 0..=num_points {
        let f = i as f64 / num_points as f64;
        let a = ((1.0 - f) * d).sin() / sin_d;
        let b = (f * d).sin() / sin_d;
        let blended = [
            a * u[0] + b * v[0],
            a * u[1] + b * v[1],
            a * u[2] + b * v[2],
        ];
        points.push(from_unit_vector(blended));
    }

    Ok(points)
}

/// Central angle between two points (haversine, angular form)
fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let h = ((lat1 - lat2) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon1 - lon2) / 2.0).sin().powi(2);
    // sqrt can creep past 1 through rounding; asin would return NaN
    2.0 * h.sqrt().min(1.0).asin()
}

/// Convert radian lat/lon to a unit vector on the sphere
fn to_unit_vector(lat: f64, lon: f64) -> [f64; 3] {
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// Convert a 3-D vector back to degree coordinates
fn from_unit_vector(v: [f64; 3]) -> Coordinates {
    let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
    let lon = v[1].atan2(v[0]);
    Coordinates::new(lat.to_degrees(), normalize_longitude(lon.to_degrees()))
}

/// Path between exact antipodes
///
/// Every great circle through a point also passes through its antipode,
/// so the arc is underdetermined. This picks the circle in the plane
/// spanned by the start vector and the polar axis and walks half of it,
/// which routes the path along the start point's meridian over the pole.
fn antipodal_path(from: Coordinates, num_points: usize) -> Vec<Coordinates> {
    let u = to_unit_vector(from.lat.to_radians(), from.lon.to_radians());

    // Reference axis: polar, unless the start point sits on it
    let axis = if u[2].abs() > 1.0 - 1e-9 {
        [1.0, 0.0, 0.0]
    } else {
        [0.0, 0.0, 1.0]
    };

    // Component of the axis orthogonal to u, normalized: the tangent
    // direction at f = 0 and the midpoint of the arc at f = 1/2
    let dot = axis[0] * u[0] + axis[1] * u[1] + axis[2] * u[2];
    let mut w = [
        axis[0] - dot * u[0],
        axis[1] - dot * u[1],
        axis[2] - dot * u[2],
    ];
    let norm = (w[0] * w[0] + w[1] * w[1] + w[2] * w[2]).sqrt();
    w = [w[0] / norm, w[1] / norm, w[2] / norm];

    let mut points = Vec::with_capacity(num_points + 1);
    for i in 0..=num_points {
        let f = i as f64 / num_points as f64;
        let (sin_t, cos_t) = (PI * f).sin_cos();
        let v = [
            cos_t * u[0] + sin_t * w[0],
            cos_t * u[1] + sin_t * w[1],
            cos_t * u[2] + sin_t * w[2],
        ];
        points.push(from_unit_vector(v));
    }
    points
}
