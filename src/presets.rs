//! Preset locations
//!
//! Well-known cities for quick lookups without geocoding.

use crate::coord::Coordinates;
use serde::Serialize;

/// A named preset location
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub coords: Coordinates,
}

/// Built-in preset locations
pub const PRESETS: [Preset; 8] = [
    Preset {
        name: "New York",
        coords: Coordinates { lat: 40.7128, lon: -74.006 },
    },
    Preset {
        name: "London",
        coords: Coordinates { lat: 51.5074, lon: -0.1278 },
    },
    Preset {
        name: "Tokyo",
        coords: Coordinates { lat: 35.6762, lon: 139.6503 },
    },
    Preset {
        name: "Sydney",
        coords: Coordinates { lat: -33.8688, lon: 151.2093 },
    },
    Preset {
        name: "Paris",
        coords: Coordinates { lat: 48.8566, lon: 2.3522 },
    },
    Preset {
        name: "Dubai",
        coords: Coordinates { lat: 25.2048, lon: 55.2708 },
    },
    Preset {
        name: "Singapore",
        coords: Coordinates { lat: 1.3521, lon: 103.8198 },
    },
    Preset {
        name: "Moscow",
        coords: Coordinates { lat: 55.7558, lon: 37.6173 },
    },
];

/// Look up a preset by name, case-insensitively
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
