//! antipodal: Antipode Locator
//!
//! A library and CLI tool for finding the antipode (diametrically
//! opposite point on Earth) of a geographic position, with geodesic
//! path sampling and derived metrics for map display.
//!
//! ## Features
//!
//! - Antipode computation with canonical longitude normalization
//! - Great-circle path sampling (slerp), NaN-free at the degenerate
//!   coincident/antipodal cases
//! - Derived metrics: haversine distance, time-zone offset estimate,
//!   hemisphere labels
//! - Weather / elevation / facts panel proxies with graceful fallback
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use antipodal::coord::antipode::antipode;
//! use antipodal::coord::geodesic::geodesic_path;
//! use antipodal::coord::Coordinates;
//!
//! let nyc = Coordinates::new(40.7128, -74.0060);
//! let opposite = antipode(nyc);
//! assert!((opposite.lat + 40.7128).abs() < 1e-9);
//!
//! // Sample the great-circle arc between the pair for rendering
//! let path = geodesic_path(nyc, opposite, 100).unwrap();
//! assert_eq!(path.len(), 101);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod elevation;
pub mod error;
pub mod facts;
pub mod format;
pub mod geo;
pub mod presets;
pub mod server;
pub mod weather;

// Re-export commonly used types
pub use config::Config;
pub use coord::report::AntipodeReport;
pub use coord::Coordinates;
pub use error::{Error, Result};
