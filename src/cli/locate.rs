//! Locate command handler
//!
//! Computes the antipode report for a position given on the command line.

use crate::config::Config;
use crate::coord::report::build_report;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::format::{available_formats, get_formatter};
use crate::geo::{get_geocoder, get_ip_locator, GeoBackend};
use crate::presets::{find_preset, PRESETS};
use clap::Args;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// Latitude
    #[arg(long)]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long)]
    pub lon: Option<f64>,

    /// Named location (geocoded)
    #[arg(long, conflicts_with_all = ["lat", "lon", "here", "preset"])]
    pub location: Option<String>,

    /// Use current location (IP geolocation)
    #[arg(long, conflicts_with_all = ["lat", "lon", "location", "preset"])]
    pub here: bool,

    /// Built-in preset location ("Tokyo", "New York", ...)
    #[arg(long, conflicts_with_all = ["lat", "lon", "location", "here"])]
    pub preset: Option<String>,

    /// Number of geodesic path segments
    #[arg(long, short = 'n')]
    pub path_points: Option<usize>,

    /// Include the sampled geodesic path in the report
    #[arg(long)]
    pub include_path: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,

    /// List available presets
    #[arg(short = 'P', long = "list-presets")]
    pub list_presets: bool,
}

/// Run the locate command
pub async fn run(args: LocateArgs) -> Result<()> {
    // Handle list flags first
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    if args.list_presets {
        list_presets();
        return Ok(());
    }

    // Load config
    let config = Config::load()?;

    // Determine origin
    let origin = if args.here {
        let ip_locator = get_ip_locator();
        let location = ip_locator.locate().await?;
        eprintln!("Using IP location: {}", location.display_name);
        Coordinates::new(location.lat, location.lon)
    } else if let Some(location_query) = &args.location {
        let geocoder = get_geocoder();
        match geocoder.geocode(location_query).await? {
            Some(location) => {
                eprintln!("Geocoded to: {}", location.display_name);
                Coordinates::new(location.lat, location.lon)
            }
            None => {
                eprintln!("Error: Could not geocode '{}'", location_query);
                std::process::exit(1);
            }
        }
    } else if let Some(name) = &args.preset {
        match find_preset(name) {
            Some(preset) => preset.coords,
            None => {
                eprintln!("Error: Unknown preset '{}'. See --list-presets", name);
                std::process::exit(1);
            }
        }
    } else if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        Coordinates::new(lat, lon)
    } else if config.location.default_here {
        let ip_locator = get_ip_locator();
        let location = ip_locator.locate().await?;
        eprintln!("Using IP location: {}", location.display_name);
        Coordinates::new(location.lat, location.lon)
    } else {
        eprintln!("Error: No location specified. Use --lat/--lon, --location, --preset, or --here");
        std::process::exit(1);
    };

    // Get parameters with config defaults
    let path_points = args.path_points.unwrap_or(config.defaults.path_points);
    let format = args.format.unwrap_or(config.defaults.format.clone());

    // The GPX track needs the path regardless of the flag
    let include_path = args.include_path || format.eq_ignore_ascii_case("gpx");

    // Build the report (validates the origin)
    let report = build_report(origin, path_points, include_path)?;

    // Format output
    let formatter = get_formatter(&format)
        .ok_or_else(|| crate::error::Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&report, &config)?;

    // Write output
    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

/// Print available preset locations
fn list_presets() {
    println!("Available presets:");
    for preset in &PRESETS {
        println!(
            "  {:10} ({:.4}, {:.4})",
            preset.name, preset.coords.lat, preset.coords.lon
        );
    }
}
