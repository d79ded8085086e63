//! GPX output formatter

use crate::config::Config;
use crate::coord::report::AntipodeReport;
use crate::error::Result;
use crate::format::OutputFormatter;

/// GPX formatter - outputs waypoints plus an optional path track
pub struct GpxFormatter;

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoints and path track"
    }

    fn format(&self, report: &AntipodeReport, _config: &Config) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="antipodal">"#);
        gpx.push('\n');

        // Metadata
        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!("    <name>antipodal lookup {}</name>\n", report.id));
        gpx.push_str(&format!("    <time>{}</time>\n", report.generated_at));
        gpx.push_str("  </metadata>\n");

        // Origin waypoint
        gpx.push_str(&format!(
            r#"  <wpt lat="{}" lon="{}">"#,
            report.origin.lat, report.origin.lon
        ));
        gpx.push('\n');
        gpx.push_str("    <name>Origin</name>\n");
        gpx.push_str(&format!(
            "    <desc>{} hemisphere</desc>\n",
            report.origin_hemisphere
        ));
        gpx.push_str("  </wpt>\n");

        // Antipode waypoint
        gpx.push_str(&format!(
            r#"  <wpt lat="{}" lon="{}">"#,
            report.antipode.lat, report.antipode.lon
        ));
        gpx.push('\n');
        gpx.push_str("    <name>Antipode</name>\n");
        gpx.push_str(&format!(
            "    <desc>{} hemisphere, {:.0} km away</desc>\n",
            report.antipode_hemisphere, report.distance_km
        ));
        gpx.push_str("  </wpt>\n");

        // Geodesic path as a track
        if let Some(path) = &report.path {
            gpx.push_str("  <trk>\n");
            gpx.push_str("    <name>Geodesic path</name>\n");
            gpx.push_str("    <trkseg>\n");
            for point in path {
                gpx.push_str(&format!(
                    "      <trkpt lat=\"{}\" lon=\"{}\"/>\n",
                    point.lat, point.lon
                ));
            }
            gpx.push_str("    </trkseg>\n");
            gpx.push_str("  </trk>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}
