//! Human-readable text output formatter

use crate::config::Config;
use crate::coord::report::AntipodeReport;
use crate::error::Result;
use crate::format::OutputFormatter;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &AntipodeReport, _config: &Config) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&format!("antipodal lookup ({})\n", report.id));
        output.push_str(&format!(
            "Origin:   ({:.6}, {:.6})  {}\n",
            report.origin.lat, report.origin.lon, report.origin_hemisphere
        ));
        output.push_str(&format!(
            "Antipode: ({:.6}, {:.6})  {}\n",
            report.antipode.lat, report.antipode.lon, report.antipode_hemisphere
        ));
        output.push('\n');

        output.push_str(&format!(
            "Great-circle distance: {:.0} km\n",
            report.distance_km
        ));
        output.push_str(&format!(
            "Approx. time offset:   ~{}h\n",
            report.time_offset_hours
        ));

        if let Some(path) = &report.path {
            output.push_str(&format!("Geodesic path:         {} samples\n", path.len()));
        }

        Ok(output)
    }
}
