//! URL output formatter

use crate::config::Config;
use crate::coord::report::AntipodeReport;
use crate::error::Result;
use crate::format::OutputFormatter;

/// URL formatter - outputs map URLs for the origin and its antipode
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URLs with optional provider override
    pub fn format_with_provider(
        &self,
        report: &AntipodeReport,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        let origin = config.format_url(provider, report.origin.lat, report.origin.lon)?;
        let antipode = config.format_url(provider, report.antipode.lat, report.antipode.lon)?;
        Ok(format!("Origin:   {}\nAntipode: {}\n", origin, antipode))
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URLs for both points"
    }

    fn format(&self, report: &AntipodeReport, config: &Config) -> Result<String> {
        self.format_with_provider(report, config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::report::build_report;
    use crate::coord::Coordinates;

    fn create_test_report() -> AntipodeReport {
        build_report(Coordinates::new(40.7128, -74.0060), 10, false).unwrap()
    }

    #[test]
    fn test_url_format_default_provider() {
        let formatter = UrlFormatter;
        let report = create_test_report();
        let config = Config::default();

        let output = formatter.format(&report, &config).unwrap();

        // Default provider is Google, one URL per point
        assert_eq!(output.matches("google.com/maps").count(), 2);
        assert!(output.contains("-74.006"));
        assert!(output.contains("105.994"));
    }

    #[test]
    fn test_url_format_with_provider() {
        let formatter = UrlFormatter;
        let report = create_test_report();
        let config = Config::default();

        let output = formatter
            .format_with_provider(&report, &config, Some("openstreetmap"))
            .unwrap();

        assert_eq!(output.matches("openstreetmap.org").count(), 2);
    }

    #[test]
    fn test_url_format_unknown_provider() {
        let formatter = UrlFormatter;
        let report = create_test_report();
        let config = Config::default();

        assert!(formatter
            .format_with_provider(&report, &config, Some("unknown"))
            .is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter;
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
