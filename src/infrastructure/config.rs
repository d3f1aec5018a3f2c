use crate::domain::error::SeriesError;
use crate::domain::temperature_series::{ABSOLUTE_ZERO, TemperatureSeries, check_series_bound};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub series: SeriesSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeriesSettings {
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,
}

fn default_lower_bound() -> f64 {
    ABSOLUTE_ZERO
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            lower_bound: default_lower_bound(),
        }
    }
}

impl SeriesSettings {
    /// Build a series validated against the configured lower bound
    pub fn new_series(&self, readings: &[f64]) -> Result<TemperatureSeries, SeriesError> {
        TemperatureSeries::with_lower_bound(self.lower_bound, readings)
    }
}

impl AnalysisConfig {
    fn validated(self) -> anyhow::Result<Self> {
        check_series_bound(self.series.lower_bound)?;
        Ok(self)
    }
}

/// Load `config/analysis`, falling back to defaults when the file is absent.
pub fn load_analysis_config() -> anyhow::Result<AnalysisConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/analysis").required(false))
        .build()?;

    settings.try_deserialize::<AnalysisConfig>()?.validated()
}

pub fn load_analysis_config_from(name: &str) -> anyhow::Result<AnalysisConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name))
        .build()?;

    settings.try_deserialize::<AnalysisConfig>()?.validated()
}

pub fn parse_analysis_config(toml: &str) -> anyhow::Result<AnalysisConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    settings.try_deserialize::<AnalysisConfig>()?.validated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_config() {
        let config = parse_analysis_config("[series]\nlower_bound = -40.0\n").unwrap();
        assert_eq!(config.series.lower_bound, -40.0);
    }

    #[test]
    fn test_lower_bound_defaults_to_absolute_zero() {
        let config = parse_analysis_config("[series]\n").unwrap();
        assert_eq!(config.series.lower_bound, ABSOLUTE_ZERO);
        assert_eq!(AnalysisConfig::default().series, config.series);
    }

    #[test]
    fn test_invalid_lower_bound_is_rejected() {
        assert!(parse_analysis_config("[series]\nlower_bound = \"cold\"\n").is_err());
    }

    #[test]
    fn test_lower_bound_below_absolute_zero_fails_to_parse() {
        let error = parse_analysis_config("[series]\nlower_bound = -1000.0\n").unwrap_err();
        assert_eq!(
            error.downcast_ref::<SeriesError>(),
            Some(&SeriesError::InvalidLowerBound {
                lower_bound: -1000.0
            })
        );
        assert!(parse_analysis_config("[series]\nlower_bound = nan\n").is_err());
    }

    #[test]
    fn test_load_shipped_config() {
        let name = format!("{}/config/analysis", env!("CARGO_MANIFEST_DIR"));
        let config = load_analysis_config_from(&name).unwrap();
        assert_eq!(config.series.lower_bound, ABSOLUTE_ZERO);
    }

    #[test]
    fn test_load_missing_config_fails() {
        assert!(load_analysis_config_from("config/does_not_exist").is_err());
    }

    #[test]
    fn test_new_series_uses_configured_bound() {
        let settings = SeriesSettings { lower_bound: -40.0 };
        assert!(settings.new_series(&[-41.0]).is_err());

        let series = settings.new_series(&[-40.0, 12.5]).unwrap();
        assert_eq!(series.lower_bound(), -40.0);
        assert_eq!(series.len(), 2);

        let settings = SeriesSettings { lower_bound: -1000.0 };
        assert_eq!(
            settings.new_series(&[-900.0]),
            Err(SeriesError::InvalidLowerBound {
                lower_bound: -1000.0
            })
        );
    }
}
