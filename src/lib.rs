// Temperature series analysis - validated readings and descriptive statistics
pub mod domain;
pub mod infrastructure;

pub use domain::error::SeriesError;
pub use domain::summary::SummaryStatistics;
pub use domain::temperature_series::{
    ABSOLUTE_ZERO, TemperatureSeries, check_lower_bound, check_series_bound,
};
pub use infrastructure::config::{
    AnalysisConfig, SeriesSettings, load_analysis_config, load_analysis_config_from,
    parse_analysis_config,
};
pub use infrastructure::logging::init_tracing;
