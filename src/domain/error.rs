// Domain errors raised by temperature series operations
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// A reading fell below the lower bound of the series (NaN included).
    #[error("Temperature {value} is below the lower bound of {lower_bound}")]
    InvalidTemperature { value: f64, lower_bound: f64 },

    /// A series bound that is NaN or below absolute zero.
    #[error("Lower bound {lower_bound} is below absolute zero")]
    InvalidLowerBound { lower_bound: f64 },

    /// A query was made against a series holding no readings.
    #[error("Empty temperature series")]
    EmptySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SeriesError::InvalidTemperature {
            value: -290.0,
            lower_bound: -273.0,
        };
        assert_eq!(
            error.to_string(),
            "Temperature -290 is below the lower bound of -273"
        );
        assert_eq!(
            SeriesError::InvalidLowerBound {
                lower_bound: -1000.0
            }
            .to_string(),
            "Lower bound -1000 is below absolute zero"
        );
        assert_eq!(SeriesError::EmptySeries.to_string(), "Empty temperature series");
    }
}
