// Temperature series domain model - owned readings and the statistics over them
use super::error::SeriesError;
use super::summary::SummaryStatistics;

/// Lowest physically valid reading, inclusive.
pub const ABSOLUTE_ZERO: f64 = -273.0;

/// Fails on the first value that is NaN or below `lower_bound`.
pub fn check_lower_bound(values: &[f64], lower_bound: f64) -> Result<(), SeriesError> {
    match values
        .iter()
        .find(|value| value.is_nan() || **value < lower_bound)
    {
        Some(&value) => {
            tracing::debug!(
                "Rejected temperature {} below lower bound {}",
                value,
                lower_bound
            );
            Err(SeriesError::InvalidTemperature { value, lower_bound })
        }
        None => Ok(()),
    }
}

/// A series bound must be a number no lower than [`ABSOLUTE_ZERO`].
pub fn check_series_bound(lower_bound: f64) -> Result<(), SeriesError> {
    if lower_bound.is_nan() || lower_bound < ABSOLUTE_ZERO {
        return Err(SeriesError::InvalidLowerBound { lower_bound });
    }
    Ok(())
}

/// An ordered, growable sequence of temperature readings.
///
/// Every reading is at least [`lower_bound`](Self::lower_bound). The series
/// only grows through [`append`](Self::append); readings are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    readings: Vec<f64>,
    lower_bound: f64,
}

impl Default for TemperatureSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureSeries {
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
            lower_bound: ABSOLUTE_ZERO,
        }
    }

    /// Validate and copy `initial` into a new series bounded by absolute zero.
    pub fn from_readings(initial: &[f64]) -> Result<Self, SeriesError> {
        Self::with_lower_bound(ABSOLUTE_ZERO, initial)
    }

    /// Like [`from_readings`](Self::from_readings) with a stricter bound.
    pub fn with_lower_bound(lower_bound: f64, initial: &[f64]) -> Result<Self, SeriesError> {
        check_series_bound(lower_bound)?;
        check_lower_bound(initial, lower_bound)?;
        tracing::debug!("Created temperature series with {} readings", initial.len());
        Ok(Self {
            readings: initial.to_vec(),
            lower_bound,
        })
    }

    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Precondition shared by every query.
    pub fn check_not_empty(&self) -> Result<(), SeriesError> {
        if self.readings.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        Ok(())
    }

    /// Check `values` against this series' lower bound without touching the series.
    pub fn validate_lower_bound(&self, values: &[f64]) -> Result<(), SeriesError> {
        check_lower_bound(values, self.lower_bound)
    }

    pub fn average(&self) -> Result<f64, SeriesError> {
        self.check_not_empty()?;
        let sum: f64 = self.readings.iter().sum();
        Ok(sum / self.readings.len() as f64)
    }

    /// Population standard deviation (divides by `n`, not `n - 1`).
    pub fn deviation(&self) -> Result<f64, SeriesError> {
        let mean = self.average()?;
        if self.min()? == self.max()? {
            return Ok(0.0);
        }

        let squared_distance: f64 = self
            .readings
            .iter()
            .map(|reading| (reading - mean).powi(2))
            .sum();
        Ok((squared_distance / self.readings.len() as f64).sqrt())
    }

    pub fn min(&self) -> Result<f64, SeriesError> {
        self.check_not_empty()?;
        Ok(self.readings.iter().copied().fold(f64::INFINITY, f64::min))
    }

    pub fn max(&self) -> Result<f64, SeriesError> {
        self.check_not_empty()?;
        Ok(self
            .readings
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max))
    }

    pub fn find_closest_to_zero(&self) -> Result<f64, SeriesError> {
        self.find_closest_to_value(0.0)
    }

    /// Reading with the smallest distance to `target`.
    ///
    /// When two readings are equally close the larger one wins, so
    /// `[-2.0, 2.0]` yields `2.0` for a target of zero.
    pub fn find_closest_to_value(&self, target: f64) -> Result<f64, SeriesError> {
        self.check_not_empty()?;

        let mut closest = self.readings[0];
        let mut distance = (closest - target).abs();

        for &reading in &self.readings[1..] {
            let candidate = (reading - target).abs();
            if candidate < distance {
                distance = candidate;
                closest = reading;
            } else if candidate == distance && reading > closest {
                closest = reading;
            }
        }

        Ok(closest)
    }

    /// Readings strictly below `threshold`, in insertion order.
    pub fn find_less_than(&self, threshold: f64) -> Result<Vec<f64>, SeriesError> {
        self.check_not_empty()?;
        Ok(self
            .readings
            .iter()
            .copied()
            .filter(|reading| *reading < threshold)
            .collect())
    }

    /// Readings at or above `threshold`, in insertion order.
    ///
    /// Together with [`find_less_than`](Self::find_less_than) this partitions
    /// the series, so the boundary value lands here.
    pub fn find_greater_or_equal(&self, threshold: f64) -> Result<Vec<f64>, SeriesError> {
        self.check_not_empty()?;
        Ok(self
            .readings
            .iter()
            .copied()
            .filter(|reading| *reading >= threshold)
            .collect())
    }

    pub fn summary(&self) -> Result<SummaryStatistics, SeriesError> {
        self.check_not_empty()?;
        Ok(SummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }

    /// Append `values` in order and return the new length.
    ///
    /// Nothing is appended if any value is below the lower bound.
    pub fn append(&mut self, values: &[f64]) -> Result<usize, SeriesError> {
        self.validate_lower_bound(values)?;
        self.readings.extend_from_slice(values);
        tracing::debug!(
            "Appended {} readings, series now holds {}",
            values.len(),
            self.readings.len()
        );
        Ok(self.readings.len())
    }
}
