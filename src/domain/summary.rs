// Summary statistics snapshot of a temperature series
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    average: f64,
    deviation: f64,
    min: f64,
    max: f64,
}

impl SummaryStatistics {
    pub fn new(average: f64, deviation: f64, min: f64, max: f64) -> Self {
        Self {
            average,
            deviation,
            min,
            max,
        }
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    /// Population standard deviation
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg={:.2} dev={:.2} min={:.2} max={:.2}",
            self.average, self.deviation, self.min, self.max
        )
    }
}
