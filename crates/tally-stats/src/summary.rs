use std::fmt;

use serde::{Deserialize, Serialize};

/// The five-number summary of a dataset: minimum, first quartile, median,
/// third quartile and maximum.
///
/// Produced by [`Dataset::summary`](crate::dataset::Dataset::summary). The
/// [`Display`](fmt::Display) implementation renders one `Label: value` line
/// per statistic with two decimal places.
///
/// # Examples
///
/// ```
/// use tally_stats::dataset::Dataset;
///
/// let dataset = Dataset::from_values([5.0, 7.7, 2.8, -3.0, 12.5, 3.8, 9.6, 2.0]);
/// let summary = dataset.summary().unwrap();
/// assert_eq!(
///     summary.to_string(),
///     "Min: -3.00\nQ1: 2.40\nMedian: 4.40\nQ3: 8.65\nMax: 12.50"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Labels of the statistics in summary order.
    pub const LABELS: [&'static str; 5] = ["Min", "Q1", "Median", "Q3", "Max"];

    /// Returns the five values in summary order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

impl fmt::Display for FiveNumberSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in Self::LABELS.iter().zip(self.as_array()).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {value:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FiveNumberSummary {
        FiveNumberSummary {
            min: 1.0,
            q1: 1.5,
            median: 3.0,
            q3: 4.5,
            max: 5.0,
        }
    }

    #[test]
    fn test_as_array_order() {
        assert_eq!(sample().as_array(), [1.0, 1.5, 3.0, 4.5, 5.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Min: 1.00\nQ1: 1.50\nMedian: 3.00\nQ3: 4.50\nMax: 5.00"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "min": 1.0,
                "q1": 1.5,
                "median": 3.0,
                "q3": 4.5,
                "max": 5.0,
            })
        );
        let back: FiveNumberSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
