//! Confidence levels and standard scores.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// A two-tailed confidence level with its normal critical value.
///
/// Only the three conventional levels are supported. Other levels are
/// rejected when converting from a percent or parsing from a string.
///
/// # Examples
///
/// ```
/// use tally_stats::confidence::ConfidenceLevel;
///
/// let level = ConfidenceLevel::try_from(95_u8).unwrap();
/// assert_eq!(level, ConfidenceLevel::Pct95);
/// assert_eq!(level.z_value(), 1.96);
///
/// assert_eq!("99%".parse(), Ok(ConfidenceLevel::Pct99));
/// assert_eq!("0.90".parse(), Ok(ConfidenceLevel::Pct90));
/// assert!(ConfidenceLevel::try_from(80_u8).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum ConfidenceLevel {
    #[display("90%")]
    Pct90,
    #[display("95%")]
    Pct95,
    #[display("99%")]
    Pct99,
}

impl ConfidenceLevel {
    pub const ALL: [Self; 3] = [Self::Pct90, Self::Pct95, Self::Pct99];

    /// Returns the confidence level in percent.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Pct90 => 90,
            Self::Pct95 => 95,
            Self::Pct99 => 99,
        }
    }

    /// Returns the two-tailed critical z-value for this level.
    #[must_use]
    pub const fn z_value(self) -> f64 {
        match self {
            Self::Pct90 => 1.645,
            Self::Pct95 => 1.96,
            Self::Pct99 => 2.576,
        }
    }
}

impl TryFrom<u8> for ConfidenceLevel {
    type Error = StatsError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|level| level.percent() == percent)
            .ok_or_else(|| StatsError::invalid_argument("confidence level", percent.to_string()))
    }
}

impl From<ConfidenceLevel> for u8 {
    fn from(level: ConfidenceLevel) -> Self {
        level.percent()
    }
}

impl FromStr for ConfidenceLevel {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let level = match trimmed.strip_suffix('%').unwrap_or(trimmed).trim() {
            "90" | "0.9" | "0.90" => Self::Pct90,
            "95" | "0.95" => Self::Pct95,
            "99" | "0.99" => Self::Pct99,
            _ => return Err(StatsError::invalid_argument("confidence level", s)),
        };
        Ok(level)
    }
}

/// Computes the standard score of `value` against a reference distribution.
///
/// The distribution is given explicitly by its `mean` and standard deviation,
/// so any value can be scored against any distribution. A zero `std_dev`
/// yields an infinite or NaN score.
///
/// # Examples
///
/// ```
/// use tally_stats::confidence::z_score;
///
/// assert_eq!(z_score(10.0, 2.0, 13.0), 1.5);
/// assert_eq!(z_score(10.0, 2.0, 6.0), -2.0);
/// assert!(z_score(1.0, 0.0, 2.0).is_infinite());
/// ```
#[must_use]
pub fn z_score(mean: f64, std_dev: f64, value: f64) -> f64 {
    (value - mean) / std_dev
}

/// Computes the interval `mean ± z · std_dev / sqrt(count)`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn interval_around_mean(
    mean: f64,
    std_dev: f64,
    count: usize,
    level: ConfidenceLevel,
) -> (f64, f64) {
    let margin = std_dev / (count as f64).sqrt();
    let half_width = level.z_value() * margin;
    (mean - half_width, mean + half_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_values() {
        assert_eq!(ConfidenceLevel::Pct90.z_value(), 1.645);
        assert_eq!(ConfidenceLevel::Pct95.z_value(), 1.96);
        assert_eq!(ConfidenceLevel::Pct99.z_value(), 2.576);
    }

    #[test]
    fn test_try_from_percent() {
        for level in ConfidenceLevel::ALL {
            assert_eq!(ConfidenceLevel::try_from(level.percent()), Ok(level));
        }
        for percent in [0_u8, 50, 80, 91, 100] {
            let err = ConfidenceLevel::try_from(percent).unwrap_err();
            assert!(err.is_invalid_argument(), "{percent} should be rejected");
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("90".parse(), Ok(ConfidenceLevel::Pct90));
        assert_eq!(" 95 % ".parse(), Ok(ConfidenceLevel::Pct95));
        assert_eq!("0.99".parse(), Ok(ConfidenceLevel::Pct99));
        assert_eq!(
            "97.5".parse::<ConfidenceLevel>(),
            Err(StatsError::InvalidArgument {
                name: "confidence level",
                value: "97.5".to_owned()
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfidenceLevel::Pct95.to_string(), "95%");
        for level in ConfidenceLevel::ALL {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }

    #[test]
    fn test_z_score_against_foreign_distribution() {
        assert_eq!(z_score(0.0, 1.0, 1.96), 1.96);
        assert!(z_score(5.0, 0.0, 5.0).is_nan());
    }

    #[test]
    fn test_interval_is_symmetric() {
        let (lower, upper) = interval_around_mean(10.0, 2.0, 4, ConfidenceLevel::Pct95);
        assert!((lower - 8.04).abs() < 1e-12);
        assert!((upper - 11.96).abs() < 1e-12);
    }
}
