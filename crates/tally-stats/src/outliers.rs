//! Outlier classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Number of standard deviations from the mean at which a sample becomes an
/// outlier under [`OutlierPolicy::StdDev`].
pub const STD_DEV_FACTOR: f64 = 3.0;

/// Multiple of the interquartile range beyond the quartiles at which a sample
/// becomes an outlier under [`OutlierPolicy::Iqr`].
pub const IQR_FACTOR: f64 = 1.5;

/// The rule used to decide whether a sample is an outlier.
///
/// Policies parse from their names, ignoring case:
///
/// ```
/// use tally_stats::outliers::OutlierPolicy;
///
/// assert_eq!("IQR".parse(), Ok(OutlierPolicy::Iqr));
/// assert_eq!("stdev".parse(), Ok(OutlierPolicy::StdDev));
/// assert!("mad".parse::<OutlierPolicy>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutlierPolicy {
    /// At least three population standard deviations away from the mean.
    #[display("sd")]
    StdDev,
    /// More than 1.5 IQR below the first or above the third quartile.
    #[display("iqr")]
    Iqr,
}

impl OutlierPolicy {
    pub const ALL: [Self; 2] = [Self::StdDev, Self::Iqr];
}

impl FromStr for OutlierPolicy {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sd" | "stdev" | "std-dev" | "stddev" => Ok(Self::StdDev),
            "iqr" => Ok(Self::Iqr),
            _ => Err(StatsError::invalid_argument("outlier policy", s)),
        }
    }
}

/// Selects samples lying at least `STD_DEV_FACTOR` standard deviations from
/// `mean`, keeping their order.
#[must_use]
pub fn std_dev_outliers(samples: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    let threshold = std_dev * STD_DEV_FACTOR;
    samples
        .iter()
        .copied()
        .filter(|v| (v - mean).abs() >= threshold)
        .collect()
}

/// Selects samples strictly outside the Tukey fences built from `q1` and
/// `q3`, keeping their order.
#[must_use]
pub fn iqr_outliers(samples: &[f64], q1: f64, q3: f64) -> Vec<f64> {
    let threshold = (q3 - q1) * IQR_FACTOR;
    let lower = q1 - threshold;
    let upper = q3 + threshold;
    samples
        .iter()
        .copied()
        .filter(|&v| v < lower || v > upper)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("sd".parse(), Ok(OutlierPolicy::StdDev));
        assert_eq!(" Std-Dev ".parse(), Ok(OutlierPolicy::StdDev));
        assert_eq!("iqr".parse(), Ok(OutlierPolicy::Iqr));
        assert_eq!(
            "zscore".parse::<OutlierPolicy>(),
            Err(StatsError::InvalidArgument {
                name: "outlier policy",
                value: "zscore".to_owned()
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for policy in OutlierPolicy::ALL {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }

    #[test]
    fn test_std_dev_outliers_boundary_is_inclusive() {
        // mean 0, std dev 1: |3.0| is exactly on the threshold
        let samples = [3.0, -2.9, -3.5, 0.0, 3.0];
        assert_eq!(std_dev_outliers(&samples, 0.0, 1.0), vec![3.0, -3.5, 3.0]);
    }

    #[test]
    fn test_iqr_outliers_boundary_is_exclusive() {
        // q1 = 0, q3 = 2, fences at -3 and 5
        let samples = [-3.0, -3.1, 5.0, 5.1, 1.0, 5.1];
        assert_eq!(iqr_outliers(&samples, 0.0, 2.0), vec![-3.1, 5.1, 5.1]);
    }
}
