//! Descriptive statistics over a finite collection of real-valued samples.
//!
//! The central type is [`Dataset`], which owns the samples and answers
//! queries about them:
//!
//! - **Aggregates**: sum, mean, range and mode
//! - **Order statistics**: median, quartiles, interquartile range and the
//!   five-number summary
//! - **Spread**: population standard deviation, z-scores and confidence
//!   intervals of the mean
//! - **Outliers**: by standard deviation or by the interquartile range
//!
//! Every query checks its own precondition and reports a [`StatsError`]
//! when the dataset is too small.
//!
//! # Modules
//!
//! - [`dataset`]: the [`Dataset`] type
//! - [`order`]: median and quartile helpers over sorted slices
//! - [`outliers`]: outlier policies and classification
//! - [`confidence`]: confidence levels and z-scores
//! - [`summary`]: the five-number summary
//!
//! # Examples
//!
//! ```
//! use tally_stats::{ConfidenceLevel, Dataset, OutlierPolicy};
//!
//! let dataset = Dataset::from_values([5.0, 7.0, 2.6, 9.8, 11.0, -121.0, -2.0]);
//!
//! assert_eq!(dataset.median().unwrap(), 5.0);
//! assert!(dataset.find_outliers(OutlierPolicy::StdDev).unwrap().is_empty());
//! assert_eq!(dataset.find_outliers(OutlierPolicy::Iqr).unwrap(), vec![-121.0]);
//!
//! let (lower, upper) = dataset.confidence_interval(ConfidenceLevel::Pct99).unwrap();
//! assert!(lower < dataset.mean().unwrap() && dataset.mean().unwrap() < upper);
//! ```
//!
//! Queries that need quartiles require at least four samples:
//!
//! ```
//! use tally_stats::{Dataset, StatsError};
//!
//! let dataset = Dataset::from_values([1.0, 2.0, 3.0]);
//! assert_eq!(
//!     dataset.summary(),
//!     Err(StatsError::InsufficientData { required: 4, actual: 3 })
//! );
//! ```

pub use self::{
    confidence::{ConfidenceLevel, z_score},
    dataset::Dataset,
    error::StatsError,
    outliers::OutlierPolicy,
    summary::FiveNumberSummary,
};

pub mod confidence;
pub mod dataset;
pub mod order;
pub mod outliers;
pub mod summary;

mod error;
