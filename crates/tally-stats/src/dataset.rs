use std::cell::OnceCell;

use crate::{
    confidence::{self, ConfidenceLevel},
    error::StatsError,
    order::{self, MIN_QUARTILE_SAMPLES},
    outliers::{self, OutlierPolicy},
    summary::FiveNumberSummary,
};

/// Lazily computed scalars derived from the samples.
///
/// Each cell is filled by the one query that computes its value and is
/// discarded as a whole when the dataset is reinitialized.
#[derive(Debug, Clone, Default)]
struct DerivedCache {
    mean: OnceCell<f64>,
    median: OnceCell<f64>,
    std_dev: OnceCell<f64>,
}

/// A collection of real-valued samples and the statistics derived from it.
///
/// The samples are kept twice: in the order they were given and sorted in
/// ascending order. Order statistics read the sorted view, everything else
/// reads the original order. The mean, median and standard deviation are
/// memoized on first use.
///
/// A `Dataset` is not [`Sync`]; wrap it in a lock to share it across threads.
///
/// # Examples
///
/// ```
/// use tally_stats::{dataset::Dataset, outliers::OutlierPolicy};
///
/// let dataset = Dataset::from_values([-2.0, 12.5, 5.8, 99.1, 13.0, 8.0]);
/// assert_eq!(dataset.len(), 6);
/// assert_eq!(dataset.median().unwrap(), 10.25);
/// assert_eq!(dataset.find_outliers(OutlierPolicy::Iqr).unwrap(), vec![99.1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<f64>,
    sorted_samples: Vec<f64>,
    cache: DerivedCache,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset initialized with `values`.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut dataset = Self::new();
        dataset.init(values);
        dataset
    }

    /// Replaces the samples with `values`.
    ///
    /// All previously memoized statistics are discarded. No validation takes
    /// place here; each query checks the sample count it needs.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_stats::dataset::Dataset;
    ///
    /// let mut dataset = Dataset::from_values([1.0, 2.0, 3.0]);
    /// assert_eq!(dataset.mean().unwrap(), 2.0);
    ///
    /// dataset.init([10.0, 20.0]);
    /// assert_eq!(dataset.mean().unwrap(), 15.0);
    /// ```
    pub fn init<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let samples = values.into_iter().collect::<Vec<_>>();
        let sorted_samples = order::sort_samples(&samples);
        *self = Self {
            samples,
            sorted_samples,
            cache: DerivedCache::default(),
        };
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the dataset holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples in the order they were given.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the samples sorted in ascending order.
    #[must_use]
    pub fn sorted_samples(&self) -> &[f64] {
        &self.sorted_samples
    }

    fn ensure_not_empty(&self) -> Result<(), StatsError> {
        if self.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        Ok(())
    }

    fn ensure_at_least(&self, required: usize) -> Result<(), StatsError> {
        let actual = self.len();
        if actual < required {
            return Err(StatsError::InsufficientData { required, actual });
        }
        Ok(())
    }

    /// Returns the sum of the samples, accumulated in their original order.
    pub fn sum(&self) -> Result<f64, StatsError> {
        self.ensure_not_empty()?;
        Ok(self.samples.iter().sum())
    }

    /// Returns the arithmetic mean.
    #[expect(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Result<f64, StatsError> {
        if let Some(mean) = self.cache.mean.get() {
            return Ok(*mean);
        }
        let mean = self.sum()? / self.len() as f64;
        Ok(*self.cache.mean.get_or_init(|| mean))
    }

    /// Returns the difference between the largest and the smallest sample.
    pub fn range(&self) -> Result<f64, StatsError> {
        self.ensure_not_empty()?;
        let (min, max) = self
            .samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });
        Ok(max - min)
    }

    /// Returns the most frequent sample.
    ///
    /// When several values share the highest frequency, the smallest of them
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_stats::dataset::Dataset;
    ///
    /// let dataset = Dataset::from_values([3.0, 1.0, 3.0, 1.0, 2.0]);
    /// assert_eq!(dataset.mode().unwrap(), 1.0);
    /// ```
    pub fn mode(&self) -> Result<f64, StatsError> {
        self.ensure_not_empty()?;

        // Equal values are adjacent in the sorted view, so each run is one
        // distinct value with its frequency, visited in ascending order.
        let mut best_value = self.sorted_samples[0];
        let mut best_count = 0;
        for run in self.sorted_samples.chunk_by(|a, b| a == b) {
            if run.len() > best_count {
                best_count = run.len();
                best_value = run[0];
            }
        }
        Ok(best_value)
    }

    /// Returns the median.
    ///
    /// For an even number of samples this is the average of the two central
    /// values.
    pub fn median(&self) -> Result<f64, StatsError> {
        if let Some(median) = self.cache.median.get() {
            return Ok(*median);
        }
        let median =
            order::median_of_sorted(&self.sorted_samples).ok_or(StatsError::EmptyDataset)?;
        Ok(*self.cache.median.get_or_init(|| median))
    }

    /// Returns the population standard deviation.
    ///
    /// The squared deviations are divided by the number of samples, not by
    /// one less than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_stats::dataset::Dataset;
    ///
    /// let dataset = Dataset::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(dataset.stdev().unwrap(), 2.0_f64.sqrt());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn stdev(&self) -> Result<f64, StatsError> {
        if let Some(std_dev) = self.cache.std_dev.get() {
            return Ok(*std_dev);
        }
        let mean = self.mean()?;
        let variance = self
            .samples
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / self.len() as f64;
        let std_dev = variance.sqrt();
        Ok(*self.cache.std_dev.get_or_init(|| std_dev))
    }

    /// Returns the first and third quartiles as `(q1, q3)`.
    ///
    /// See [`order::quartiles_of_sorted`] for how the halves are chosen.
    pub fn quartiles(&self) -> Result<(f64, f64), StatsError> {
        order::quartiles_of_sorted(&self.sorted_samples)
    }

    /// Returns the interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> Result<f64, StatsError> {
        let (q1, q3) = self.quartiles()?;
        Ok(q3 - q1)
    }

    /// Returns the samples classified as outliers by `policy`, in their
    /// original order.
    ///
    /// A value that occurs several times is reported every time.
    pub fn find_outliers(&self, policy: OutlierPolicy) -> Result<Vec<f64>, StatsError> {
        match policy {
            OutlierPolicy::StdDev => {
                let mean = self.mean()?;
                let std_dev = self.stdev()?;
                Ok(outliers::std_dev_outliers(&self.samples, mean, std_dev))
            }
            OutlierPolicy::Iqr => {
                let (q1, q3) = self.quartiles()?;
                Ok(outliers::iqr_outliers(&self.samples, q1, q3))
            }
        }
    }

    /// Returns the confidence interval of the mean as `(lower, upper)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_stats::{confidence::ConfidenceLevel, dataset::Dataset};
    ///
    /// let dataset = Dataset::from_values([11.8, 18.5, 15.6, 21.2, 19.4, 16.0, 15.0]);
    /// let (lower, upper) = dataset.confidence_interval(ConfidenceLevel::Pct95).unwrap();
    /// assert!((lower - 14.629).abs() < 1e-3);
    /// assert!((upper - 18.942).abs() < 1e-3);
    /// ```
    pub fn confidence_interval(&self, level: ConfidenceLevel) -> Result<(f64, f64), StatsError> {
        let mean = self.mean()?;
        let std_dev = self.stdev()?;
        Ok(confidence::interval_around_mean(
            mean,
            std_dev,
            self.len(),
            level,
        ))
    }

    /// Returns the z-score of `value` relative to this dataset's mean and
    /// population standard deviation.
    ///
    /// To score against another distribution use [`confidence::z_score`].
    pub fn standard_score(&self, value: f64) -> Result<f64, StatsError> {
        Ok(confidence::z_score(self.mean()?, self.stdev()?, value))
    }

    /// Returns the five-number summary.
    pub fn summary(&self) -> Result<FiveNumberSummary, StatsError> {
        self.ensure_at_least(MIN_QUARTILE_SAMPLES)?;
        let (q1, q3) = self.quartiles()?;
        Ok(FiveNumberSummary {
            min: self.sorted_samples[0],
            q1,
            median: self.median()?,
            q3,
            max: self.sorted_samples[self.sorted_samples.len() - 1],
        })
    }
}
