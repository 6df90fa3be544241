//! Order statistics over sorted samples.
//!
//! The helpers in this module operate on slices that are already sorted in
//! ascending order. [`Dataset`](crate::dataset::Dataset) keeps such a slice
//! alongside the samples in their original order and delegates its median and
//! quartile queries here.

use crate::error::StatsError;

/// Minimum number of samples required to compute quartiles.
pub const MIN_QUARTILE_SAMPLES: usize = 4;

/// Returns an ascending copy of `values`.
///
/// Values are ordered with [`f64::total_cmp`], so the result is fully
/// deterministic even in the presence of NaN (which sorts last).
///
/// # Examples
///
/// ```
/// use tally_stats::order::sort_samples;
///
/// assert_eq!(sort_samples(&[6.5, 3.9, 2.0]), vec![2.0, 3.9, 6.5]);
/// ```
#[must_use]
pub fn sort_samples(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Computes the median of the half-open range `[start, end)` of a sorted slice.
///
/// The middle index is taken relative to the whole slice, not to the
/// sub-range: `middle = (start + end) / 2`. When the range holds an even
/// number of values the result is the average of `sorted_values[middle - 1]`
/// and `sorted_values[middle]`, otherwise it is `sorted_values[middle]`.
///
/// # Panics
///
/// Panics if the range is empty or out of bounds.
///
/// # Examples
///
/// ```
/// use tally_stats::order::median_of_range;
///
/// let sorted = [-3.0, 2.0, 2.8, 3.8, 5.0, 7.7, 9.6, 12.5];
/// assert!((median_of_range(&sorted, 0, 4) - 2.4).abs() < 1e-12);
/// assert!((median_of_range(&sorted, 4, 8) - 8.65).abs() < 1e-12);
/// ```
#[must_use]
pub fn median_of_range(sorted_values: &[f64], start: usize, end: usize) -> f64 {
    assert!(
        start < end && end <= sorted_values.len(),
        "invalid range {start}..{end} for {} values",
        sorted_values.len()
    );

    let middle = (start + end) / 2;
    if (end - start) % 2 == 0 {
        (sorted_values[middle] + sorted_values[middle - 1]) / 2.0
    } else {
        sorted_values[middle]
    }
}

/// Computes the median of a sorted slice.
///
/// Returns `None` if the slice is empty.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }
    Some(median_of_range(sorted_values, 0, sorted_values.len()))
}

/// Computes the first and third quartiles of a sorted slice.
///
/// The lower half is `[0, n/2)`. The upper half is `[n/2, n)` when `n` is
/// even and `[n/2 + 1, n)` when `n` is odd, so the middle value of an odd
/// sized dataset belongs to neither half. Each half is reduced with
/// [`median_of_range`].
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] if fewer than
/// [`MIN_QUARTILE_SAMPLES`] values are given.
///
/// # Examples
///
/// ```
/// use tally_stats::order::quartiles_of_sorted;
///
/// let sorted = [-121.0, -2.0, 2.6, 5.0, 7.0, 9.8, 11.0];
/// assert_eq!(quartiles_of_sorted(&sorted).unwrap(), (-2.0, 9.8));
/// ```
pub fn quartiles_of_sorted(sorted_values: &[f64]) -> Result<(f64, f64), StatsError> {
    let n = sorted_values.len();
    if n < MIN_QUARTILE_SAMPLES {
        return Err(StatsError::InsufficientData {
            required: MIN_QUARTILE_SAMPLES,
            actual: n,
        });
    }

    let half = n / 2;
    let q1 = median_of_range(sorted_values, 0, half);
    let upper_start = if n % 2 == 0 { half } else { half + 1 };
    let q3 = median_of_range(sorted_values, upper_start, n);
    Ok((q1, q3))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_sort_samples_keeps_input() {
        let values = [5.0, 7.7, 2.8, -3.0];
        let sorted = sort_samples(&values);
        assert_eq!(sorted, vec![-3.0, 2.8, 5.0, 7.7]);
        assert_eq!(values, [5.0, 7.7, 2.8, -3.0]);
    }

    #[test]
    fn test_sort_samples_nan_last() {
        let sorted = sort_samples(&[1.0, f64::NAN, -1.0]);
        assert_eq!(sorted[..2], [-1.0, 1.0]);
        assert!(sorted[2].is_nan());
    }

    #[test]
    fn test_median_of_range_uses_absolute_middle() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        // [4, 7): middle = 5 -> sorted[5]
        assert_eq!(median_of_range(&sorted, 4, 7), 6.0);
        // [3, 5): middle = 4, even length -> (sorted[4] + sorted[3]) / 2
        assert_eq!(median_of_range(&sorted, 3, 5), 4.5);
        // single element range
        assert_eq!(median_of_range(&sorted, 2, 3), 3.0);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_median_of_range_empty_range_panics() {
        let _ = median_of_range(&[1.0, 2.0], 1, 1);
    }

    #[test]
    fn test_median_of_sorted() {
        assert_eq!(median_of_sorted(&[]), None);
        assert_eq!(median_of_sorted(&[2.0, 3.9, 4.5, 6.5, 12.0]), Some(4.5));
        assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_quartiles_even_count() {
        let sorted = [-3.0, 2.0, 2.8, 3.8, 5.0, 7.7, 9.6, 12.5];
        let (q1, q3) = quartiles_of_sorted(&sorted).unwrap();
        assert!((q1 - 2.4).abs() < EPS);
        assert!((q3 - 8.65).abs() < EPS);
    }

    #[test]
    fn test_quartiles_odd_count_excludes_middle() {
        // n = 5: lower half [0, 2), upper half [3, 5)
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quartiles_of_sorted(&sorted).unwrap(), (1.5, 4.5));
    }

    #[test]
    #[expect(clippy::cast_precision_loss)]
    fn test_quartiles_minimum_size() {
        for n in 0..MIN_QUARTILE_SAMPLES {
            let sorted = (0..n).map(|i| i as f64).collect::<Vec<_>>();
            assert_eq!(
                quartiles_of_sorted(&sorted),
                Err(StatsError::InsufficientData {
                    required: 4,
                    actual: n
                })
            );
        }
        assert_eq!(
            quartiles_of_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            (1.5, 3.5)
        );
    }
}
