//! Per-class population percentages
//!
//! Given final breaks `b[0] < b[1] < ... < b[n]`, class `i` covers
//! `[b[i], b[i+1])`; only the last class also includes its upper edge, so
//! no sample is counted twice. Percentages are relative to the whole
//! population (0..=100).
//!
//! Histogram buckets that straddle a break are split linearly: the
//! bucket's count is assumed uniform across its width.

use crate::classification::SampleStore;
use crate::histogram::Histogram;
use crate::table::FrequencyTable;

/// Index of the class `value` belongs to, or `None` outside the breaks
pub fn class_index(breaks: &[f64], value: f64) -> Option<usize> {
    let classes = breaks.len().checked_sub(1).filter(|&n| n > 0)?;
    let (first, last) = (breaks[0], breaks[classes]);
    if value.is_nan() || value < first || value > last {
        return None;
    }
    if value == last {
        return Some(classes - 1);
    }
    // First break > value, minus one, is the class whose lower edge <= value
    let upper = breaks.partition_point(|&b| b <= value);
    Some((upper - 1).min(classes - 1))
}

/// Strategies turning accumulated samples into class percentages
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassPercentagesManager;

impl ClassPercentagesManager {
    /// Percentages from a frequency table
    pub fn from_table(breaks: &[f64], table: &FrequencyTable) -> Vec<f64> {
        let mut counts = vec![0.0; breaks.len().saturating_sub(1)];
        for (value, count) in table.iter() {
            if let Some(i) = class_index(breaks, value) {
                counts[i] += count as f64;
            }
        }
        Self::normalize(counts, table.total() as f64)
    }

    /// Percentages from a raw list of samples
    pub fn from_values(breaks: &[f64], values: &[f64]) -> Vec<f64> {
        let mut counts = vec![0.0; breaks.len().saturating_sub(1)];
        for &value in values {
            if let Some(i) = class_index(breaks, value) {
                counts[i] += 1.0;
            }
        }
        Self::normalize(counts, values.len() as f64)
    }

    /// Percentages from histogram buckets, splitting straddling buckets
    pub fn from_histogram(breaks: &[f64], histogram: &Histogram) -> Vec<f64> {
        let classes = breaks.len().saturating_sub(1);
        let mut counts = vec![0.0; classes];
        for (i, count) in counts.iter_mut().enumerate() {
            let (class_min, class_max) = (breaks[i], breaks[i + 1]);
            let last = i + 1 == classes;
            for bucket in histogram.buckets().iter().filter(|b| b.count > 0) {
                *count += bucket.count as f64
                    * Self::overlap(class_min, class_max, last, bucket.min, bucket.max);
            }
        }
        Self::normalize(counts, histogram.total_count() as f64)
    }

    /// Dispatch on the store shape; `None` for an extrema-only store
    pub fn from_store(breaks: &[f64], store: &SampleStore) -> Option<Vec<f64>> {
        match store {
            SampleStore::Extrema => None,
            SampleStore::Values(values) => Some(Self::from_values(breaks, values)),
            SampleStore::Table(table) => Some(Self::from_table(breaks, table)),
            SampleStore::Histogram(histogram) => Some(Self::from_histogram(breaks, histogram)),
        }
    }

    /// Fraction of a bucket that lies inside a class interval
    fn overlap(class_min: f64, class_max: f64, last: bool, bucket_min: f64, bucket_max: f64) -> f64 {
        if bucket_min == bucket_max {
            let inside = bucket_min >= class_min
                && (bucket_min < class_max || (last && bucket_min == class_max));
            return if inside { 1.0 } else { 0.0 };
        }
        let shared = class_max.min(bucket_max) - class_min.max(bucket_min);
        (shared / (bucket_max - bucket_min)).clamp(0.0, 1.0)
    }

    fn normalize(counts: Vec<f64>, total: f64) -> Vec<f64> {
        if total <= 0.0 {
            return vec![0.0; counts.len()];
        }
        counts.into_iter().map(|c| c * 100.0 / total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(p: &[f64]) -> f64 {
        p.iter().sum()
    }

    #[test]
    fn test_class_index() {
        let breaks = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(class_index(&breaks, 0.0), Some(0));
        assert_eq!(class_index(&breaks, 9.99), Some(0));
        assert_eq!(class_index(&breaks, 10.0), Some(1));
        assert_eq!(class_index(&breaks, 29.0), Some(2));
        assert_eq!(class_index(&breaks, 30.0), Some(2));
        assert_eq!(class_index(&breaks, 30.5), None);
        assert_eq!(class_index(&breaks, -1.0), None);
        assert_eq!(class_index(&breaks, f64::NAN), None);
        assert_eq!(class_index(&[5.0], 5.0), None);
        assert_eq!(class_index(&[], 5.0), None);
    }

    #[test]
    fn test_class_index_repeated_breaks() {
        // Equal interval over a constant band
        let breaks = [4.0, 4.0, 4.0];
        assert_eq!(class_index(&breaks, 4.0), Some(1));
    }

    #[test]
    fn test_from_values() {
        let breaks = [0.0, 5.0, 10.0];
        let p = ClassPercentagesManager::from_values(&breaks, &[0.0, 1.0, 5.0, 10.0]);
        assert_eq!(p, vec![50.0, 50.0]);
    }

    #[test]
    fn test_from_table() {
        let mut table = FrequencyTable::new();
        table.add_count(1.0, 3);
        table.add_count(7.0, 1);
        let p = ClassPercentagesManager::from_table(&[1.0, 5.0, 7.0], &table);
        assert_eq!(p, vec![75.0, 25.0]);
    }

    #[test]
    fn test_from_histogram_interpolates() {
        let mut h = Histogram::new(0.0, 10.0, 2).unwrap();
        for _ in 0..10 {
            h.add(1.0);
        }
        for _ in 0..10 {
            h.add(7.0);
        }
        // Break at 2.5 cuts the first bucket [0, 5) in half
        let p = ClassPercentagesManager::from_histogram(&[0.0, 2.5, 10.0], &h);
        assert!((p[0] - 25.0).abs() < 1e-9);
        assert!((p[1] - 75.0).abs() < 1e-9);
        assert!((sum(&p) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_histogram_degenerate_bucket() {
        let mut h = Histogram::new(3.0, 3.0, 8).unwrap();
        h.add(3.0);
        h.add(3.0);
        let p = ClassPercentagesManager::from_histogram(&[3.0, 3.0], &h);
        assert_eq!(p, vec![100.0]);
        let p = ClassPercentagesManager::from_histogram(&[0.0, 3.0, 6.0], &h);
        assert_eq!(p, vec![0.0, 100.0]);
    }

    #[test]
    fn test_empty_population() {
        let p = ClassPercentagesManager::from_values(&[0.0, 1.0, 2.0], &[]);
        assert_eq!(p, vec![0.0, 0.0]);
        assert!(ClassPercentagesManager::from_store(&[0.0, 1.0], &SampleStore::Extrema).is_none());
    }
}
