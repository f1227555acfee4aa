//! Fixed equal-width histograms
//!
//! Bounded-memory sample store for the approximated quantile and
//! natural-breaks classifiers. A value is binned by index arithmetic,
//! never by comparing against each bucket.

use crate::error::{ClassifyError, ClassifyResult};

/// One histogram bucket covering `[min, max)` (the last one `[min, max]`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    /// Lower edge
    pub min: f64,
    /// Upper edge
    pub max: f64,
    /// Number of samples binned here
    pub count: u64,
}

impl Bucket {
    /// Center of the bucket
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Bucket width (zero for a degenerate span)
    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Histogram of `bins` equal-width buckets over a declared `[min, max]`
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min: f64,
    max: f64,
    width: f64,
    buckets: Vec<Bucket>,
}

impl Histogram {
    /// Create an empty histogram.
    ///
    /// A degenerate span (`min == max`) yields a single zero-width bucket
    /// whatever `bins` is.
    ///
    /// # Errors
    ///
    /// Returns an error if `bins` is zero, a bound is not finite,
    /// `min > max`, or the span `max - min` overflows.
    pub fn new(min: f64, max: f64, bins: usize) -> ClassifyResult<Self> {
        if bins == 0 {
            return Err(ClassifyError::InvalidParameters(
                "histogram needs at least one bucket".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(ClassifyError::InvalidParameters(format!(
                "invalid histogram span [{}, {}]",
                min, max
            )));
        }

        let bins = if min == max { 1 } else { bins };
        let width = (max - min) / bins as f64;
        let buckets = (0..bins)
            .map(|i| Bucket {
                min: min + i as f64 * width,
                // Last edge is pinned to max against accumulated rounding
                max: if i + 1 == bins {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        Ok(Self {
            min,
            max,
            width,
            buckets,
        })
    }

    /// Lower edge of the span
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper edge of the span
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of buckets
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Always false; a histogram has at least one bucket
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// All buckets in increasing order
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Index of the bucket `value` falls into, or `None` outside the span
    pub fn bucket_index(&self, value: f64) -> Option<usize> {
        if !(value >= self.min && value <= self.max) {
            return None;
        }
        if self.width == 0.0 {
            return Some(0);
        }
        let index = ((value - self.min) / self.width) as usize;
        Some(index.min(self.buckets.len() - 1))
    }

    /// Bin one sample; returns false if it lies outside the span or is NaN
    pub fn add(&mut self, value: f64) -> bool {
        match self.bucket_index(value) {
            Some(i) => {
                self.buckets[i].count += 1;
                true
            }
            None => false,
        }
    }

    /// Total number of binned samples
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Add the counts of a histogram with the same layout
    pub fn merge(&mut self, other: &Histogram) -> ClassifyResult<()> {
        if self.min != other.min || self.max != other.max || self.len() != other.len() {
            return Err(ClassifyError::IncompatibleClassification(format!(
                "histogram layouts differ: [{}, {}]x{} vs [{}, {}]x{}",
                self.min,
                self.max,
                self.len(),
                other.min,
                other.max,
                other.len()
            )));
        }
        for (dst, src) in self.buckets.iter_mut().zip(&other.buckets) {
            dst.count += src.count;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let h = Histogram::new(0.0, 100.0, 4).unwrap();
        assert_eq!(h.len(), 4);
        let b = h.buckets();
        assert_eq!((b[0].min, b[0].max), (0.0, 25.0));
        assert_eq!((b[3].min, b[3].max), (75.0, 100.0));
        assert_eq!(b[1].midpoint(), 37.5);
    }

    #[test]
    fn test_bucket_index() {
        let h = Histogram::new(0.0, 10.0, 10).unwrap();
        assert_eq!(h.bucket_index(0.0), Some(0));
        assert_eq!(h.bucket_index(0.99), Some(0));
        assert_eq!(h.bucket_index(1.0), Some(1));
        assert_eq!(h.bucket_index(10.0), Some(9));
        assert_eq!(h.bucket_index(-0.1), None);
        assert_eq!(h.bucket_index(10.1), None);
        assert_eq!(h.bucket_index(f64::NAN), None);
    }

    #[test]
    fn test_overflowing_span() {
        assert!(Histogram::new(-f64::MAX, f64::MAX, 4).is_err());
        assert!(Histogram::new(0.0, f64::INFINITY, 4).is_err());
        assert!(Histogram::new(0.0, f64::MAX, 4).is_ok());
    }

    #[test]
    fn test_add_and_total() {
        let mut h = Histogram::new(0.0, 10.0, 5).unwrap();
        for v in [0.0, 1.0, 2.5, 9.9, 10.0, 11.0] {
            h.add(v);
        }
        assert_eq!(h.total_count(), 5);
        assert_eq!(h.buckets()[0].count, 2);
        assert_eq!(h.buckets()[1].count, 1);
        assert_eq!(h.buckets()[4].count, 2);
    }

    #[test]
    fn test_degenerate_span() {
        let mut h = Histogram::new(3.0, 3.0, 16).unwrap();
        assert_eq!(h.len(), 1);
        assert!(h.add(3.0));
        assert!(!h.add(3.5));
        assert_eq!(h.buckets()[0].width(), 0.0);
    }

    #[test]
    fn test_invalid() {
        assert!(Histogram::new(0.0, 1.0, 0).is_err());
        assert!(Histogram::new(2.0, 1.0, 4).is_err());
        assert!(Histogram::new(f64::NAN, 1.0, 4).is_err());
        assert!(Histogram::new(0.0, f64::INFINITY, 4).is_err());
    }

    #[test]
    fn test_merge() {
        let mut a = Histogram::new(0.0, 4.0, 4).unwrap();
        let mut b = Histogram::new(0.0, 4.0, 4).unwrap();
        a.add(0.5);
        b.add(0.5);
        b.add(3.5);
        a.merge(&b).unwrap();
        assert_eq!(a.buckets()[0].count, 2);
        assert_eq!(a.buckets()[3].count, 1);

        let c = Histogram::new(0.0, 4.0, 8).unwrap();
        assert!(a.merge(&c).is_err());
    }
}
