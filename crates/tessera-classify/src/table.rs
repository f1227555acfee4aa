//! Sorted frequency table of sample values

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// `f64` ordered by `total_cmp`, usable as a map key
#[derive(Debug, Clone, Copy)]
struct SampleKey(f64);

impl PartialEq for SampleKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SampleKey {}

impl PartialOrd for SampleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SampleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Map from sample value to occurrence count, in increasing value order
///
/// Memory grows with the number of distinct values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<SampleKey, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `value`
    pub fn add(&mut self, value: f64) {
        self.add_count(value, 1);
    }

    /// Record `count` occurrences of `value`
    pub fn add_count(&mut self, value: f64, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(SampleKey(value)).or_insert(0) += count;
        self.total += count;
    }

    /// Total number of occurrences
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct values
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrences of `value`
    pub fn count(&self, value: f64) -> u64 {
        self.counts.get(&SampleKey(value)).copied().unwrap_or(0)
    }

    /// Smallest value
    pub fn first(&self) -> Option<f64> {
        self.counts.keys().next().map(|k| k.0)
    }

    /// Largest value
    pub fn last(&self) -> Option<f64> {
        self.counts.keys().next_back().map(|k| k.0)
    }

    /// `(value, count)` pairs in increasing value order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, u64)> + '_ {
        self.counts.iter().map(|(k, &c)| (k.0, c))
    }

    /// Add every count of `other` into this table
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (value, count) in other.iter() {
            self.add_count(value, count);
        }
    }
}
