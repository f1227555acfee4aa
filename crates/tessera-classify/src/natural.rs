//! Natural-breaks (Jenks) classification
//!
//! The exact variant keeps every accepted sample and runs the
//! [`jenks_partition`] program over the sorted list, which is quadratic in
//! the sample count. The histogram variant runs the same program over
//! non-empty bucket midpoints weighted by their counts, so its cost is
//! bounded by the bucket count.
//!
//! Each inner break is the last value of the lower class. When no more
//! distinct values than requested classes exist, the values themselves
//! are returned as breaks.

use crate::classification::{Classification, SampleStore};
use crate::classifier::{Classifier, ClassifierOptions, accumulate};
use crate::error::ClassifyResult;
use crate::histogram::Histogram;
use crate::jenks::jenks_partition;
use crate::method::ClassificationMethod;
use crate::percentages::ClassPercentagesManager;

/// Natural breaks of `sorted` (ascending, NaN free) for `num_classes`
/// classes.
///
/// Breaks are de-duplicated. When the lower class holds only copies of
/// the minimum, its closing break equals the first one and is dropped, so
/// fewer classes than requested come back.
///
/// # Examples
///
/// ```
/// use tessera_classify::natural_breaks;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0];
/// assert_eq!(natural_breaks(&data, 2), vec![1.0, 5.0, 14.0]);
/// ```
pub fn natural_breaks(sorted: &[f64], num_classes: usize) -> Vec<f64> {
    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };

    let mut distinct = sorted.to_vec();
    distinct.dedup();
    if num_classes >= distinct.len() {
        tracing::debug!(
            distinct = distinct.len(),
            num_classes,
            "no more distinct values than classes; values used as breaks"
        );
        return distinct;
    }

    let points: Vec<(f64, f64)> = sorted.iter().map(|&v| (v, 1.0)).collect();
    let partition = jenks_partition(&points, num_classes);
    tracing::trace!(variance = partition.total_variance, "jenks partition");

    let mut breaks = Vec::with_capacity(num_classes + 1);
    breaks.push(first);
    breaks.extend(partition.last_of_class.iter().map(|&i| sorted[i]));
    breaks.push(last);
    breaks.dedup();
    breaks
}

/// Natural breaks approximated from a histogram.
///
/// Outer breaks are the histogram span; each inner break is the upper edge
/// of the last bucket of the lower class.
pub fn histogram_natural_breaks(histogram: &Histogram, num_classes: usize) -> Vec<f64> {
    let occupied: Vec<_> = histogram.buckets().iter().filter(|b| b.count > 0).collect();
    if occupied.is_empty() {
        return Vec::new();
    }

    let mut breaks = vec![histogram.min()];
    if num_classes >= occupied.len() {
        tracing::debug!(
            buckets = occupied.len(),
            num_classes,
            "no more occupied buckets than classes; bucket edges used as breaks"
        );
        breaks.extend(occupied[..occupied.len() - 1].iter().map(|b| b.max));
    } else {
        let points: Vec<(f64, f64)> = occupied
            .iter()
            .map(|b| (b.midpoint(), b.count as f64))
            .collect();
        let partition = jenks_partition(&points, num_classes);
        breaks.extend(partition.last_of_class.iter().map(|&i| occupied[i].max));
    }
    breaks.push(histogram.max());
    breaks.dedup();
    breaks
}

/// Classifier minimizing within-class variance
#[derive(Debug, Clone)]
pub struct NaturalBreaksClassifier {
    options: ClassifierOptions,
}

impl NaturalBreaksClassifier {
    /// Create a classifier after validating `options`.
    ///
    /// With `histogram_bins` set, known extrema are required.
    pub fn new(options: ClassifierOptions) -> ClassifyResult<Self> {
        options.validate()?;
        options.check_method(ClassificationMethod::NaturalBreaks)?;
        Ok(Self { options })
    }
}

impl Classifier for NaturalBreaksClassifier {
    fn method(&self) -> ClassificationMethod {
        ClassificationMethod::NaturalBreaks
    }

    fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    fn create_classification(&self) -> ClassifyResult<Classification> {
        let method = self.method();
        let mut classification = match self.options.histogram_bins {
            Some(bins) => Classification::with_histograms(method, self.options.histograms(bins)?),
            None => Classification::with_values(method, self.options.num_bands),
        };
        self.options.seed_extrema(&mut classification)?;
        Ok(classification)
    }

    fn handle_value(
        &self,
        value: f64,
        classification: &mut Classification,
        band: usize,
    ) -> ClassifyResult<()> {
        accumulate(&self.options, value, classification, band)
    }

    fn post_calculate(
        &self,
        classification: &mut Classification,
        band: usize,
    ) -> ClassifyResult<()> {
        if let SampleStore::Values(values) = classification.store_mut(band)? {
            values.sort_by(f64::total_cmp);
        }

        let num_classes = self.options.num_classes;
        let store = classification.store(band)?;
        let breaks = match store {
            SampleStore::Values(values) => natural_breaks(values, num_classes),
            SampleStore::Histogram(histogram) => histogram_natural_breaks(histogram, num_classes),
            SampleStore::Extrema | SampleStore::Table(_) => Vec::new(),
        };

        if breaks.is_empty() {
            tracing::warn!(band, "no samples accepted; band left without breaks");
        } else {
            tracing::debug!(
                band,
                samples = store.count(),
                breaks = breaks.len(),
                "natural breaks"
            );
        }

        let percentages = if self.options.percentages {
            ClassPercentagesManager::from_store(&breaks, store)
        } else {
            None
        };
        if let Some(percentages) = percentages {
            classification.set_percentages(band, percentages)?;
        }
        classification.set_breaks(band, breaks)
    }
}
