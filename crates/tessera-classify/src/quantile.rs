//! Quantile classification
//!
//! Classes of approximately equal population. The exact variant keeps a
//! sorted frequency table per band; the approximated one bins samples into
//! a fixed histogram over the declared extrema.
//!
//! Runs of equal values are never split, so class populations may differ
//! from the ideal size when ties straddle a boundary.

use crate::classification::{Classification, SampleStore};
use crate::classifier::{Classifier, ClassifierOptions, accumulate};
use crate::error::ClassifyResult;
use crate::histogram::Histogram;
use crate::method::ClassificationMethod;
use crate::percentages::ClassPercentagesManager;
use crate::table::FrequencyTable;

/// Ideal class population: `ceil(total / num_classes)`, at least 1
fn class_size(total: u64, num_classes: usize) -> u64 {
    total.div_ceil(num_classes as u64).max(1)
}

/// Quantile breaks from a sorted frequency table.
///
/// The first and last values are always breaks. Walking the table, once
/// the current class holds at least `ceil(total / n)` samples the next
/// value opens a new class.
pub fn quantile_breaks(table: &FrequencyTable, num_classes: usize) -> Vec<f64> {
    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return Vec::new();
    };
    let size = class_size(table.total(), num_classes.max(1));

    let mut breaks = vec![first];
    let mut filled = 0u64;
    for (value, count) in table.iter() {
        if filled >= size && value < last {
            breaks.push(value);
            filled = 0;
        }
        filled += count;
    }
    if last > first {
        breaks.push(last);
    }
    breaks
}

/// Quantile breaks from a histogram.
///
/// Outer breaks are the histogram span. A bucket whose preceding
/// cumulative count reached `ceil(total / n) * class` opens the next class
/// at its lower edge.
pub fn histogram_quantile_breaks(histogram: &Histogram, num_classes: usize) -> Vec<f64> {
    let total = histogram.total_count();
    if total == 0 {
        return Vec::new();
    }
    let num_classes = num_classes.max(1);
    let size = class_size(total, num_classes);

    let mut breaks = vec![histogram.min()];
    let mut cumulative = 0u64;
    let mut class = 1u64;
    for bucket in histogram.buckets() {
        if bucket.count == 0 {
            continue;
        }
        if cumulative >= size * class && (class as usize) < num_classes {
            if bucket.min > *breaks.last().unwrap_or(&f64::NEG_INFINITY) {
                breaks.push(bucket.min);
            }
            // A heavy bucket may swallow several targets at once
            while cumulative >= size * class {
                class += 1;
            }
        }
        cumulative += bucket.count;
    }
    if histogram.max() > *breaks.last().unwrap_or(&f64::NEG_INFINITY) {
        breaks.push(histogram.max());
    }
    breaks
}

/// Classifier producing classes of equal population
#[derive(Debug, Clone)]
pub struct QuantileClassifier {
    options: ClassifierOptions,
}

impl QuantileClassifier {
    /// Create a classifier after validating `options`.
    ///
    /// With `histogram_bins` set, known extrema are required.
    pub fn new(options: ClassifierOptions) -> ClassifyResult<Self> {
        options.validate()?;
        options.check_method(ClassificationMethod::Quantile)?;
        Ok(Self { options })
    }
}

impl Classifier for QuantileClassifier {
    fn method(&self) -> ClassificationMethod {
        ClassificationMethod::Quantile
    }

    fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    fn create_classification(&self) -> ClassifyResult<Classification> {
        let method = self.method();
        let mut classification = match self.options.histogram_bins {
            Some(bins) => Classification::with_histograms(method, self.options.histograms(bins)?),
            None => Classification::with_tables(method, self.options.num_bands),
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
        let num_classes = self.options.num_classes;
        let store = classification.store(band)?;
        let breaks = match store {
            SampleStore::Table(table) => quantile_breaks(table, num_classes),
            SampleStore::Histogram(histogram) => histogram_quantile_breaks(histogram, num_classes),
            SampleStore::Extrema | SampleStore::Values(_) => Vec::new(),
        };

        if breaks.is_empty() {
            tracing::warn!(band, "no samples accepted; band left without breaks");
        } else {
            tracing::debug!(
                band,
                samples = store.count(),
                breaks = breaks.len(),
                "quantile breaks"
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
