//! Equal-interval classification
//!
//! Splits `[min, max]` of each band into classes of equal width. Only the
//! extrema are needed, unless percentages are requested, in which case
//! every accepted sample is kept.
//!
//! A constant band (`min == max`) gets the single break `[min]` and no
//! classes, as with the other methods.

use crate::classification::Classification;
use crate::classifier::{Classifier, ClassifierOptions, accumulate};
use crate::error::ClassifyResult;
use crate::method::ClassificationMethod;
use crate::percentages::ClassPercentagesManager;

/// Compute `num_classes + 1` equal-width breaks over `[min, max]`.
///
/// The last break is exactly `max`, not `min + n * delta`.
///
/// ```
/// use tessera_classify::equal_interval_breaks;
///
/// assert_eq!(equal_interval_breaks(0.0, 100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
/// ```
pub fn equal_interval_breaks(min: f64, max: f64, num_classes: usize) -> Vec<f64> {
    if num_classes == 0 {
        return vec![min, max];
    }
    let delta = (max - min) / num_classes as f64;
    let mut breaks: Vec<f64> = (0..num_classes).map(|k| min + k as f64 * delta).collect();
    breaks.push(max);
    breaks
}

/// Classifier producing classes of equal width
#[derive(Debug, Clone)]
pub struct EqualIntervalClassifier {
    options: ClassifierOptions,
}

impl EqualIntervalClassifier {
    /// Create a classifier after validating `options`.
    ///
    /// Equal interval has no histogram variant, so `histogram_bins` must
    /// be unset.
    pub fn new(options: ClassifierOptions) -> ClassifyResult<Self> {
        options.validate()?;
        options.check_method(ClassificationMethod::EqualInterval)?;
        Ok(Self { options })
    }
}

impl Classifier for EqualIntervalClassifier {
    fn method(&self) -> ClassificationMethod {
        ClassificationMethod::EqualInterval
    }

    fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    fn create_classification(&self) -> ClassifyResult<Classification> {
        let method = self.method();
        let bands = self.options.num_bands;
        let mut classification = if self.options.percentages {
            Classification::with_values(method, bands)
        } else {
            Classification::new(method, bands)
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
        if !classification.has_extrema(band)? {
            tracing::warn!(band, "no samples accepted; band left without breaks");
            classification.set_breaks(band, Vec::new())?;
            return Ok(());
        }

        let (min, max) = (classification.min(band)?, classification.max(band)?);
        let breaks = if min == max {
            tracing::debug!(band, value = min, "constant band; single break");
            vec![min]
        } else {
            equal_interval_breaks(min, max, self.options.num_classes)
        };
        tracing::debug!(band, min, max, breaks = breaks.len(), "equal-interval breaks");

        let percentages = if self.options.percentages {
            ClassPercentagesManager::from_store(&breaks, classification.store(band)?)
        } else {
            None
        };
        if let Some(percentages) = percentages {
            classification.set_percentages(band, percentages)?;
        }
        classification.set_breaks(band, breaks)
    }
}
