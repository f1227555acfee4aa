//! The classifier contract and its options
//!
//! A classifier is driven in three steps:
//!
//! 1. [`Classifier::create_classification`] allocates an empty accumulator
//! 2. [`Classifier::handle_value`] is called once per accepted sample
//! 3. [`Classifier::post_calculate`] finalizes each band
//!
//! No-data and ROI filtering happen before step 2 and are the caller's
//! job (see [`ClassBreaks`](crate::ClassBreaks) for a driver that does it).

use crate::classification::Classification;
use crate::error::{ClassifyError, ClassifyResult};
use crate::histogram::Histogram;
use crate::method::ClassificationMethod;

/// Number of classes used when none is given
pub const DEFAULT_NUM_CLASSES: usize = 10;

/// Options shared by every classifier
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOptions {
    /// Target number of classes
    pub num_classes: usize,
    /// Number of bands to classify
    pub num_bands: usize,
    /// Known `(min, max)` per band; samples outside are ignored
    pub extrema: Option<Vec<(f64, f64)>>,
    /// Compute per-class population percentages
    pub percentages: bool,
    /// Use the histogram-approximated variant with this many buckets
    pub histogram_bins: Option<usize>,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            num_classes: DEFAULT_NUM_CLASSES,
            num_bands: 1,
            extrema: None,
            percentages: false,
            histogram_bins: None,
        }
    }
}

impl ClassifierOptions {
    /// Options for `num_classes` classes over a single band
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            ..Default::default()
        }
    }

    pub fn with_bands(mut self, num_bands: usize) -> Self {
        self.num_bands = num_bands;
        self
    }

    pub fn with_extrema(mut self, extrema: Vec<(f64, f64)>) -> Self {
        self.extrema = Some(extrema);
        self
    }

    pub fn with_percentages(mut self, percentages: bool) -> Self {
        self.percentages = percentages;
        self
    }

    pub fn with_histogram(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Check the options for internal consistency
    pub fn validate(&self) -> ClassifyResult<()> {
        if self.num_classes == 0 {
            return Err(ClassifyError::InvalidParameters(
                "num_classes must be at least 1".to_string(),
            ));
        }
        if self.num_bands == 0 {
            return Err(ClassifyError::InvalidParameters(
                "num_bands must be at least 1".to_string(),
            ));
        }
        if self.histogram_bins == Some(0) {
            return Err(ClassifyError::InvalidParameters(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if let Some(extrema) = &self.extrema {
            if extrema.len() != self.num_bands {
                return Err(ClassifyError::InvalidParameters(format!(
                    "{} extrema given for {} band(s)",
                    extrema.len(),
                    self.num_bands
                )));
            }
            if let Some((band, &(min, max))) = extrema
                .iter()
                .enumerate()
                .find(|(_, (min, max))| !(min <= max))
            {
                return Err(ClassifyError::InvalidParameters(format!(
                    "band {} extrema [{}, {}] are not ordered",
                    band, min, max
                )));
            }
        }
        Ok(())
    }

    /// Known extrema of one band
    pub fn band_extrema(&self, band: usize) -> Option<(f64, f64)> {
        self.extrema.as_ref().and_then(|e| e.get(band).copied())
    }

    /// Per-band histograms over the declared extrema
    pub(crate) fn histograms(&self, bins: usize) -> ClassifyResult<Vec<Histogram>> {
        let extrema = self.extrema.as_ref().ok_or_else(|| {
            ClassifyError::InvalidParameters(
                "histogram classification needs known extrema per band".to_string(),
            )
        })?;
        extrema
            .iter()
            .map(|&(min, max)| Histogram::new(min, max, bins))
            .collect()
    }

    /// Seed a fresh classification's extrema from the known values
    pub(crate) fn seed_extrema(&self, classification: &mut Classification) -> ClassifyResult<()> {
        if let Some(extrema) = &self.extrema {
            for (band, &(min, max)) in extrema.iter().enumerate() {
                classification.set_min(band, min)?;
                classification.set_max(band, max)?;
            }
        }
        Ok(())
    }

    /// Check the options against the method they are used with.
    ///
    /// A bucket count is only meaningful for methods with a histogram
    /// variant, and those need known extrema to lay out the buckets.
    pub(crate) fn check_method(&self, method: ClassificationMethod) -> ClassifyResult<()> {
        self.check_histogram_support(method)?;
        match self.histogram_bins {
            Some(bins) => self.histograms(bins).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Reject a bucket count for a method without a histogram variant
    pub(crate) fn check_histogram_support(
        &self,
        method: ClassificationMethod,
    ) -> ClassifyResult<()> {
        if self.histogram_bins.is_some() && !method.supports_histogram() {
            return Err(ClassifyError::InvalidParameters(format!(
                "{} has no histogram variant",
                method
            )));
        }
        Ok(())
    }

    /// Filter applied by every classifier before storing a sample.
    ///
    /// Returns false for NaN and infinities, and for samples outside the
    /// known extrema.
    pub(crate) fn accepts(&self, value: f64, band: usize) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.band_extrema(band) {
            Some((min, max)) => value >= min && value <= max,
            None => true,
        }
    }
}

/// Class-break computation driven one sample at a time
pub trait Classifier: Send + Sync {
    /// Method implemented by this classifier
    fn method(&self) -> ClassificationMethod;

    /// Options this classifier was built with
    fn options(&self) -> &ClassifierOptions;

    /// Allocate a fresh, empty accumulator
    fn create_classification(&self) -> ClassifyResult<Classification>;

    /// Accumulate one accepted sample of `band`
    fn handle_value(
        &self,
        value: f64,
        classification: &mut Classification,
        band: usize,
    ) -> ClassifyResult<()>;

    /// Turn the accumulated samples of `band` into breaks (and percentages)
    fn post_calculate(&self, classification: &mut Classification, band: usize)
    -> ClassifyResult<()>;

    /// Finalize every band
    fn post_calculate_all(&self, classification: &mut Classification) -> ClassifyResult<()> {
        for band in 0..classification.num_bands() {
            self.post_calculate(classification, band)?;
        }
        Ok(())
    }

    /// Classify a single band of samples in one call
    fn classify_values(&self, values: &[f64]) -> ClassifyResult<Classification> {
        let mut classification = self.create_classification()?;
        for &value in values {
            self.handle_value(value, &mut classification, 0)?;
        }
        self.post_calculate(&mut classification, 0)?;
        Ok(classification)
    }
}

/// Record accepted samples shared by the classifiers: extrema tracking
/// (when none were declared) and storage.
pub(crate) fn accumulate(
    options: &ClassifierOptions,
    value: f64,
    classification: &mut Classification,
    band: usize,
) -> ClassifyResult<()> {
    if band >= classification.num_bands() {
        return Err(ClassifyError::BandOutOfRange {
            band,
            bands: classification.num_bands(),
        });
    }
    if !options.accepts(value, band) {
        return Ok(());
    }
    if options.extrema.is_none() {
        classification.update_extrema(band, value)?;
    }
    classification.push(band, value)
}
