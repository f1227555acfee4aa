//! Whole-image class-break computation
//!
//! [`BandedSamples`] is a borrowed view of pixel-interleaved raster
//! samples with an optional no-data range and ROI mask. [`ClassBreaks`]
//! drives a classifier over such a view: it filters every pixel, feeds the
//! accepted samples to [`Classifier::handle_value`] and finalizes each
//! band.
//!
//! With the `rayon` feature the image is cut into row strips that are
//! accumulated in parallel and merged before finalizing.

use std::ops::Range as Rows;

use tessera_range::{Range, RangeValue};

use crate::classification::Classification;
use crate::classifier::{Classifier, ClassifierOptions};
use crate::equal_interval::EqualIntervalClassifier;
use crate::error::{ClassifyError, ClassifyResult};
use crate::method::ClassificationMethod;
use crate::natural::NaturalBreaksClassifier;
use crate::quantile::QuantileClassifier;

// ============================================================================
// Sample view
// ============================================================================

/// Pixel-interleaved samples (`[y][x][band]`) of one raster
#[derive(Debug, Clone)]
pub struct BandedSamples<'a, T: RangeValue> {
    data: &'a [T],
    width: usize,
    height: usize,
    bands: usize,
    no_data: Option<Range<T>>,
    roi: Option<&'a [bool]>,
}

impl<'a, T: RangeValue> BandedSamples<'a, T> {
    /// Wrap `data` holding `width * height * bands` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::SampleCount`] when the length does not
    /// match, and `InvalidParameters` for zero bands.
    pub fn new(data: &'a [T], width: usize, height: usize, bands: usize) -> ClassifyResult<Self> {
        if bands == 0 {
            return Err(ClassifyError::InvalidParameters(
                "samples need at least one band".to_string(),
            ));
        }
        if width.checked_mul(height).and_then(|n| n.checked_mul(bands)) != Some(data.len()) {
            return Err(ClassifyError::SampleCount {
                actual: data.len(),
                width,
                height,
                bands,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            bands,
            no_data: None,
            roi: None,
        })
    }

    /// Exclude samples inside `no_data`
    pub fn with_no_data(mut self, no_data: Range<T>) -> Self {
        self.no_data = Some(no_data);
        self
    }

    /// Restrict the pass to pixels whose mask entry is true.
    ///
    /// The mask is row-major, one entry per pixel.
    pub fn with_roi(mut self, roi: &'a [bool]) -> ClassifyResult<Self> {
        if roi.len() != self.width * self.height {
            return Err(ClassifyError::InvalidParameters(format!(
                "roi mask holds {} entries for a {}x{} image",
                roi.len(),
                self.width,
                self.height
            )));
        }
        self.roi = Some(roi);
        Ok(self)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Sample of pixel `(x, y)` in `band`
    #[inline]
    pub fn sample(&self, x: usize, y: usize, band: usize) -> T {
        self.data[(y * self.width + x) * self.bands + band]
    }

    /// Whether pixel `(x, y)` lies inside the ROI (always true without one)
    #[inline]
    pub fn in_roi(&self, x: usize, y: usize) -> bool {
        self.roi.is_none_or(|mask| mask[y * self.width + x])
    }

    /// Whether `value` is a valid sample: finite and not no-data
    #[inline]
    pub fn is_valid(&self, value: T) -> bool {
        value.to_f64().is_finite() && !self.no_data.is_some_and(|r| r.contains(value))
    }

    /// Per-band `(min, max)` of the valid samples inside the ROI, `None`
    /// for a band without any
    pub fn extrema(&self) -> Vec<Option<(f64, f64)>> {
        let mut extrema = vec![None; self.bands];
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.in_roi(x, y) {
                    continue;
                }
                for (band, slot) in extrema.iter_mut().enumerate() {
                    let value = self.sample(x, y, band);
                    if !self.is_valid(value) {
                        continue;
                    }
                    let v = value.to_f64();
                    *slot = Some(match *slot {
                        Some((min, max)) => (v.min(min), v.max(max)),
                        None => (v, v),
                    });
                }
            }
        }
        extrema
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Build the classifier implementing `method`
pub fn create_classifier(
    method: ClassificationMethod,
    options: ClassifierOptions,
) -> ClassifyResult<Box<dyn Classifier>> {
    let classifier: Box<dyn Classifier> = match method {
        ClassificationMethod::EqualInterval => Box::new(EqualIntervalClassifier::new(options)?),
        ClassificationMethod::Quantile => Box::new(QuantileClassifier::new(options)?),
        ClassificationMethod::NaturalBreaks => Box::new(NaturalBreaksClassifier::new(options)?),
    };
    Ok(classifier)
}

/// Class-break computation over whole images
///
/// # Examples
///
/// ```
/// use tessera_classify::{BandedSamples, ClassBreaks, ClassificationMethod, ClassifierOptions};
///
/// let pixels = [0u8, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 100];
/// let samples = BandedSamples::new(&pixels, 4, 3, 1).unwrap();
/// let breaks = ClassBreaks::new(ClassificationMethod::EqualInterval, ClassifierOptions::new(4))
///     .unwrap()
///     .classify(&samples)
///     .unwrap();
/// assert_eq!(breaks.breaks(0).unwrap(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBreaks {
    method: ClassificationMethod,
    options: ClassifierOptions,
    x_period: usize,
    y_period: usize,
}

impl ClassBreaks {
    /// Create a driver.
    ///
    /// `options` are validated here, and a bucket count is rejected for
    /// methods without a histogram variant. The declared span the
    /// histogram variants need is checked when classifying, so it can still
    /// be supplied with [`with_scanned_extrema`](Self::with_scanned_extrema).
    pub fn new(method: ClassificationMethod, options: ClassifierOptions) -> ClassifyResult<Self> {
        options.validate()?;
        options.check_histogram_support(method)?;
        Ok(Self {
            method,
            options,
            x_period: 1,
            y_period: 1,
        })
    }

    /// Visit only every `x_period`-th column of every `y_period`-th row
    pub fn with_period(mut self, x_period: usize, y_period: usize) -> ClassifyResult<Self> {
        if x_period == 0 || y_period == 0 {
            return Err(ClassifyError::InvalidParameters(format!(
                "subsampling period {}x{} must be at least 1x1",
                x_period, y_period
            )));
        }
        self.x_period = x_period;
        self.y_period = y_period;
        Ok(self)
    }

    /// Declare the extrema of `samples` as the known extrema, unless some
    /// were given already.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` when a band has no valid sample, or the
    /// band count differs from the options.
    pub fn with_scanned_extrema<T: RangeValue>(
        mut self,
        samples: &BandedSamples<'_, T>,
    ) -> ClassifyResult<Self> {
        if self.options.extrema.is_some() {
            return Ok(self);
        }
        self.check_bands(samples)?;
        let extrema = samples
            .extrema()
            .into_iter()
            .enumerate()
            .map(|(band, e)| {
                e.ok_or_else(|| {
                    ClassifyError::InvalidParameters(format!(
                        "band {} has no valid sample to scan",
                        band
                    ))
                })
            })
            .collect::<ClassifyResult<Vec<_>>>()?;
        tracing::debug!(?extrema, "scanned band extrema");
        self.options.extrema = Some(extrema);
        self.classifier()?;
        Ok(self)
    }

    #[inline]
    pub fn method(&self) -> ClassificationMethod {
        self.method
    }

    #[inline]
    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Classifier for this driver's method and options
    pub fn classifier(&self) -> ClassifyResult<Box<dyn Classifier>> {
        create_classifier(self.method, self.options.clone())
    }

    /// Classify every band of `samples`
    pub fn classify<T: RangeValue>(
        &self,
        samples: &BandedSamples<'_, T>,
    ) -> ClassifyResult<Classification> {
        self.check_bands(samples)?;
        let classifier = self.classifier()?;
        let mut classification = self.accumulate(classifier.as_ref(), samples)?;
        classifier.post_calculate_all(&mut classification)?;
        tracing::debug!(
            method = %self.method,
            bands = classification.num_bands(),
            width = samples.width(),
            height = samples.height(),
            "class breaks computed"
        );
        Ok(classification)
    }

    fn check_bands<T: RangeValue>(&self, samples: &BandedSamples<'_, T>) -> ClassifyResult<()> {
        if samples.bands() != self.options.num_bands {
            return Err(ClassifyError::InvalidParameters(format!(
                "samples have {} band(s), options expect {}",
                samples.bands(),
                self.options.num_bands
            )));
        }
        Ok(())
    }

    /// Accumulate the accepted samples of `rows` into a fresh classification
    fn accumulate_rows<T: RangeValue>(
        &self,
        classifier: &dyn Classifier,
        samples: &BandedSamples<'_, T>,
        rows: Rows<usize>,
    ) -> ClassifyResult<Classification> {
        let mut classification = classifier.create_classification()?;
        for y in rows.filter(|y| y % self.y_period == 0) {
            for x in (0..samples.width()).step_by(self.x_period) {
                if !samples.in_roi(x, y) {
                    continue;
                }
                for band in 0..samples.bands() {
                    let value = samples.sample(x, y, band);
                    if samples.is_valid(value) {
                        classifier.handle_value(value.to_f64(), &mut classification, band)?;
                    }
                }
            }
        }
        Ok(classification)
    }

    #[cfg(not(feature = "rayon"))]
    fn accumulate<T: RangeValue>(
        &self,
        classifier: &dyn Classifier,
        samples: &BandedSamples<'_, T>,
    ) -> ClassifyResult<Classification> {
        self.accumulate_rows(classifier, samples, 0..samples.height())
    }

    #[cfg(feature = "rayon")]
    fn accumulate<T: RangeValue>(
        &self,
        classifier: &dyn Classifier,
        samples: &BandedSamples<'_, T>,
    ) -> ClassifyResult<Classification> {
        use rayon::prelude::*;

        let height = samples.height();
        let strip = height.div_ceil(rayon::current_num_threads()).max(1);
        let partials = (0..height.div_ceil(strip))
            .into_par_iter()
            .map(|s| {
                let start = s * strip;
                self.accumulate_rows(classifier, samples, start..(start + strip).min(height))
            })
            .collect::<ClassifyResult<Vec<_>>>()?;
        tracing::trace!(strips = partials.len(), "merging strip accumulators");

        // Strip order is kept so raw value lists concatenate in row order
        let mut partials = partials.into_iter();
        let mut merged = match partials.next() {
            Some(first) => first,
            None => classifier.create_classification()?,
        };
        for partial in partials {
            merged.merge(partial)?;
        }
        Ok(merged)
    }
}
