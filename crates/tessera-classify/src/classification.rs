//! Per-band classification accumulators and results
//!
//! A [`Classification`] is filled one sample at a time by a
//! [`Classifier`](crate::Classifier), then finalized band by band. Each band
//! keeps its running extrema, a [`SampleStore`] whose shape depends on the
//! method, and, once finalized, its class breaks and optional percentages.
//!
//! Partial accumulators built over disjoint image regions can be combined
//! with [`Classification::merge`] before finalizing.

use crate::error::{ClassifyError, ClassifyResult};
use crate::histogram::Histogram;
use crate::method::ClassificationMethod;
use crate::table::FrequencyTable;

/// Accumulated samples of one band
#[derive(Debug, Clone, PartialEq)]
pub enum SampleStore {
    /// Running extrema only
    Extrema,
    /// Every accepted sample, in arrival order until finalized
    Values(Vec<f64>),
    /// Sorted value -> occurrence count table
    Table(FrequencyTable),
    /// Fixed equal-width histogram
    Histogram(Histogram),
}

impl SampleStore {
    fn kind(&self) -> &'static str {
        match self {
            Self::Extrema => "extrema",
            Self::Values(_) => "values",
            Self::Table(_) => "table",
            Self::Histogram(_) => "histogram",
        }
    }

    /// Number of samples held (zero for [`SampleStore::Extrema`])
    pub fn count(&self) -> u64 {
        match self {
            Self::Extrema => 0,
            Self::Values(values) => values.len() as u64,
            Self::Table(table) => table.total(),
            Self::Histogram(histogram) => histogram.total_count(),
        }
    }

    fn push(&mut self, value: f64) {
        match self {
            Self::Extrema => {}
            Self::Values(values) => values.push(value),
            Self::Table(table) => table.add(value),
            Self::Histogram(histogram) => {
                histogram.add(value);
            }
        }
    }

    fn merge(&mut self, other: SampleStore) -> ClassifyResult<()> {
        match (self, other) {
            (Self::Extrema, Self::Extrema) => Ok(()),
            (Self::Values(dst), Self::Values(mut src)) => {
                dst.append(&mut src);
                Ok(())
            }
            (Self::Table(dst), Self::Table(src)) => {
                dst.merge(&src);
                Ok(())
            }
            (Self::Histogram(dst), Self::Histogram(src)) => dst.merge(&src),
            (dst, src) => Err(ClassifyError::IncompatibleClassification(format!(
                "cannot merge {} store into {} store",
                src.kind(),
                dst.kind()
            ))),
        }
    }
}

/// State of one band
#[derive(Debug, Clone, PartialEq)]
struct BandState {
    min: f64,
    max: f64,
    breaks: Vec<f64>,
    percentages: Option<Vec<f64>>,
    store: SampleStore,
}

impl BandState {
    fn new(store: SampleStore) -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            breaks: Vec::new(),
            percentages: None,
            store,
        }
    }
}

/// Class breaks of every band, plus the samples they were computed from
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    method: ClassificationMethod,
    bands: Vec<BandState>,
}

impl Classification {
    /// Create an extrema-only classification with `num_bands` bands
    pub fn new(method: ClassificationMethod, num_bands: usize) -> Self {
        Self::from_stores(method, (0..num_bands).map(|_| SampleStore::Extrema).collect())
    }

    /// Create a classification keeping every accepted sample per band
    pub fn with_values(method: ClassificationMethod, num_bands: usize) -> Self {
        Self::from_stores(
            method,
            (0..num_bands).map(|_| SampleStore::Values(Vec::new())).collect(),
        )
    }

    /// Create a classification keeping a frequency table per band
    pub fn with_tables(method: ClassificationMethod, num_bands: usize) -> Self {
        Self::from_stores(
            method,
            (0..num_bands)
                .map(|_| SampleStore::Table(FrequencyTable::new()))
                .collect(),
        )
    }

    /// Create a classification with one histogram per band
    pub fn with_histograms(method: ClassificationMethod, histograms: Vec<Histogram>) -> Self {
        Self::from_stores(
            method,
            histograms.into_iter().map(SampleStore::Histogram).collect(),
        )
    }

    fn from_stores(method: ClassificationMethod, stores: Vec<SampleStore>) -> Self {
        Self {
            method,
            bands: stores.into_iter().map(BandState::new).collect(),
        }
    }

    fn band(&self, band: usize) -> ClassifyResult<&BandState> {
        let bands = self.bands.len();
        self.bands
            .get(band)
            .ok_or(ClassifyError::BandOutOfRange { band, bands })
    }

    fn band_mut(&mut self, band: usize) -> ClassifyResult<&mut BandState> {
        let bands = self.bands.len();
        self.bands
            .get_mut(band)
            .ok_or(ClassifyError::BandOutOfRange { band, bands })
    }

    /// Classification method
    #[inline]
    pub fn method(&self) -> ClassificationMethod {
        self.method
    }

    /// Number of bands
    #[inline]
    pub fn num_bands(&self) -> usize {
        self.bands.len()
    }

    /// Class breaks of a band (empty until finalized)
    pub fn breaks(&self, band: usize) -> ClassifyResult<&[f64]> {
        Ok(&self.band(band)?.breaks)
    }

    /// Number of classes of a band, i.e. `breaks - 1`
    pub fn num_classes(&self, band: usize) -> ClassifyResult<usize> {
        Ok(self.band(band)?.breaks.len().saturating_sub(1))
    }

    /// Per-class percentages of a band, if they were requested
    pub fn percentages(&self, band: usize) -> ClassifyResult<Option<&[f64]>> {
        Ok(self.band(band)?.percentages.as_deref())
    }

    /// Running minimum (`+inf` before any sample)
    pub fn min(&self, band: usize) -> ClassifyResult<f64> {
        Ok(self.band(band)?.min)
    }

    /// Running maximum (`-inf` before any sample)
    pub fn max(&self, band: usize) -> ClassifyResult<f64> {
        Ok(self.band(band)?.max)
    }

    /// Whether the band has seen at least one sample or known extrema
    pub fn has_extrema(&self, band: usize) -> ClassifyResult<bool> {
        let state = self.band(band)?;
        Ok(state.min <= state.max)
    }

    /// Sample store of a band
    pub fn store(&self, band: usize) -> ClassifyResult<&SampleStore> {
        Ok(&self.band(band)?.store)
    }

    pub(crate) fn store_mut(&mut self, band: usize) -> ClassifyResult<&mut SampleStore> {
        Ok(&mut self.band_mut(band)?.store)
    }

    /// Number of samples the band's store holds
    pub fn count(&self, band: usize) -> ClassifyResult<u64> {
        Ok(self.band(band)?.store.count())
    }

    /// Set the band's minimum
    pub fn set_min(&mut self, band: usize, min: f64) -> ClassifyResult<()> {
        self.band_mut(band)?.min = min;
        Ok(())
    }

    /// Set the band's maximum
    pub fn set_max(&mut self, band: usize, max: f64) -> ClassifyResult<()> {
        self.band_mut(band)?.max = max;
        Ok(())
    }

    /// Widen the band's extrema to include `value`
    pub fn update_extrema(&mut self, band: usize, value: f64) -> ClassifyResult<()> {
        let state = self.band_mut(band)?;
        state.min = state.min.min(value);
        state.max = state.max.max(value);
        Ok(())
    }

    /// Add a sample to the band's store
    pub fn push(&mut self, band: usize, value: f64) -> ClassifyResult<()> {
        self.band_mut(band)?.store.push(value);
        Ok(())
    }

    /// Set the band's class breaks
    pub fn set_breaks(&mut self, band: usize, breaks: Vec<f64>) -> ClassifyResult<()> {
        self.band_mut(band)?.breaks = breaks;
        Ok(())
    }

    /// Set the band's per-class percentages
    pub fn set_percentages(&mut self, band: usize, percentages: Vec<f64>) -> ClassifyResult<()> {
        self.band_mut(band)?.percentages = Some(percentages);
        Ok(())
    }

    /// Combine a partial accumulator of the same shape into this one.
    ///
    /// Extrema are combined, raw value lists appended, tables and
    /// histograms summed. Both sides must still be unfinalized.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::IncompatibleClassification`] when methods,
    /// band counts or store shapes differ, or breaks were already set.
    pub fn merge(&mut self, other: Classification) -> ClassifyResult<()> {
        if self.method != other.method {
            return Err(ClassifyError::IncompatibleClassification(format!(
                "methods differ: {} vs {}",
                self.method, other.method
            )));
        }
        if self.bands.len() != other.bands.len() {
            return Err(ClassifyError::IncompatibleClassification(format!(
                "band counts differ: {} vs {}",
                self.bands.len(),
                other.bands.len()
            )));
        }
        let finalized = |c: &Classification| c.bands.iter().any(|b| !b.breaks.is_empty());
        if finalized(self) || finalized(&other) {
            return Err(ClassifyError::IncompatibleClassification(
                "cannot merge a classification whose breaks are already computed".to_string(),
            ));
        }

        for (dst, src) in self.bands.iter_mut().zip(other.bands) {
            dst.min = dst.min.min(src.min);
            dst.max = dst.max.max(src.max);
            dst.store.merge(src.store)?;
        }
        Ok(())
    }
}
