//! Tessera Classify - Class breaks for raster bands
//!
//! This crate computes class breaks over streamed raster samples:
//!
//! - **Equal interval** ([`equal_interval`]): equal-width classes over the band extrema
//! - **Quantile** ([`quantile`]): equal-population classes, exact or histogram-approximated
//! - **Natural breaks** ([`natural`]): Jenks variance minimization, exact or histogram-approximated
//! - **Percentages** ([`percentages`]): per-class population share
//! - **Driver** ([`breaks`]): whole-image passes with no-data, ROI and subsampling
//!
//! Exact quantile and natural-breaks classification keep one entry per
//! distinct value (quantile) or per sample (natural breaks); the histogram
//! variants bound memory to the bucket count at the cost of exactness.
//!
//! # Example
//!
//! ```
//! use tessera_classify::{Classifier, ClassifierOptions, NaturalBreaksClassifier};
//!
//! let classifier = NaturalBreaksClassifier::new(ClassifierOptions::new(2)).unwrap();
//! let result = classifier
//!     .classify_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0])
//!     .unwrap();
//! assert_eq!(result.breaks(0).unwrap(), &[1.0, 5.0, 14.0]);
//! ```
//!
//! # Features
//!
//! - `rayon`: accumulate row strips in parallel in [`ClassBreaks::classify`]

pub mod breaks;
pub mod classification;
pub mod classifier;
pub mod equal_interval;
pub mod error;
pub mod histogram;
pub mod jenks;
pub mod method;
pub mod natural;
pub mod percentages;
pub mod quantile;
pub mod table;

// Re-export range types
pub use tessera_range;

// Re-export error types
pub use error::{ClassifyError, ClassifyResult};

// Re-export containers
pub use classification::{Classification, SampleStore};
pub use histogram::{Bucket, Histogram};
pub use method::ClassificationMethod;
pub use table::FrequencyTable;

// Re-export classifiers
pub use classifier::{Classifier, ClassifierOptions, DEFAULT_NUM_CLASSES};
pub use equal_interval::{EqualIntervalClassifier, equal_interval_breaks};
pub use natural::{NaturalBreaksClassifier, histogram_natural_breaks, natural_breaks};
pub use quantile::{QuantileClassifier, histogram_quantile_breaks, quantile_breaks};

// Re-export statistics helpers
pub use jenks::{JenksPartition, jenks_partition};
pub use percentages::{ClassPercentagesManager, class_index};

// Re-export the driver
pub use breaks::{BandedSamples, ClassBreaks, create_classifier};
