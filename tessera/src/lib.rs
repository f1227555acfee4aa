//! Tessera - Typed sample ranges and class breaks for raster bands
//!
//! # Overview
//!
//! Tessera provides the building blocks of thematic raster classification:
//!
//! - Interval and point ranges over byte, short, unsigned short, int,
//!   float and double samples, used to describe no-data values
//! - Equal-interval, quantile and natural-breaks (Jenks) class breaks,
//!   exact or histogram-approximated
//! - Per-class population percentages
//! - Whole-image passes with no-data, ROI masks and subsampling
//!
//! # Example
//!
//! ```
//! use tessera::classify::{BandedSamples, ClassBreaks, ClassificationMethod, ClassifierOptions};
//! use tessera::RangeFactory;
//!
//! let pixels = [0u8, 1, 2, 3, 4, 5, 10, 11, 12, 13, 14, 0];
//! let samples = BandedSamples::new(&pixels, 6, 2, 1)
//!     .unwrap()
//!     .with_no_data(RangeFactory::create_point(0u8));
//! let result = ClassBreaks::new(ClassificationMethod::NaturalBreaks, ClassifierOptions::new(2))
//!     .unwrap()
//!     .classify(&samples)
//!     .unwrap();
//! assert_eq!(result.breaks(0).unwrap(), &[1.0, 5.0, 14.0]);
//! ```

// Re-export range types (used everywhere)
pub use tessera_range::*;

// Re-export classification as a module to avoid name conflicts
pub use tessera_classify as classify;
