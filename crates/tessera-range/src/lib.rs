//! Tessera Range - Typed value ranges for raster samples
//!
//! This crate provides interval and point ranges over the six primitive
//! sample domains found in rasters (byte, unsigned short, short, int,
//! float, double). They are used to describe no-data values and to test
//! sample membership:
//!
//! - [`Range`] - Immutable interval or point over one domain
//! - [`RangeFactory`] - Validating constructors
//! - [`AnyRange`] - Type-erased range for run-time domains
//! - [`DataType`] / [`RangeValue`] - Domain tags and the numeric trait
//!
//! # Example
//!
//! ```
//! use tessera_range::RangeFactory;
//!
//! let no_data = RangeFactory::create_point(f64::NAN);
//! assert!(no_data.contains(f64::NAN));
//!
//! let valid = RangeFactory::create(0u8, true, 10u8, false).unwrap();
//! assert!(valid.contains(9) && !valid.contains(10));
//! ```

pub mod any;
pub mod error;
pub mod factory;
pub mod range;
pub mod value;

pub use any::AnyRange;
pub use error::{RangeError, RangeResult};
pub use factory::RangeFactory;
pub use range::Range;
pub use value::{DataType, RangeValue};
