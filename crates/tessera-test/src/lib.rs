//! tessera-test - Regression test framework for Tessera
//!
//! Regression suites under each crate's `tests/` directory record their
//! checks through [`RegParams`], which supports two modes:
//!
//! - **Compare**: Mismatches are recorded and fail the suite (default)
//! - **Display**: Mismatches are printed only, for inspecting new results
//!
//! # Usage
//!
//! ```ignore
//! use tessera_test::RegParams;
//!
//! let mut rp = RegParams::new("quantile");
//! rp.compare_values(5.0, breaks.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

pub mod data;
mod error;
mod params;

pub use error::TestError;
pub use params::{RegParams, RegTestMode};
