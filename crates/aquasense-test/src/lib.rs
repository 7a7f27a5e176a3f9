//! aquasense-test - regression test support
//!
//! Provides the [`RegParams`] harness used by the workspace's `*_reg.rs`
//! integration tests, plus synthetic fixture builders. The engine consumes
//! only decoded buffers and the repository ships no sample photographs, so
//! every fixture is generated in memory.
//!
//! # Usage
//!
//! ```
//! use aquasense_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment variables
//!
//! - `REGTEST_MODE`: set to `display` to log comparisons without failing
//!   the suite (default mode is `compare`).

mod params;
pub mod synth;

pub use params::{RegParams, RegTestMode};
pub use synth::{composite_haze, gradient_raster, saturated_raster, uniform_raster};
