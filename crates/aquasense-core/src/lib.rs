//! AquaSense Core - basic containers for image restoration and assessment
//!
//! This crate provides the data structures shared across the AquaSense
//! workspace:
//!
//! - [`Raster`] / [`RasterMut`] - 8-bit RGB image (immutable / mutable)
//! - [`FloatMap`] - single-channel floating-point map
//! - [`Error`] / [`Result`] - unified error type
//!
//! The restoration engine and its collaborators operate only on decoded
//! pixel buffers; encoding and decoding live in `aquasense-io`.

pub mod error;
pub mod fmap;
pub mod raster;
pub mod rgb;

pub use error::{Error, Result};
pub use fmap::FloatMap;
pub use raster::{CHANNELS, Raster, RasterMut};
pub use rgb::{BLUE, GREEN, RED, luminance};
