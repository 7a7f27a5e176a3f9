//! AquaSense - water quality assessment toolkit
//!
//! Rust implementation of the AquaSense analysis stack: restoration of
//! hazy underwater imagery for waste detection, plus rule-based and
//! model-backed water quality assessment.
//!
//! # Overview
//!
//! - Image containers and I/O for the two upload formats (PNG, JPEG)
//! - Dark-channel-prior haze removal with guided-filter refinement
//! - Detector preprocessing (fixed canvas + restoration) and the
//!   detection seam
//! - Habitat suitability rules (US EPA / WHO limits) and the potability
//!   classifier seam
//!
//! # Example
//!
//! ```
//! use aquasense::{Raster, RasterMut};
//! use aquasense::dehaze::{DehazeConfig, restore};
//!
//! let mut m = RasterMut::new(256, 256).unwrap();
//! m.fill([90, 130, 150]);
//! let image: Raster = m.into();
//!
//! let cfg = DehazeConfig {
//!     guided_filter_window: 51,
//!     ..DehazeConfig::default()
//! };
//! let restored = restore(&image, &cfg).unwrap();
//! assert_eq!(restored.raster.dimensions(), image.dimensions());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use aquasense_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use aquasense_assess as assess;
pub use aquasense_dehaze as dehaze;
pub use aquasense_detect as detect;
pub use aquasense_io as io;
