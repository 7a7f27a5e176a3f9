//! aquasense-dehaze - haze and scattering removal
//!
//! Underwater photographs carry a scattering veil that washes out contrast
//! and starves the downstream detector of edges. This crate removes it with
//! the dark-channel-prior pipeline:
//!
//! 1. [`dark_channel`] - windowed minimum over the color channels
//! 2. [`estimate_airlight`] - global scattered-light color from the
//!    brightest dark-channel pixels
//! 3. [`transmission`] - coarse per-pixel veil estimate
//! 4. [`guided_filter`] - edge-aware refinement against a luminance guide
//! 5. [`recover`] - inversion of the scattering model
//!
//! [`restore`] runs the stages in order. Each stage is also public and
//! pure, so the pipeline can be exercised (and tested) piecewise.
//!
//! Every call is independent: no caching, no shared state, and the input
//! raster is never written to.

pub mod airlight;
pub mod config;
pub mod dark;
mod error;
pub mod guided;
pub mod recover;
pub mod transmission;

pub use airlight::estimate_airlight;
pub use config::DehazeConfig;
pub use dark::{dark_channel, normalized_dark_channel};
pub use error::{DehazeError, DehazeResult};
pub use guided::guided_filter;
pub use recover::recover;
pub use transmission::transmission;

use aquasense_core::{FloatMap, Raster};

/// Output of [`restore`]: the restored image plus the refined transmission
/// map that produced it (useful for diagnostics and tests).
#[derive(Debug, Clone)]
pub struct Restoration {
    /// Restored image, same dimensions as the input
    pub raster: Raster,
    /// Refined transmission, floored to `[transmission_floor, 1]`
    pub transmission: FloatMap,
}

/// Remove the scattering veil from an image.
///
/// Deterministic and synchronous; the result depends only on the input
/// pixels and the configuration. The input is left untouched and a new
/// raster of identical dimensions is returned.
///
/// # Errors
///
/// Fails fast with [`DehazeError::InvalidParameters`] or
/// [`DehazeError::ImageTooSmall`] before any stage runs; no partial output
/// is ever produced.
///
/// # Examples
///
/// ```
/// use aquasense_core::{Raster, RasterMut};
/// use aquasense_dehaze::{DehazeConfig, restore};
///
/// let mut m = RasterMut::new(256, 256).unwrap();
/// m.fill([90, 130, 150]);
/// let image: Raster = m.into();
///
/// let cfg = DehazeConfig {
///     guided_filter_window: 51,
///     ..DehazeConfig::default()
/// };
/// let result = restore(&image, &cfg).unwrap();
/// assert_eq!(result.raster.dimensions(), image.dimensions());
/// ```
pub fn restore(image: &Raster, config: &DehazeConfig) -> DehazeResult<Restoration> {
    let (width, height) = image.dimensions();
    config.validate(width, height)?;

    let dark = dark_channel(image, config.dark_channel_window)?;
    let airlight = estimate_airlight(image, &dark, config.airlight_percentile)?;
    let coarse = transmission(image, airlight, config.dark_channel_window)?;

    let guide = image.to_luminance();
    let mut refined = guided_filter(
        &guide,
        &coarse,
        config.guided_filter_window,
        config.guided_filter_epsilon,
    )?;
    refined.clamp_in_place(config.transmission_floor, 1.0);

    let raster = recover(image, &refined, airlight, config.transmission_floor)?;

    Ok(Restoration {
        raster,
        transmission: refined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasense_core::RasterMut;

    /// Config sized for small test images.
    fn test_config() -> DehazeConfig {
        DehazeConfig {
            dark_channel_window: 5,
            guided_filter_window: 15,
            ..DehazeConfig::default()
        }
    }

    fn colorful(w: u32, h: u32) -> Raster {
        let mut m = RasterMut::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                // Saturated palette: one channel always near zero, so the
                // scene itself carries no veil.
                m.set_pixel_unchecked(
                    x,
                    y,
                    [(x * 255 / w) as u8, (y * 255 / h) as u8, 0],
                );
            }
        }
        m.into()
    }

    #[test]
    fn test_shape_and_determinism() {
        let image = colorful(48, 32);
        let cfg = test_config();

        let r1 = restore(&image, &cfg).unwrap();
        let r2 = restore(&image, &cfg).unwrap();

        assert_eq!(r1.raster.dimensions(), (48, 32));
        assert_eq!(r1.transmission.dimensions(), (48, 32));
        assert_eq!(r1.raster.data(), r2.raster.data());
        assert_eq!(r1.transmission.data(), r2.transmission.data());
    }

    #[test]
    fn test_haze_free_input_close_to_identity() {
        // Zero dark channel everywhere: transmission should sit at 1 and
        // the restoration should track the input closely.
        let image = colorful(48, 48);
        let result = restore(&image, &test_config()).unwrap();

        assert!(result.transmission.min() > 0.95);

        let mut total = 0.0f64;
        for y in 0..48 {
            for x in 0..48 {
                let a = image.get_pixel_unchecked(x, y);
                let b = result.raster.get_pixel_unchecked(x, y);
                for c in 0..3 {
                    total += (a[c] as f64 - b[c] as f64).abs();
                }
            }
        }
        let mad = total / (48.0 * 48.0 * 3.0);
        assert!(mad < 5.0, "mean absolute difference {mad}");
    }

    #[test]
    fn test_transmission_floored() {
        // Uniform gray: the image equals its own airlight, the coarse
        // transmission collapses to 0, and the floor must hold.
        let mut m = RasterMut::new(32, 32).unwrap();
        m.fill([150, 150, 150]);
        let image: Raster = m.into();

        let result = restore(&image, &test_config()).unwrap();
        assert!(result.transmission.min() >= 0.1);
        assert!(result.transmission.max() <= 1.0);
    }

    #[test]
    fn test_uniform_image_stable() {
        // Flat single-color input: zero variance everywhere must not
        // produce NaN in the transmission or panic in recovery.
        let mut m = RasterMut::new(24, 24).unwrap();
        m.fill([77, 77, 77]);
        let image: Raster = m.into();

        let result = restore(&image, &test_config()).unwrap();
        for v in result.transmission.data() {
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_rejects_too_small_image() {
        let image = colorful(4, 4);
        assert!(matches!(
            restore(&image, &test_config()),
            Err(DehazeError::ImageTooSmall { .. })
        ));
    }

    #[test]
    fn test_input_not_mutated() {
        let image = colorful(32, 32);
        let before = image.data().to_vec();
        let _ = restore(&image, &test_config()).unwrap();
        assert_eq!(image.data(), &before[..]);
    }
}
