//! Synthetic fixture builders
//!
//! Deterministic rasters with known properties, shared by the workspace's
//! regression tests.

use aquasense_core::{Raster, RasterMut};

/// Flat single-color raster.
pub fn uniform_raster(width: u32, height: u32, rgb: [u8; 3]) -> Raster {
    let mut m = RasterMut::new(width, height).expect("nonzero fixture dimensions");
    m.fill(rgb);
    m.into()
}

/// Smooth two-axis gradient covering the full 8-bit range.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut m = RasterMut::new(width, height).expect("nonzero fixture dimensions");
    for y in 0..height {
        for x in 0..width {
            m.set_pixel_unchecked(
                x,
                y,
                [
                    (x * 255 / width.max(1)) as u8,
                    (y * 255 / height.max(1)) as u8,
                    ((x + y) * 255 / (width + height)) as u8,
                ],
            );
        }
    }
    m.into()
}

/// Gradient raster whose blue channel is pinned at zero, so the dark
/// channel vanishes everywhere: a scene with no veil of its own.
pub fn saturated_raster(width: u32, height: u32) -> Raster {
    let mut m = RasterMut::new(width, height).expect("nonzero fixture dimensions");
    for y in 0..height {
        for x in 0..width {
            m.set_pixel_unchecked(
                x,
                y,
                [(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 0],
            );
        }
    }
    m.into()
}

/// Lay a synthetic veil over a clean raster: `I = J*t + A*(1 - t)` with a
/// constant transmission `t` and airlight `airlight`.
///
/// # Panics
///
/// Panics if `t` is outside [0, 1].
pub fn composite_haze(clean: &Raster, t: f64, airlight: [f64; 3]) -> Raster {
    assert!((0.0..=1.0).contains(&t), "transmission {t} outside [0, 1]");

    let (w, h) = clean.dimensions();
    let mut m = RasterMut::new(w, h).expect("clean raster has valid dimensions");
    for y in 0..h {
        for x in 0..w {
            let j = clean.get_pixel_unchecked(x, y);
            let mut px = [0u8; 3];
            for c in 0..3 {
                let v = j[c] as f64 * t + airlight[c] * (1.0 - t);
                px[c] = (v + 0.5).clamp(0.0, 255.0) as u8;
            }
            m.set_pixel_unchecked(x, y, px);
        }
    }
    m.into()
}
