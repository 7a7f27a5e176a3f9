//! Detector-side preprocessing
//!
//! Every upload goes through the same chain before it reaches the model:
//! resample to the detector's square canvas, then strip the scattering
//! veil. The detector was trained on restored imagery, so the chain is not
//! optional.

use crate::DetectResult;
use aquasense_core::{Raster, RasterMut};
use aquasense_dehaze::{DehazeConfig, restore};

/// Side length of the detector's input canvas.
pub const CANVAS_SIZE: u32 = 416;

/// Resample a raster to an arbitrary size with bilinear interpolation.
///
/// # Errors
///
/// Rejects zero target dimensions.
pub fn resize(raster: &Raster, width: u32, height: u32) -> DetectResult<Raster> {
    let (src_w, src_h) = raster.dimensions();
    let mut out = RasterMut::new(width, height)?;

    // Pixel-center mapping; degenerate axes fall back to a plain copy of
    // the single source coordinate.
    let scale_x = src_w as f64 / width as f64;
    let scale_y = src_h as f64 / height as f64;

    for y in 0..height {
        let sy = ((y as f64 + 0.5) * scale_y - 0.5).max(0.0);
        let y0 = (sy as u32).min(src_h - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = sy - y0 as f64;

        for x in 0..width {
            let sx = ((x as f64 + 0.5) * scale_x - 0.5).max(0.0);
            let x0 = (sx as u32).min(src_w - 1);
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f64;

            let p00 = raster.get_pixel_unchecked(x0, y0);
            let p10 = raster.get_pixel_unchecked(x1, y0);
            let p01 = raster.get_pixel_unchecked(x0, y1);
            let p11 = raster.get_pixel_unchecked(x1, y1);

            let mut px = [0u8; 3];
            for c in 0..3 {
                let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
                let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
                px[c] = (top * (1.0 - fy) + bottom * fy + 0.5).clamp(0.0, 255.0) as u8;
            }
            out.set_pixel_unchecked(x, y, px);
        }
    }

    Ok(out.into())
}

/// Resample to the detector canvas.
pub fn resize_to_canvas(raster: &Raster) -> DetectResult<Raster> {
    resize(raster, CANVAS_SIZE, CANVAS_SIZE)
}

/// Full detector-side preprocessing: canvas resample, then restoration.
pub fn preprocess(raster: &Raster, config: &DehazeConfig) -> DetectResult<Raster> {
    let canvas = resize_to_canvas(raster)?;
    let restored = restore(&canvas, config)?;
    Ok(restored.raster)
}
