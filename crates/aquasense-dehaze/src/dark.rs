//! Dark channel computation
//!
//! In haze-free underwater patches at least one color channel is close to
//! zero; scattered light lifts that minimum. The dark channel - the
//! windowed minimum over all three channels - is therefore a per-pixel
//! haze indicator and the input to both the airlight and transmission
//! estimates.

use crate::{DehazeError, DehazeResult};
use aquasense_core::{FloatMap, Raster};

/// Smallest airlight component used when normalizing, on a [0, 1] scale.
/// Prevents the channel division from blowing up on near-black airlight.
const MIN_AIRLIGHT: f64 = 1e-3;

fn check_window(image: &Raster, window: u32) -> DehazeResult<()> {
    if window == 0 || window % 2 == 0 {
        return Err(DehazeError::InvalidParameters(format!(
            "dark channel window must be odd and positive, got {window}"
        )));
    }
    let (w, h) = image.dimensions();
    if w < window || h < window {
        return Err(DehazeError::ImageTooSmall {
            what: "dark channel",
            window,
            width: w,
            height: h,
        });
    }
    Ok(())
}

/// Windowed minimum with replicated borders.
///
/// Each output value is the minimum of the input over the square
/// neighborhood of the given radius, clamped at the image edges.
fn erode_min(map: &FloatMap, radius: u32) -> FloatMap {
    let (w, h) = map.dimensions();
    // Dimensions come from an existing map and are valid.
    FloatMap::from_fn(w, h, |x, y| {
        let x0 = x.saturating_sub(radius);
        let y0 = y.saturating_sub(radius);
        let x1 = (x + radius).min(w - 1);
        let y1 = (y + radius).min(h - 1);

        let mut min_val = f32::INFINITY;
        for yy in y0..=y1 {
            for xx in x0..=x1 {
                let v = map.get_pixel_unchecked(xx, yy);
                if v < min_val {
                    min_val = v;
                }
            }
        }
        min_val
    })
    .unwrap()
}

/// Compute the dark channel of an image.
///
/// Output values share the input scale, [0, 255].
///
/// # Errors
///
/// Rejects even or zero windows and images smaller than the window.
pub fn dark_channel(image: &Raster, window: u32) -> DehazeResult<FloatMap> {
    check_window(image, window)?;
    let (w, h) = image.dimensions();

    let channel_min = FloatMap::from_fn(w, h, |x, y| {
        let [r, g, b] = image.get_pixel_unchecked(x, y);
        r.min(g).min(b) as f32
    })?;

    Ok(erode_min(&channel_min, (window - 1) / 2))
}

/// Dark channel of the airlight-normalized image, `min_c(I_c / A_c)`.
///
/// Values are ratios: 0 where some channel vanishes, 1 where the darkest
/// channel matches the airlight, above 1 where the scene outshines it.
///
/// # Errors
///
/// Same window and size checks as [`dark_channel`].
pub fn normalized_dark_channel(
    image: &Raster,
    airlight: [f64; 3],
    window: u32,
) -> DehazeResult<FloatMap> {
    check_window(image, window)?;
    let (w, h) = image.dimensions();

    let a = [
        (airlight[0] / 255.0).max(MIN_AIRLIGHT),
        (airlight[1] / 255.0).max(MIN_AIRLIGHT),
        (airlight[2] / 255.0).max(MIN_AIRLIGHT),
    ];

    let channel_min = FloatMap::from_fn(w, h, |x, y| {
        let [r, g, b] = image.get_pixel_unchecked(x, y);
        let rn = (r as f64 / 255.0) / a[0];
        let gn = (g as f64 / 255.0) / a[1];
        let bn = (b as f64 / 255.0) / a[2];
        rn.min(gn).min(bn) as f32
    })?;

    Ok(erode_min(&channel_min, (window - 1) / 2))
}
