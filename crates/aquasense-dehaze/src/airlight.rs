//! Atmospheric light estimation
//!
//! The brightest dark-channel pixels mark the most veiled regions, which
//! best represent the color of the scattered light itself. The estimate is
//! the original RGB of the brightest candidate among them.

use crate::{DehazeError, DehazeResult};
use aquasense_core::{FloatMap, Raster};

/// Estimate the global atmospheric light A.
///
/// The brightest `1 - percentile` fraction of dark-channel pixels (at
/// least one) form the candidate set; within it, the pixel whose original
/// R+G+B sum is largest wins. Ties resolve to the earliest pixel in
/// row-major order, keeping the estimate deterministic.
///
/// Returns the winning pixel's channels on the input scale, [0, 255].
///
/// # Errors
///
/// Rejects a percentile outside (0, 1] and a dark channel whose size does
/// not match the image.
pub fn estimate_airlight(
    image: &Raster,
    dark: &FloatMap,
    percentile: f64,
) -> DehazeResult<[f64; 3]> {
    if !(percentile > 0.0 && percentile <= 1.0) {
        return Err(DehazeError::InvalidParameters(format!(
            "airlight percentile must be in (0, 1], got {percentile}"
        )));
    }
    if image.dimensions() != dark.dimensions() {
        return Err(DehazeError::Core(
            aquasense_core::Error::DimensionMismatch {
                expected: image.dimensions(),
                actual: dark.dimensions(),
            },
        ));
    }

    let (w, h) = image.dimensions();
    let total = (w as usize) * (h as usize);
    let candidates = (((1.0 - percentile) * total as f64).ceil() as usize).max(1);

    // Sort flat indices by dark-channel value, brightest first. The index
    // tiebreak keeps the ordering total, so equal values cannot reshuffle.
    let mut order: Vec<usize> = (0..total).collect();
    let dark_data = dark.data();
    order.sort_unstable_by(|&a, &b| {
        dark_data[b]
            .partial_cmp(&dark_data[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut best_sum = -1i32;
    let mut best = [0u8; 3];
    for &idx in order.iter().take(candidates) {
        let x = (idx % w as usize) as u32;
        let y = (idx / w as usize) as u32;
        let [r, g, b] = image.get_pixel_unchecked(x, y);
        let sum = r as i32 + g as i32 + b as i32;
        if sum > best_sum {
            best_sum = sum;
            best = [r, g, b];
        }
    }

    Ok([best[0] as f64, best[1] as f64, best[2] as f64])
}
