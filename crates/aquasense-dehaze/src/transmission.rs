//! Coarse transmission estimation
//!
//! In the scattering model `I = J*t + A*(1 - t)`, the transmission t is the
//! fraction of scene radiance that reaches the sensor directly. The dark
//! channel of the airlight-normalized image estimates the veil strength, so
//! `t = 1 - dark(I / A)`.

use crate::DehazeResult;
use crate::dark::normalized_dark_channel;
use aquasense_core::{FloatMap, Raster};

/// Estimate the coarse transmission map, clamped to [0, 1].
///
/// The estimate is blocky at object boundaries (an artifact of the windowed
/// minimum) and is refined by the guided filter before recovery.
///
/// # Errors
///
/// Same window and size checks as the dark channel.
pub fn transmission(image: &Raster, airlight: [f64; 3], window: u32) -> DehazeResult<FloatMap> {
    let mut t = normalized_dark_channel(image, airlight, window)?;
    for v in t.data_mut() {
        *v = (1.0 - *v).clamp(0.0, 1.0);
    }
    Ok(t)
}
