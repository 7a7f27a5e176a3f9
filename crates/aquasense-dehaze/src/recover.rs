//! Scene radiance recovery
//!
//! Inverts the scattering model `I = J*t + A*(1 - t)` pixel by pixel:
//! `J = (I - A) / max(t, t0) + A`, clamped to the display range. The floor
//! t0 bounds the division in heavily veiled regions, where a tiny t would
//! otherwise amplify sensor noise into the output.

use crate::{DehazeError, DehazeResult};
use aquasense_core::{FloatMap, Raster, RasterMut};

/// Recover the restored image from the observed raster, a transmission
/// map and the airlight estimate.
///
/// # Errors
///
/// Rejects a transmission map whose size differs from the image and a
/// floor outside (0, 1].
pub fn recover(
    image: &Raster,
    transmission: &FloatMap,
    airlight: [f64; 3],
    floor: f32,
) -> DehazeResult<Raster> {
    if image.dimensions() != transmission.dimensions() {
        return Err(DehazeError::Core(
            aquasense_core::Error::DimensionMismatch {
                expected: image.dimensions(),
                actual: transmission.dimensions(),
            },
        ));
    }
    if !(floor > 0.0 && floor <= 1.0) {
        return Err(DehazeError::InvalidParameters(format!(
            "transmission floor must be in (0, 1], got {floor}"
        )));
    }

    let (w, h) = image.dimensions();
    let mut out = RasterMut::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let t = transmission.get_pixel_unchecked(x, y).max(floor) as f64;
            let px = image.get_pixel_unchecked(x, y);
            let mut restored = [0u8; 3];
            for c in 0..3 {
                let j = (px[c] as f64 - airlight[c]) / t + airlight[c];
                restored[c] = (j + 0.5).clamp(0.0, 255.0) as u8;
            }
            out.set_pixel_unchecked(x, y, restored);
        }
    }

    Ok(out.into())
}
