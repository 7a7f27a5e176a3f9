//! Color channel helpers and grayscale conversion.

use crate::fmap::FloatMap;
use crate::raster::Raster;

/// Red channel index within an interleaved pixel
pub const RED: usize = 0;
/// Green channel index
pub const GREEN: usize = 1;
/// Blue channel index
pub const BLUE: usize = 2;

/// Rec. 601 luminance weights, as used by the detector preprocessing chain.
pub const RED_WEIGHT: f32 = 0.299;
pub const GREEN_WEIGHT: f32 = 0.587;
pub const BLUE_WEIGHT: f32 = 0.114;

/// Luminance of one RGB triple, on the same scale as the inputs.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b
}

impl Raster {
    /// Convert to a luminance map with values scaled to [0, 1].
    ///
    /// This is the guide image used by the edge-aware refinement step:
    /// a structurally faithful single-channel view of the input.
    pub fn to_luminance(&self) -> FloatMap {
        let (w, h) = self.dimensions();
        // Dimensions of an existing raster are always valid.
        FloatMap::from_fn(w, h, |x, y| {
            let [r, g, b] = self.get_pixel_unchecked(x, y);
            luminance(r as f32, g as f32, b as f32) / 255.0
        })
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterMut;

    #[test]
    fn test_luminance_weights_sum_to_one() {
        assert!((RED_WEIGHT + GREEN_WEIGHT + BLUE_WEIGHT - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_gray_is_identity() {
        assert!((luminance(128.0, 128.0, 128.0) - 128.0).abs() < 1e-3);
    }

    #[test]
    fn test_to_luminance_range() {
        let mut m = RasterMut::new(4, 4).unwrap();
        m.fill([255, 255, 255]);
        let raster: Raster = m.into();
        let lum = raster.to_luminance();
        assert_eq!(lum.dimensions(), (4, 4));
        assert!((lum.max() - 1.0).abs() < 1e-5);
        assert!((lum.min() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_to_luminance_black() {
        let raster = Raster::new(3, 3).unwrap();
        let lum = raster.to_luminance();
        assert_eq!(lum.max(), 0.0);
    }
}
