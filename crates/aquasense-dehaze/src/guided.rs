//! Guided filtering (edge-aware refinement)
//!
//! The guided filter fits, per local window, a linear model from the guide
//! image to the input map and averages the coefficients over all windows
//! containing each pixel. Edges present in the guide survive; blocky
//! artifacts in flat regions are smoothed away.
//!
//! All window means are computed with an integral image (summed-area
//! table), so the cost is O(width * height) regardless of window size. The
//! accumulator is f64: window sums over large windows exceed the 24-bit
//! mantissa of f32.

use crate::{DehazeError, DehazeResult};
use aquasense_core::FloatMap;

/// Summed-area table with a zero row and column prepended, (h+1) x (w+1).
struct Integral {
    data: Vec<f64>,
    width: usize,
}

impl Integral {
    fn build(map: &FloatMap) -> Integral {
        let w = map.width() as usize;
        let h = map.height() as usize;
        let iw = w + 1;
        let mut data = vec![0.0f64; iw * (h + 1)];

        for y in 0..h {
            let mut row_sum = 0.0f64;
            for x in 0..w {
                row_sum += map.get_pixel_unchecked(x as u32, y as u32) as f64;
                data[(y + 1) * iw + (x + 1)] = data[y * iw + (x + 1)] + row_sum;
            }
        }

        Integral { data, width: iw }
    }

    /// Sum over the inclusive pixel rectangle [x0, x1] x [y0, y1].
    #[inline]
    fn rect_sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> f64 {
        let iw = self.width;
        self.data[(y1 + 1) * iw + (x1 + 1)] - self.data[y0 * iw + (x1 + 1)]
            - self.data[(y1 + 1) * iw + x0]
            + self.data[y0 * iw + x0]
    }
}

/// Local mean over a square window of the given radius, borders clamped.
///
/// The window shrinks at the image edges; the divisor is the true pixel
/// count of the clamped window.
fn box_mean(map: &FloatMap, radius: u32) -> FloatMap {
    let (w, h) = map.dimensions();
    let acc = Integral::build(map);
    let r = radius as usize;

    FloatMap::from_fn(w, h, |x, y| {
        let x = x as usize;
        let y = y as usize;
        let x0 = x.saturating_sub(r);
        let y0 = y.saturating_sub(r);
        let x1 = (x + r).min(w as usize - 1);
        let y1 = (y + r).min(h as usize - 1);

        let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f64;
        (acc.rect_sum(x0, y0, x1, y1) / count) as f32
    })
    .unwrap()
}

/// Pointwise product of two same-sized maps.
fn product(a: &FloatMap, b: &FloatMap) -> FloatMap {
    let (w, h) = a.dimensions();
    FloatMap::from_fn(w, h, |x, y| {
        a.get_pixel_unchecked(x, y) * b.get_pixel_unchecked(x, y)
    })
    .unwrap()
}

/// Filter `input` using `guide`, with box windows spanning `window` pixels
/// (radius `window / 2`) and variance regularization `epsilon`.
///
/// Per window k: `a_k = cov(g, p) / (var(g) + eps)`, `b_k = mean(p) - a_k *
/// mean(g)`; the output is `mean(a) * g + mean(b)` with the coefficient
/// means taken over all windows covering the pixel. Zero-variance windows
/// degrade gracefully to plain averaging: epsilon keeps a_k finite and near
/// zero there.
///
/// # Errors
///
/// Rejects mismatched dimensions, a zero window, a non-positive epsilon,
/// and a window exceeding either image dimension.
pub fn guided_filter(
    guide: &FloatMap,
    input: &FloatMap,
    window: u32,
    epsilon: f64,
) -> DehazeResult<FloatMap> {
    if guide.dimensions() != input.dimensions() {
        return Err(DehazeError::Core(
            aquasense_core::Error::DimensionMismatch {
                expected: guide.dimensions(),
                actual: input.dimensions(),
            },
        ));
    }
    if window == 0 {
        return Err(DehazeError::InvalidParameters(
            "guided filter window must be positive".into(),
        ));
    }
    if !(epsilon > 0.0) || !epsilon.is_finite() {
        return Err(DehazeError::InvalidParameters(format!(
            "guided filter epsilon must be positive and finite, got {epsilon}"
        )));
    }
    let (w, h) = guide.dimensions();
    if w < window || h < window {
        return Err(DehazeError::ImageTooSmall {
            what: "guided filter",
            window,
            width: w,
            height: h,
        });
    }

    let radius = window / 2;
    let eps = epsilon as f32;

    let mean_g = box_mean(guide, radius);
    let mean_p = box_mean(input, radius);
    let corr_gg = box_mean(&product(guide, guide), radius);
    let corr_gp = box_mean(&product(guide, input), radius);

    let mut a = FloatMap::new(w, h)?;
    let mut b = FloatMap::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let mg = mean_g.get_pixel_unchecked(x, y);
            let mp = mean_p.get_pixel_unchecked(x, y);
            let var_g = corr_gg.get_pixel_unchecked(x, y) - mg * mg;
            let cov_gp = corr_gp.get_pixel_unchecked(x, y) - mg * mp;

            // var_g can go slightly negative from cancellation; epsilon
            // keeps the denominator positive either way.
            let ak = cov_gp / (var_g + eps);
            a.set_pixel_unchecked(x, y, ak);
            b.set_pixel_unchecked(x, y, mp - ak * mg);
        }
    }

    let mean_a = box_mean(&a, radius);
    let mean_b = box_mean(&b, radius);

    Ok(FloatMap::from_fn(w, h, |x, y| {
        mean_a.get_pixel_unchecked(x, y) * guide.get_pixel_unchecked(x, y)
            + mean_b.get_pixel_unchecked(x, y)
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_mean_uniform() {
        let map = FloatMap::new_with_value(20, 20, 3.5).unwrap();
        let mean = box_mean(&map, 4);
        for y in 0..20 {
            for x in 0..20 {
                assert!((mean.get_pixel_unchecked(x, y) - 3.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_box_mean_small_window_exact() {
        // 3x3 map with values 1..9; center mean is 5.
        let map = FloatMap::from_data(
            3,
            3,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
        .unwrap();
        let mean = box_mean(&map, 1);
        assert!((mean.get_pixel_unchecked(1, 1) - 5.0).abs() < 1e-6);
        // Corner window covers {1, 2, 4, 5}.
        assert!((mean.get_pixel_unchecked(0, 0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_input_passes_through() {
        // Constant input: cov = 0, a = 0, b = mean = the constant.
        let guide = FloatMap::from_fn(30, 30, |x, _| x as f32 / 30.0).unwrap();
        let input = FloatMap::new_with_value(30, 30, 0.7).unwrap();
        let out = guided_filter(&guide, &input, 9, 1e-6).unwrap();
        for y in 0..30 {
            for x in 0..30 {
                assert!(
                    (out.get_pixel_unchecked(x, y) - 0.7).abs() < 1e-4,
                    "({x},{y}) = {}",
                    out.get_pixel_unchecked(x, y)
                );
            }
        }
    }

    #[test]
    fn test_degenerate_flat_guide_no_nan() {
        // Zero-variance guide: the regression is degenerate, epsilon must
        // keep everything finite and the output equal to the input mean.
        let guide = FloatMap::new_with_value(20, 20, 0.5).unwrap();
        let input = FloatMap::from_fn(20, 20, |x, y| ((x + y) % 2) as f32).unwrap();
        let out = guided_filter(&guide, &input, 5, 1e-6).unwrap();
        for v in out.data() {
            assert!(v.is_finite());
            assert!((*v - 0.5).abs() < 0.2, "smoothed value {v}");
        }
    }

    #[test]
    fn test_edge_following_guide() {
        // Step guide, noisy step input: the output should stay close to the
        // input's plateau values on each side of the edge.
        let guide = FloatMap::from_fn(40, 20, |x, _| if x < 20 { 0.0 } else { 1.0 }).unwrap();
        let input = FloatMap::from_fn(40, 20, |x, y| {
            let base = if x < 20 { 0.2 } else { 0.8 };
            base + if (x + y) % 2 == 0 { 0.05 } else { -0.05 }
        })
        .unwrap();

        let out = guided_filter(&guide, &input, 7, 1e-4).unwrap();
        // Sample well away from the edge.
        assert!((out.get_pixel_unchecked(5, 10) - 0.2).abs() < 0.1);
        assert!((out.get_pixel_unchecked(35, 10) - 0.8).abs() < 0.1);
        // The edge itself stays sharp: a one-pixel step in the guide maps
        // to a large jump in the output.
        let left = out.get_pixel_unchecked(18, 10);
        let right = out.get_pixel_unchecked(21, 10);
        assert!(right - left > 0.3, "edge collapsed: {left} .. {right}");
    }

    #[test]
    fn test_smoothing_reduces_variance() {
        let guide = FloatMap::new_with_value(30, 30, 0.5).unwrap();
        let input = FloatMap::from_fn(30, 30, |x, y| ((x * 7 + y * 13) % 10) as f32 / 10.0).unwrap();
        let out = guided_filter(&guide, &input, 9, 1e-3).unwrap();

        let var = |m: &FloatMap| {
            let n = m.data().len() as f32;
            let mean = m.data().iter().sum::<f32>() / n;
            m.data().iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n
        };
        assert!(var(&out) < var(&input));
    }

    #[test]
    fn test_parameter_validation() {
        let map = FloatMap::new(10, 10).unwrap();
        let small = FloatMap::new(5, 5).unwrap();
        assert!(guided_filter(&map, &small, 3, 1e-6).is_err());
        assert!(guided_filter(&map, &map, 0, 1e-6).is_err());
        assert!(guided_filter(&map, &map, 3, 0.0).is_err());
        assert!(guided_filter(&map, &map, 3, -1.0).is_err());
        assert!(matches!(
            guided_filter(&map, &map, 11, 1e-6),
            Err(DehazeError::ImageTooSmall { .. })
        ));
    }
}
