//! Restoration parameters

use crate::{DehazeError, DehazeResult};

/// Parameters of the haze removal pipeline.
///
/// All fields are independently configurable; the defaults match the
/// settings the detection chain runs with in production.
///
/// The refinement window is much larger than the dark-channel window: the
/// veil estimate is smoothed at a coarse spatial scale while the guide
/// image keeps object boundaries sharp.
#[derive(Debug, Clone, PartialEq)]
pub struct DehazeConfig {
    /// Square neighborhood for the dark channel, odd, in pixels.
    pub dark_channel_window: u32,
    /// Fraction in (0, 1]; the brightest `1 - p` share of dark-channel
    /// pixels become airlight candidates (never fewer than one pixel).
    pub airlight_percentile: f64,
    /// Span of the guided-filter box windows, in pixels. The effective
    /// radius is `window / 2`. Must fit inside the image.
    pub guided_filter_window: u32,
    /// Regularization added to the local variance of the guide. Keeps the
    /// per-window regression finite on flat regions.
    pub guided_filter_epsilon: f64,
    /// Lower bound t0 on transmission before the recovery division.
    pub transmission_floor: f32,
}

impl Default for DehazeConfig {
    fn default() -> Self {
        DehazeConfig {
            dark_channel_window: 15,
            airlight_percentile: 0.95,
            guided_filter_window: 200,
            guided_filter_epsilon: 1e-6,
            transmission_floor: 0.1,
        }
    }
}

impl DehazeConfig {
    /// Check the parameter set against an image of the given size.
    ///
    /// # Errors
    ///
    /// [`DehazeError::InvalidParameters`] for out-of-range values,
    /// [`DehazeError::ImageTooSmall`] when a window does not fit.
    pub fn validate(&self, width: u32, height: u32) -> DehazeResult<()> {
        if self.dark_channel_window == 0 || self.dark_channel_window % 2 == 0 {
            return Err(DehazeError::InvalidParameters(format!(
                "dark channel window must be odd and positive, got {}",
                self.dark_channel_window
            )));
        }
        if self.guided_filter_window == 0 {
            return Err(DehazeError::InvalidParameters(
                "guided filter window must be positive".into(),
            ));
        }
        if !(self.airlight_percentile > 0.0 && self.airlight_percentile <= 1.0) {
            return Err(DehazeError::InvalidParameters(format!(
                "airlight percentile must be in (0, 1], got {}",
                self.airlight_percentile
            )));
        }
        if !(self.guided_filter_epsilon > 0.0) || !self.guided_filter_epsilon.is_finite() {
            return Err(DehazeError::InvalidParameters(format!(
                "guided filter epsilon must be positive and finite, got {}",
                self.guided_filter_epsilon
            )));
        }
        if !(self.transmission_floor > 0.0 && self.transmission_floor <= 1.0) {
            return Err(DehazeError::InvalidParameters(format!(
                "transmission floor must be in (0, 1], got {}",
                self.transmission_floor
            )));
        }
        if width < self.dark_channel_window || height < self.dark_channel_window {
            return Err(DehazeError::ImageTooSmall {
                what: "dark channel",
                window: self.dark_channel_window,
                width,
                height,
            });
        }
        if width < self.guided_filter_window || height < self.guided_filter_window {
            return Err(DehazeError::ImageTooSmall {
                what: "guided filter",
                window: self.guided_filter_window,
                width,
                height,
            });
        }
        Ok(())
    }
}
