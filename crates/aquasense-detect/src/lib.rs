//! aquasense-detect - underwater waste detection seam
//!
//! The detection network itself is a pretrained model served outside this
//! workspace. This crate owns everything around it:
//!
//! - [`WasteClass`] - the model's 15-class vocabulary
//! - [`ObjectDetector`] - the trait an integration implements
//! - [`preprocess`] / [`run`] - the canvas-resample + restoration chain
//!   every upload passes through before inference
//! - [`DetectionSummary`] - per-class statistics for the session report

pub mod class;
mod error;
pub mod preprocess;
pub mod summary;

pub use class::WasteClass;
pub use error::{DetectError, DetectResult};
pub use preprocess::{CANVAS_SIZE, preprocess, resize, resize_to_canvas};
pub use summary::DetectionSummary;

use aquasense_core::Raster;
use aquasense_dehaze::DehazeConfig;

/// One detected object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Predicted class
    pub class: WasteClass,
}

/// Detector output: the annotated image and the detections behind it.
#[derive(Debug, Clone)]
pub struct DetectionOutcome {
    /// Input image with predicted boxes drawn on
    pub annotated: Raster,
    /// Detected objects
    pub detections: Vec<Detection>,
}

/// A pretrained object detector.
///
/// Implementations wrap the serving mechanism (an embedded runtime, a
/// sidecar process, a remote endpoint); the pipeline depends only on this
/// seam.
pub trait ObjectDetector {
    /// Detect objects in a preprocessed, canvas-sized image.
    fn detect(&self, image: &Raster) -> DetectResult<DetectionOutcome>;
}

/// Run the full detection flow on a decoded upload: preprocess, then hand
/// the restored canvas to the detector.
pub fn run<D: ObjectDetector>(
    image: &Raster,
    config: &DehazeConfig,
    detector: &D,
) -> DetectResult<DetectionOutcome> {
    let prepared = preprocess(image, config)?;
    detector.detect(&prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasense_test::gradient_raster;

    /// Stand-in detector reporting a fixed set of classes.
    struct FixedDetector(Vec<WasteClass>);

    impl ObjectDetector for FixedDetector {
        fn detect(&self, image: &Raster) -> DetectResult<DetectionOutcome> {
            Ok(DetectionOutcome {
                annotated: image.deep_clone(),
                detections: self.0.iter().map(|&class| Detection { class }).collect(),
            })
        }
    }

    #[test]
    fn test_run_preprocesses_before_detection() {
        let upload = gradient_raster(200, 120);
        let detector = FixedDetector(vec![WasteClass::PlasticBag, WasteClass::Can]);

        let outcome = run(&upload, &DehazeConfig::default(), &detector).unwrap();
        // The detector saw the canvas-sized restored image.
        assert_eq!(outcome.annotated.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        assert_eq!(outcome.detections.len(), 2);

        let summary = DetectionSummary::from_detections(&outcome.detections);
        assert_eq!(summary.count(WasteClass::PlasticBag), 1);
        assert!(!summary.is_clear());
    }

    #[test]
    fn test_run_clear_water() {
        let upload = gradient_raster(64, 64);
        let detector = FixedDetector(Vec::new());

        let outcome = run(&upload, &DehazeConfig::default(), &detector).unwrap();
        let summary = DetectionSummary::from_detections(&outcome.detections);
        assert!(summary.is_clear());
    }
}
