//! Error types for aquasense-detect

use thiserror::Error;

/// Errors from the detection pipeline.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Container error from the core crate
    #[error("core error: {0}")]
    Core(#[from] aquasense_core::Error),

    /// Restoration failed before detection
    #[error("restoration error: {0}")]
    Dehaze(#[from] aquasense_dehaze::DehazeError),

    /// A class index outside the model's vocabulary
    #[error("unknown class index: {0}")]
    UnknownClass(usize),

    /// The external detector failed
    #[error("detector error: {0}")]
    Detector(String),
}

/// Result type for detection operations
pub type DetectResult<T> = Result<T, DetectError>;
