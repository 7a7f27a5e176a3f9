//! Error types for aquasense-dehaze

use thiserror::Error;

/// Errors raised by the restoration engine
///
/// Every failure is detected before any output buffer is produced; the
/// engine never returns a partially restored image.
#[derive(Debug, Error)]
pub enum DehazeError {
    /// Container error from the core crate
    #[error("core error: {0}")]
    Core(#[from] aquasense_core::Error),

    /// Invalid parameter values
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Image too small for the requested filter window
    #[error("image {width}x{height} too small for {what} window {window}")]
    ImageTooSmall {
        /// Which window failed the check
        what: &'static str,
        /// Requested window size in pixels
        window: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

/// Result type for restoration operations
pub type DehazeResult<T> = Result<T, DehazeError>;
