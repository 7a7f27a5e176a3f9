//! Error types for aquasense-assess

use thiserror::Error;

/// Errors from assessment operations and classifier integrations.
#[derive(Debug, Error)]
pub enum AssessError {
    /// A classifier returned a label outside {0, 1}
    #[error("invalid classifier label: {0}")]
    InvalidLabel(u8),

    /// A classifier integration failed to produce a prediction
    #[error("classifier error: {0}")]
    Classifier(String),
}
