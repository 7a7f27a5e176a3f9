//! aquasense-assess - water quality assessment
//!
//! Two assessment paths share one parameter record:
//!
//! - [`assess_habitat`] - deterministic US EPA / WHO range checks for
//!   aquatic-life habitat suitability, with per-parameter
//!   [`violations`] diagnostics
//! - [`PotabilityClassifier`] - the seam for the externally served,
//!   pretrained potability model
//!
//! [`AssessmentLog`] accumulates verdicts for session reports.

mod error;
pub mod habitat;
pub mod log;
pub mod potability;

pub use error::AssessError;
pub use habitat::{HabitatVerdict, Violation, WaterSample, assess_habitat, violations};
pub use log::AssessmentLog;
pub use potability::{
    PotabilityClassifier, PotabilitySample, PotabilityVerdict, WaterColor,
};
