//! Potability classifier interface
//!
//! The potability model is a pretrained gradient-boosted classifier served
//! outside this workspace; this module defines only the feature vector it
//! consumes and the trait an integration implements.

use crate::AssessError;
use crate::habitat::WaterSample;

/// Perceived water color categories, as captured on the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaterColor {
    Colorless,
    NearColorless,
    FaintYellow,
    LightYellow,
    Yellow,
    /// Not recorded
    #[default]
    Unknown,
}

impl WaterColor {
    /// Form label for this category.
    pub fn label(self) -> &'static str {
        match self {
            WaterColor::Colorless => "Colorless",
            WaterColor::NearColorless => "Near Colorless",
            WaterColor::FaintYellow => "Faint Yellow",
            WaterColor::LightYellow => "Light Yellow",
            WaterColor::Yellow => "Yellow",
            WaterColor::Unknown => "NaN",
        }
    }
}

/// The 15-feature input of the pretrained potability classifier: the 13
/// habitat parameters plus perceived color and odor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PotabilitySample {
    /// The shared chemical/physical parameters
    pub water: WaterSample,
    /// Perceived color category
    pub color: WaterColor,
    /// Odor intensity
    pub odor: f64,
}

/// Potability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotabilityVerdict {
    /// Fit for drinking and irrigation
    Fit,
    /// Not suitable for use
    Unfit,
}

impl PotabilityVerdict {
    /// Wire label: 0 = fit, 1 = unfit.
    pub fn as_label(self) -> u8 {
        match self {
            PotabilityVerdict::Fit => 0,
            PotabilityVerdict::Unfit => 1,
        }
    }

    /// Parse the classifier's wire label.
    pub fn from_label(label: u8) -> Result<Self, AssessError> {
        match label {
            0 => Ok(PotabilityVerdict::Fit),
            1 => Ok(PotabilityVerdict::Unfit),
            other => Err(AssessError::InvalidLabel(other)),
        }
    }
}

/// A pretrained potability classifier.
///
/// Implementations wrap whatever serving mechanism hosts the model; the
/// assessment flow depends only on this seam.
pub trait PotabilityClassifier {
    /// Classify one sample.
    fn predict(&self, sample: &PotabilitySample) -> Result<PotabilityVerdict, AssessError>;
}
