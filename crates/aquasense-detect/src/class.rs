//! Detector class vocabulary
//!
//! The 15 waste categories of the pretrained underwater detection model,
//! in the model's output index order.

use crate::{DetectError, DetectResult};

/// Waste class recognized by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum WasteClass {
    Mask = 0,
    Can = 1,
    Cellphone = 2,
    Electronics = 3,
    GlassBottle = 4,
    Glove = 5,
    Metal = 6,
    Misc = 7,
    Net = 8,
    PlasticBag = 9,
    PlasticBottle = 10,
    Plastic = 11,
    Rod = 12,
    Sunglasses = 13,
    Tire = 14,
}

impl WasteClass {
    /// All classes in model index order.
    pub const ALL: [WasteClass; 15] = [
        WasteClass::Mask,
        WasteClass::Can,
        WasteClass::Cellphone,
        WasteClass::Electronics,
        WasteClass::GlassBottle,
        WasteClass::Glove,
        WasteClass::Metal,
        WasteClass::Misc,
        WasteClass::Net,
        WasteClass::PlasticBag,
        WasteClass::PlasticBottle,
        WasteClass::Plastic,
        WasteClass::Rod,
        WasteClass::Sunglasses,
        WasteClass::Tire,
    ];

    /// The model's output index for this class.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a model output index to its class.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::UnknownClass`] for indices outside the
    /// vocabulary.
    pub fn from_index(index: usize) -> DetectResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DetectError::UnknownClass(index))
    }

    /// The label string used in the model's training data.
    pub fn label(self) -> &'static str {
        match self {
            WasteClass::Mask => "Mask",
            WasteClass::Can => "can",
            WasteClass::Cellphone => "cellphone",
            WasteClass::Electronics => "electronics",
            WasteClass::GlassBottle => "gbottle",
            WasteClass::Glove => "glove",
            WasteClass::Metal => "metal",
            WasteClass::Misc => "misc",
            WasteClass::Net => "net",
            WasteClass::PlasticBag => "pbag",
            WasteClass::PlasticBottle => "pbottle",
            WasteClass::Plastic => "plastic",
            WasteClass::Rod => "rod",
            WasteClass::Sunglasses => "sunglasses",
            WasteClass::Tire => "tire",
        }
    }
}
