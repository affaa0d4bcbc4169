//! Type definitions for skin image analysis.
//!
//! `SkinAnalysis` is the record handed from the photo step to the results
//! report. Enum values serialize in lowercase to match their display badges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AyurSkinError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Smooth,
    Rough,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Oiliness {
    Dry,
    Normal,
    Oily,
    Combination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pigmentation {
    Even,
    Uneven,
    Hyperpigmented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Redness {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Texture {
    pub fn label(&self) -> &'static str {
        match self {
            Texture::Smooth => "Smooth",
            Texture::Rough => "Rough",
            Texture::Normal => "Normal",
        }
    }
}

impl Oiliness {
    pub const ALL: [Oiliness; 4] = [
        Oiliness::Dry,
        Oiliness::Normal,
        Oiliness::Oily,
        Oiliness::Combination,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Oiliness::Dry => "Dry",
            Oiliness::Normal => "Normal",
            Oiliness::Oily => "Oily",
            Oiliness::Combination => "Combination",
        }
    }
}

impl Pigmentation {
    pub fn label(&self) -> &'static str {
        match self {
            Pigmentation::Even => "Even",
            Pigmentation::Uneven => "Uneven",
            Pigmentation::Hyperpigmented => "Hyperpigmented",
        }
    }
}

impl Redness {
    pub fn label(&self) -> &'static str {
        match self {
            Redness::None => "None",
            Redness::Mild => "Mild",
            Redness::Moderate => "Moderate",
            Redness::Severe => "Severe",
        }
    }
}

/// Fitzpatrick skin type, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FitzpatrickType(u8);

impl FitzpatrickType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, AyurSkinError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AyurSkinError::InvalidFitzpatrick(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for FitzpatrickType {
    type Error = AyurSkinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FitzpatrickType> for u8 {
    fn from(value: FitzpatrickType) -> Self {
        value.0
    }
}

impl fmt::Display for FitzpatrickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of analysing a face photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinAnalysis {
    pub texture: Texture,
    pub oiliness: Oiliness,
    pub pigmentation: Pigmentation,
    pub redness: Redness,
    pub fitzpatrick_type: FitzpatrickType,
    /// Model confidence in [0, 1]
    pub confidence: f64,
}

impl SkinAnalysis {
    /// Confidence as a whole percentage for display.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// A user-supplied photo awaiting analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    /// Declared media type, e.g. "image/jpeg"
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}
