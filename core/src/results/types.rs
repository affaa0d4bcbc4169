//! Type definitions for the results report.

use serde::{Deserialize, Serialize};

use crate::analyzer::SkinAnalysis;
use crate::questionnaire::{Dosha, DoshaScores};

/// Static description of one dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaProfile {
    /// Display name (e.g., "Vata")
    pub name: String,
    /// Governing elements (e.g., "Air & Space")
    pub element: String,
    pub description: String,
    pub skin_characteristics: Vec<String>,
    /// Ayurvedic care recommendations
    pub recommendations: Vec<String>,
}

/// Root of `doshas.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DoshaKnowledge {
    pub vata: DoshaProfile,
    pub pitta: DoshaProfile,
    pub kapha: DoshaProfile,
    /// Descriptions for Fitzpatrick types 1..=6, in order
    pub fitzpatrick: Vec<String>,
}

/// A dosha's share of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoshaShare {
    pub dosha: Dosha,
    pub score: u32,
    pub percentage: f64,
}

impl DoshaShare {
    /// Percentage rounded to a whole number for display.
    pub fn display_percent(&self) -> u32 {
        self.percentage.round() as u32
    }
}

/// The composed report shown on the results step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaReport {
    pub dominant: Dosha,
    pub profile: DoshaProfile,
    pub scores: DoshaScores,
    /// One entry per dosha, in registration order
    pub shares: Vec<DoshaShare>,
    pub analysis: SkinAnalysis,
    pub fitzpatrick_description: String,
    /// Modern skincare advice derived from the analysis
    pub modern_advice: Vec<String>,
}
