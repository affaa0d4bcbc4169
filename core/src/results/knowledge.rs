//! Embedded dosha knowledge table.

use std::sync::OnceLock;

use crate::analyzer::FitzpatrickType;
use crate::questionnaire::Dosha;

use super::types::{DoshaKnowledge, DoshaProfile};

/// Loaded from `core/config/doshas.toml` at compile time.
const DOSHA_KNOWLEDGE: &str = include_str!("../../config/doshas.toml");

static KNOWLEDGE: OnceLock<DoshaKnowledge> = OnceLock::new();

/// Get the dosha knowledge embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn dosha_knowledge() -> &'static DoshaKnowledge {
    KNOWLEDGE.get_or_init(|| {
        toml::from_str(DOSHA_KNOWLEDGE).expect("embedded doshas.toml must be valid TOML")
    })
}

impl DoshaKnowledge {
    pub fn profile(&self, dosha: Dosha) -> &DoshaProfile {
        match dosha {
            Dosha::Vata => &self.vata,
            Dosha::Pitta => &self.pitta,
            Dosha::Kapha => &self.kapha,
        }
    }

    pub fn fitzpatrick_description(&self, kind: FitzpatrickType) -> &str {
        self.fitzpatrick
            .get(usize::from(kind.value() - FitzpatrickType::MIN))
            .map(String::as_str)
            .unwrap_or_default()
    }
}
