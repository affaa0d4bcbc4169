//! Analysis providers.
//!
//! The wizard only talks to `AnalysisProvider`, so a real vision model can
//! replace `MockAnalysisProvider` without touching the controller or the
//! results report.

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::AyurSkinError;

use super::types::*;

/// Something that can turn a photo into a `SkinAnalysis`.
pub trait AnalysisProvider {
    /// Short identifier for logging.
    fn name(&self) -> &str;

    /// How long the caller should wait before presenting the result.
    fn latency(&self) -> Duration {
        Duration::ZERO
    }

    fn analyze(&self, upload: &ImageUpload) -> Result<SkinAnalysis, AyurSkinError>;
}

/// Tuning for the random stand-in analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockAnalysisConfig {
    /// Simulated processing time in milliseconds
    pub latency_ms: u64,
    /// Draws above this are reported as smooth texture, else normal
    pub smooth_threshold: f64,
    /// Draws above this are reported as uneven pigmentation, else even
    pub uneven_threshold: f64,
    /// Lower bound of the reported confidence
    pub confidence_min: f64,
    /// Width of the confidence range above `confidence_min`
    pub confidence_span: f64,
}

impl Default for MockAnalysisConfig {
    fn default() -> Self {
        Self {
            latency_ms: 3000,
            smooth_threshold: 0.5,
            uneven_threshold: 0.7,
            confidence_min: 0.75,
            confidence_span: 0.2,
        }
    }
}

/// Mock tuning embedded at compile time from `core/config/mock_analysis.toml`.
const DEFAULT_MOCK_CONFIG: &str = include_str!("../../config/mock_analysis.toml");

/// Get the mock tuning embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_mock_config() -> MockAnalysisConfig {
    MockAnalysisConfig::from_toml_str(DEFAULT_MOCK_CONFIG)
        .expect("embedded mock_analysis.toml must parse")
}

impl MockAnalysisConfig {
    /// Parse from TOML; missing keys fall back to the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, AyurSkinError> {
        toml::from_str(content).map_err(|e| AyurSkinError::Config(e.to_string()))
    }
}

/// Random placeholder for a real skin-analysis model.
///
/// Every field is drawn independently. Texture and pigmentation use a fixed
/// threshold, so `Rough` and `Hyperpigmented` never appear; redness never
/// reports `Severe`.
pub struct MockAnalysisProvider {
    config: MockAnalysisConfig,
    rng: Mutex<StdRng>,
}

impl MockAnalysisProvider {
    pub fn new(config: MockAnalysisConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn config(&self) -> &MockAnalysisConfig {
        &self.config
    }

    fn generate(&self, rng: &mut StdRng) -> Result<SkinAnalysis, AyurSkinError> {
        let texture = if rng.random::<f64>() > self.config.smooth_threshold {
            Texture::Smooth
        } else {
            Texture::Normal
        };
        let oiliness = Oiliness::ALL[rng.random_range(0..Oiliness::ALL.len())];
        let pigmentation = if rng.random::<f64>() > self.config.uneven_threshold {
            Pigmentation::Uneven
        } else {
            Pigmentation::Even
        };
        let redness = [Redness::None, Redness::Mild, Redness::Moderate][rng.random_range(0..3)];
        let fitzpatrick_type =
            FitzpatrickType::new(rng.random_range(FitzpatrickType::MIN..=FitzpatrickType::MAX))?;
        let confidence = self.config.confidence_min + rng.random::<f64>() * self.config.confidence_span;

        Ok(SkinAnalysis {
            texture,
            oiliness,
            pigmentation,
            redness,
            fitzpatrick_type,
            confidence,
        })
    }
}

impl AnalysisProvider for MockAnalysisProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn latency(&self) -> Duration {
        Duration::from_millis(self.config.latency_ms)
    }

    fn analyze(&self, upload: &ImageUpload) -> Result<SkinAnalysis, AyurSkinError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AyurSkinError::Analysis(format!("rng lock poisoned: {}", e)))?;
        let analysis = self.generate(&mut rng)?;
        tracing::info!(
            "Mock analysis of '{}' ({} bytes): fitzpatrick={} confidence={:.2}",
            upload.file_name,
            upload.bytes.len(),
            analysis.fitzpatrick_type,
            analysis.confidence
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> ImageUpload {
        ImageUpload::new("face.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])
    }

    #[test]
    fn test_mock_output_stays_in_policy() {
        let provider = MockAnalysisProvider::new(MockAnalysisConfig::default(), 7);
        for _ in 0..500 {
            let a = provider.analyze(&upload()).unwrap();
            assert_ne!(a.texture, Texture::Rough);
            assert_ne!(a.pigmentation, Pigmentation::Hyperpigmented);
            assert_ne!(a.redness, Redness::Severe);
            assert!((1..=6).contains(&a.fitzpatrick_type.value()));
            assert!(a.confidence >= 0.75 && a.confidence < 0.95, "{}", a.confidence);
        }
    }

    #[test]
    fn test_mock_covers_every_oiliness() {
        let provider = MockAnalysisProvider::new(MockAnalysisConfig::default(), 11);
        let seen: Vec<_> = (0..400)
            .map(|_| provider.analyze(&upload()).unwrap().oiliness)
            .collect();
        for kind in Oiliness::ALL {
            assert!(seen.contains(&kind), "never produced {:?}", kind);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = MockAnalysisProvider::new(MockAnalysisConfig::default(), 42);
        let b = MockAnalysisProvider::new(MockAnalysisConfig::default(), 42);
        for _ in 0..20 {
            assert_eq!(a.analyze(&upload()).unwrap(), b.analyze(&upload()).unwrap());
        }
    }

    #[test]
    fn test_thresholds_pin_fields() {
        let config = MockAnalysisConfig {
            smooth_threshold: 1.0,
            uneven_threshold: -1.0,
            ..MockAnalysisConfig::default()
        };
        let provider = MockAnalysisProvider::new(config, 3);
        for _ in 0..50 {
            let a = provider.analyze(&upload()).unwrap();
            assert_eq!(a.texture, Texture::Normal);
            assert_eq!(a.pigmentation, Pigmentation::Uneven);
        }
    }

    #[test]
    fn test_default_latency_is_three_seconds() {
        let provider = MockAnalysisProvider::new(MockAnalysisConfig::default(), 0);
        assert_eq!(provider.latency(), Duration::from_secs(3));
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config = MockAnalysisConfig::from_toml_str("latency_ms = 250\n").unwrap();
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.confidence_min, 0.75);

        assert!(MockAnalysisConfig::from_toml_str("latency_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(default_mock_config(), MockAnalysisConfig::default());
    }
}
