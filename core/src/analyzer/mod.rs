//! Skin photo intake and analysis.

pub mod intake;
pub mod provider;
pub mod types;

pub use intake::{validate_media_type, AnalysisTicket, IntakeState, PhotoIntake};
pub use provider::{default_mock_config, AnalysisProvider, MockAnalysisConfig, MockAnalysisProvider};
pub use types::*;
